use std::marker::PhantomData;

use crate::dao::PoolType;

/// Typed handle over the shared connection pool; the dao layer hangs its
/// queries off `Table<T>` per row type.
#[derive(Debug)]
pub struct Table<T> {
    pub pool: PoolType,
    _marker: PhantomData<T>,
}

impl<T> Table<T> {
    pub fn new(pool: PoolType) -> Self {
        Table {
            pool,
            _marker: PhantomData,
        }
    }
}
