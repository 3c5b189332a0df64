pub use self::{database::DatabasePool, http::Http};

mod database;
mod http;
