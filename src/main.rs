use std::env;

use tracing::{error, Level};

use crypto_etl::{
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    error::Error,
    handler::market_snapshots,
    provider::{DatabasePool, Http},
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // A missing or malformed configuration aborts before any extraction
    // or load is attempted.
    let (config, database) = match init().await {
        Ok((config, database)) => (config, database),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let http = Http::new(config.clone())?;
    let state = State::new(config, database, http);
    let app_state = AppState::new(state);

    // `once` runs a single pipeline and reports success or failure
    // through the exit code, for an external scheduler such as cron.
    if env::args().nth(1).as_deref() == Some("once") {
        return market_snapshots::fetch_insert(app_state).await;
    }

    market_snapshots::fetch_insert(app_state.clone()).await?;

    let (_, _) = tokio::try_join!(
        market_snapshots::snapshot_task(app_state.clone()),
        server::server_task(&app_state),
    )?;

    Ok(())
}

async fn init() -> Result<(Config, DatabasePool), Error> {
    set_configuration()?;
    let config = get_configuration()?;
    let database = DatabasePool::new(&config).await?;
    Ok((config, database))
}
