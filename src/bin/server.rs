use std::{fs::OpenOptions, net::SocketAddr, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use tally::{
    AppState, AppwriteConfig, AppwriteStore, CollectionIds, build_router, graceful_shutdown,
    logging_middleware,
};

/// The web server for Tally.
///
/// The Appwrite API key is read from the environment variable `APPWRITE_API_KEY`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the timezone used to display dates, e.g. "Pacific/Auckland".
    #[arg(long, env = "LOCAL_TIMEZONE", default_value = "Etc/UTC")]
    local_timezone: String,

    /// File path to write the debug log to.
    #[arg(long, default_value = "debug.log")]
    log_path: String,

    /// The base URL of the Appwrite REST API, e.g. "https://cloud.appwrite.io/v1".
    #[arg(long, env = "APPWRITE_ENDPOINT")]
    appwrite_endpoint: String,

    /// The ID of the Appwrite project.
    #[arg(long, env = "APPWRITE_PROJECT")]
    appwrite_project: String,

    /// The ID of the Appwrite database that holds the records.
    #[arg(long, env = "APPWRITE_DATABASE")]
    appwrite_database: String,

    /// The ID of the collection of food purchases.
    #[arg(long, env = "APPWRITE_FOOD_COLLECTION", default_value = "foods")]
    food_collection: String,

    /// The ID of the collection of subscriptions.
    #[arg(
        long,
        env = "APPWRITE_SUBSCRIPTION_COLLECTION",
        default_value = "subscriptions"
    )]
    subscription_collection: String,

    /// The ID of the collection of bank accounts.
    #[arg(long, env = "APPWRITE_BANK_COLLECTION", default_value = "banks")]
    bank_collection: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!("Could not create log file {}: {error}", args.log_path);
        return ExitCode::FAILURE;
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let collections = CollectionIds {
        food: args.food_collection,
        subscription: args.subscription_collection,
        bank: args.bank_collection,
    };
    let config = AppwriteConfig {
        endpoint: args.appwrite_endpoint,
        project_id: args.appwrite_project,
        database_id: args.appwrite_database,
        api_key: std::env::var("APPWRITE_API_KEY").ok(),
    };

    if config.api_key.is_none() {
        tracing::warn!(
            "APPWRITE_API_KEY is not set, requests will only succeed if the collections allow guest access"
        );
    }

    let store = AppwriteStore::new(&config);
    let state = match AppState::new(Arc::new(store), collections, &args.local_timezone) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("The server stopped unexpectedly: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &str) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are converted into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
