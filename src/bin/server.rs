use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

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

use spending_tracker::{
    AppState, TransactionStore, build_router, get_local_offset, graceful_shutdown,
    logging_middleware,
};

/// The web server for spending_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the CSV file that stores transactions.
    ///
    /// The file is created with a header row if it does not exist.
    #[arg(long, default_value = "transactions.csv")]
    transactions_path: PathBuf,

    /// The address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to pick the default date for new transactions.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// File path for the debug log.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!(
            "Could not open log file {}: {error}",
            args.log_path.display()
        );
        return ExitCode::FAILURE;
    }

    if get_local_offset(&args.timezone).is_none() {
        tracing::error!("Invalid timezone {}", args.timezone);
        return ExitCode::FAILURE;
    }

    let app_state = match AppState::new(
        TransactionStore::new(args.transactions_path.clone()),
        &args.timezone,
    ) {
        Ok(app_state) => app_state,
        Err(error) => {
            tracing::error!(
                "Could not open transactions file {}: {error}",
                args.transactions_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let addr = SocketAddr::new(args.host, args.port);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(app_state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &Path) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

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
        // Errors are logged where they occur, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}
