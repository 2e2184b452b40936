use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    process::exit,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{
    DEFAULT_PORT, PORT_ENV_KEY, build_router, create_app_state, graceful_shutdown,
    logging_middleware, parse_port_or_default,
};

/// The web server for expense_tracker.
///
/// The port is read from the `PORT` environment variable, defaulting to 3000.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, default_value = "expenses.db")]
    db_path: PathBuf,

    /// Directory containing the browser client's HTML, CSS and JavaScript.
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// The address of the interface to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// File path to write debug logs to.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_path);

    let port = match parse_port_or_default(PORT_ENV_KEY, DEFAULT_PORT) {
        Ok(port) => port,
        Err(error) => {
            tracing::error!("{error}");
            exit(1);
        }
    };
    let addr = SocketAddr::new(args.host, port);

    let conn = Connection::open(&args.db_path).unwrap_or_else(|error| {
        tracing::error!("Could not open database at {:?}: {error}", args.db_path);
        exit(1);
    });
    let app_state = create_app_state(conn).unwrap_or_else(|error| {
        tracing::error!("Could not initialize database: {error}");
        exit(1);
    });

    if !args.static_dir.is_dir() {
        tracing::warn!(
            "The static directory {:?} does not exist, the browser client will not be served.",
            args.static_dir
        );
    }

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(app_state, &args.static_dir)
        .layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging(log_path: &Path) {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .expect("Could not create log file");

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
        // By default, `TraceLayer` will log 5xx responses but SQL errors are
        // already logged when they are converted into `Error`.
        .on_failure(());

    router.layer(tracing_layer)
}
