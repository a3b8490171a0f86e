use clap::Parser;
use starrr::app::App;
use starrr::cli::Args;
use starrr::config::Config;
use starrr::logging::setup_logging;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config before App::new() so startup logs are never silently dropped
    let config = Config::load().expect("Failed to load config");
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        },
        "starting starrr"
    );

    let app = App::new(config).expect("Failed to initialize application");
    app.run().await
}
