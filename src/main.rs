use anyhow::Context;
use clap::Parser;
use staffdesk::cli::Cli;
use staffdesk::logging::{self, LOG_ENV_VAR};
use staffdesk::shutdown::ShutdownHandle;
use staffdesk::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    let filter = logging::resolve_filter(
        cli.log_level.as_deref(),
        std::env::var(LOG_ENV_VAR).ok(),
        &config.logging.level,
    );
    let log_path = config.logging.file_path();
    logging::init(&filter, &log_path).context("Failed to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "staffdesk starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("staffdesk-worker")
        .build()
        .context("Failed to start async runtime")?;

    let shutdown = ShutdownHandle::new();
    let result = ui::run(&config, runtime.handle(), shutdown.clone());

    shutdown.signal();
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    result.context("UI terminated with an error")?;
    tracing::info!("staffdesk stopped");
    Ok(())
}
