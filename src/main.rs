use tracing_subscriber::EnvFilter;

use viewing_log::catalog::JsonCatalog;
use viewing_log::config::Config;
use viewing_log::report;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        list = %config.list,
        catalog_dir = %config.catalog_dir.display(),
        "Rendering list"
    );

    let catalog = JsonCatalog::new(&config.catalog_dir);
    let stdout = std::io::stdout();
    report::render(&config, &catalog, &mut stdout.lock())?;

    Ok(())
}
