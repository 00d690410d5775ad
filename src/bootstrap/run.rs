//! Process entry: configuration, logging, wiring, then the poll loop
//! until the process is interrupted or the gateway gives up.

use tracing::info;

use super::{config, tracing as trace, wiring};

pub async fn run() -> anyhow::Result<()> {
    // `.env` is optional; its absence is not an error.
    dotenvy::dotenv().ok();

    let path = config::config_path();
    let config = config::apply_env_overrides(config::load_config(&path)?);

    let data_dir = wiring::resolve_data_dir(&config)?;
    trace::init_tracing_subscriber(&config, &data_dir.join("logs"))?;
    info!(
        config = %path.display(),
        data = %data_dir.display(),
        "captionbot starting"
    );

    let runtime = wiring::wire_dependencies(&config, &data_dir)?;

    let me = runtime.client.get_me().await?;
    info!(
        bot = me.username.as_deref().unwrap_or("unknown"),
        id = me.id,
        "bot identity confirmed"
    );

    tokio::select! {
        result = runtime.poller.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            Ok(())
        }
    }
}
