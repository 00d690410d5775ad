//! Tracing setup for the bot process.
//!
//! Console output plus a daily-rotated file under the data directory.
//! The non-blocking writer guard lives in a static so buffered lines
//! survive until process exit.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use super::config::BotConfig;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const LOG_FILE_PREFIX: &str = "captionbot.log";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default directives: workspace crates chatty, dependencies quiet.
/// Extra directives from the config land after the defaults so they win.
fn build_filter_directives(is_dev: bool, extra: &str) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![
        "warn".to_string(),
        format!("captionbot={crate_level}"),
        format!("cb_core={crate_level}"),
        format!("cb_app={crate_level}"),
        format!("cb_infra={crate_level}"),
        format!("cb_telegram={crate_level}"),
    ];
    directives.extend(
        extra
            .split(',')
            .map(str::trim)
            .filter(|directive| !directive.is_empty())
            .map(str::to_string),
    );
    directives
}

/// Installs the global subscriber. `RUST_LOG` overrides everything;
/// without it the defaults plus the config's extra directives apply.
///
/// Call once, before anything logs. A second call is an error.
pub fn init_tracing_subscriber(config: &BotConfig, log_dir: &Path) -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development(), &config.log_directives);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    let stdout_layer = fmt::layer()
        .compact()
        .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_writer(io::stdout);

    let file_layer = match build_file_writer(log_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        ),
        Err(err) => {
            eprintln!("file logging unavailable, console only: {err}");
            None
        }
    };

    let subscriber = registry().with(env_filter).with(stdout_layer);
    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("tracing log guard already initialized"))?;

    Ok(non_blocking)
}
