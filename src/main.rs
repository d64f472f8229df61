//! Storefront Admin - Main Entry Point
//!
//! Native back-office client for the storefront REST API.

use storefront_admin::app::application::run_app;
use storefront_admin::helpers::get_or_create_data_dir;
use time::macros::format_description;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Daily rolling file next to the app data; the guard flushes on exit
    let (file_writer, _guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
                dir.join("logs"),
                "storefront-admin.log",
            ));
            (Some(writer), Some(guard))
        }
        Err(e) => {
            eprintln!("log directory unavailable: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()))
        .with(file_writer.map(|writer| fmt::layer().with_ansi(false).with_timer(timer).with_writer(writer)))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Storefront Admin...");

    run_app();
}
