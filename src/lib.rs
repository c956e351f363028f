pub mod api;
pub mod app;
pub mod chart;
mod config;
pub mod controller;
pub mod error;
pub mod intake;
pub mod logging;
pub mod notification;
pub mod results;
pub mod state;
pub mod stats;
pub mod theme;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting MriScope");

    let mut app = app::App::new();
    app.start()?;

    tracing::info!("main window closed");
    Ok(())
}
