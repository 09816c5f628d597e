pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod notify;
pub mod propagation;
pub mod render;
pub mod resolve;
pub mod session;
pub mod tokens;
pub mod view;
pub use error::{AppError, AppResult};
pub use session::TokenSession;

/// Entrypoint used by the CLI binary: prints the token snapshot and the default
/// variant's resolution table.
pub fn run() -> AppResult<()> {
    let config = config::load_app_config();
    logging::init(config.log_filter.as_deref());
    tracing::info!("starting tokenflow");

    let session = TokenSession::from_config(&config);
    println!("{}", session.snapshot_json()?);

    let explorer = session.explorer();
    println!("\n{} / {}", explorer.component(), explorer.variant());
    for row in session.resolve_active_variant()? {
        if row.is_reference {
            println!("  {} -> {} = {}", row.component_token, row.reference, row.resolved);
        } else {
            println!("  {} -> {}", row.component_token, row.reference);
        }
    }

    tracing::info!(
        tokens = session.store().len(),
        phase = ?session.controller().phase(),
        "startup complete"
    );
    Ok(())
}
