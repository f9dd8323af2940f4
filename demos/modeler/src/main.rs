//! Drives the trellis GUI of a model viewer headlessly, from an optional TOML script.
//!
//! ```text
//! RUST_LOG=debug modeler-demo demos/modeler/modeler.toml
//! ```

mod app;
mod config;

use {
    anyhow::Context,
    config::ModelerConfig,
    std::path::PathBuf,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ModelerConfig::load(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ModelerConfig::default(),
    };

    info!(width = config.width, height = config.height, frames = config.frames, "starting modeler");
    let session = app::run(&config).context("frame did not present cleanly")?;

    info!(
        frames = session.frames,
        zoom = session.modeler.zoom(),
        angle = session.modeler.angle(),
        model = session.modeler.requested_model().unwrap_or("none"),
        commands = session.last_frame.len(),
        "modeler finished"
    );
    Ok(())
}
