use std::{error::Error, fs::File, str::FromStr, sync::Arc};

use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

use crate::dir::TesseraDirectory;

const GUI_LOG_FILE_NAME: &str = "tessera-gui.log";

/// Registers a global subscriber writing to both stdout and a log file in the
/// data directory. Noise from the renderer and network stacks is filtered out.
pub fn setup_logger(
    log_level: LevelFilter,
    datadir: TesseraDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = datadir.path().join(GUI_LOG_FILE_NAME);
    let file = File::create(log_path)?;
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(BoxMakeWriter::new(Arc::new(file)))
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("iced_wgpu")
                        && !metadata.target().starts_with("iced_winit")
                        && !metadata.target().starts_with("iced_graphics")
                        && !metadata.target().starts_with("wgpu_core")
                        && !metadata.target().starts_with("wgpu_hal")
                        && !metadata.target().starts_with("naga")
                        && !metadata.target().starts_with("winit")
                        && !metadata.target().starts_with("cosmic_text")
                        && !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("tokio")
                        && !metadata.target().starts_with("hyper")
                        && !metadata.target().starts_with("rustls")
                        && !metadata.target().starts_with("reqwest")
                })),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
