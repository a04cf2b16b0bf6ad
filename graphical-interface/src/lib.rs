use std::path::PathBuf;

use logger::Logger;

mod map;
mod plugins;
mod state;
mod viewport;
mod widgets;

pub use state::{ViewEvent, ViewState};
pub use viewport::Viewport;

use map::ViewerApp;

/// Opens the viewer window over the dataset at `data_path`.
pub fn run(data_path: PathBuf, logger: Logger) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Province Map Viewer",
        Default::default(),
        Box::new(|cc| {
            Ok(Box::new(ViewerApp::new(
                cc.egui_ctx.clone(),
                data_path,
                logger,
            )))
        }),
    )
}
