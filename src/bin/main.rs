use std::env;
use std::fs;
use std::path::PathBuf;

use logger::Logger;

const DEFAULT_DATA_PATH: &str = "data/provinces.geojson";
const DEFAULT_LOG_DIR: &str = "logs";

/// Main entry point of the province map viewer.
///
/// Opens a full-viewport map over the province boundary dataset, with a
/// search box to highlight and zoom to a region by name.
///
/// # Usage
///
/// ```sh
/// cargo run -- [dataset.geojson] [log_dir]
/// ```
///
/// Both arguments are optional: the dataset defaults to
/// `data/provinces.geojson` and log output goes to `logs/viewer.log`.
///
/// # Errors
///
/// The program returns an error if:
/// - Too many arguments are provided.
/// - The log directory cannot be created.
/// - The viewer window cannot be opened.
///
/// A missing or unreadable dataset is NOT fatal: the viewer opens on an
/// empty map and the failure is logged.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        return Err(format!(
            "Usage: {} [dataset.geojson] [log_dir]",
            args.first().map(String::as_str).unwrap_or("nusantara")
        ));
    }

    let data_path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or(DEFAULT_DATA_PATH));
    let log_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_LOG_DIR));

    fs::create_dir_all(&log_dir)
        .map_err(|e| format!("Failed to create log directory {}: {}", log_dir.display(), e))?;

    let logger = Logger::new(&log_dir).map_err(|e| e.to_string())?;

    graphical_interface::run(data_path, logger).map_err(|e| e.to_string())
}
