use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use egui::Context;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use geodata::{GeoDataError, GeoJsonFile, RegionCollection, RegionSource};
use logger::{Color, Logger};

use crate::plugins;
use crate::state::{ViewEvent, ViewState};
use crate::viewport::{self, Viewport};
use crate::widgets::WidgetSearch;

const LOAD_POLL_MS: u64 = 100;

/// The viewer application: walkers map state, the current view snapshot,
/// and the in-flight dataset load.
///
/// `ViewerApp` wires the search box, the view-state transitions, and the
/// region overlay into one full-viewport map.
pub struct ViewerApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    state: ViewState,
    search_input: String,
    pending_viewport: Option<Viewport>,
    loading: Option<Receiver<Result<RegionCollection, GeoDataError>>>,
    logger: Logger,
}

impl ViewerApp {
    /// Creates a new `ViewerApp`, starting the dataset load in the
    /// background so the window opens immediately.
    pub fn new(egui_ctx: Context, data_path: PathBuf, logger: Logger) -> Self {
        let mut map_memory = MapMemory::default();
        map_memory.set_zoom(viewport::DEFAULT_ZOOM).ok();

        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let source = GeoJsonFile::new(data_path);
            // The receiver disappearing just means the viewer closed early.
            let _ = sender.send(source.load_regions());
        });

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory,
            state: ViewState::empty(),
            search_input: String::new(),
            pending_viewport: None,
            loading: Some(receiver),
            logger,
        }
    }

    /// Picks up the dataset once the background load finishes. A failed
    /// load is logged and leaves the viewer on an empty map.
    fn poll_dataset(&mut self) {
        let Some(receiver) = &self.loading else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(regions)) => {
                self.logger
                    .info(
                        &format!("Loaded {} region boundaries", regions.len()),
                        Color::Green,
                        true,
                    )
                    .ok();
                self.dispatch(ViewEvent::RegionsLoaded(regions));
                self.loading = None;
            }
            Ok(Err(error)) => {
                self.logger
                    .error(&format!("Error loading boundary dataset: {}", error), true)
                    .ok();
                self.loading = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.logger
                    .error("Boundary dataset loader stopped without a result", true)
                    .ok();
                self.loading = None;
            }
        }
    }

    /// Runs one event through the view state; a changed camera is queued
    /// for the next frame, when the panel size is known.
    fn dispatch(&mut self, event: ViewEvent) {
        let next = self.state.apply(event);
        if next.viewport != self.state.viewport {
            self.pending_viewport = Some(next.viewport.clone());
        }
        self.state = next;
    }

    /// Drives the map widget to the queued camera: center on the viewport
    /// midpoint and zoom to frame its bounds inside `panel_size`, padded.
    /// Without bounds the viewport's own zoom applies.
    fn apply_viewport(&mut self, panel_size: egui::Vec2) {
        let Some(target) = self.pending_viewport.take() else {
            return;
        };

        let (lat, lon) = target.center;
        self.map_memory.center_at(Position::from_lat_lon(lat, lon));

        let zoom = match &target.bounds {
            Some(bounds) => viewport::zoom_to_fit(bounds, panel_size),
            None => target.zoom,
        };
        if self.map_memory.set_zoom(zoom).is_err() {
            self.logger
                .warn(&format!("Zoom level {} rejected by the map widget", zoom), true)
                .ok();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dataset();
        if self.loading.is_some() {
            ctx.request_repaint_after(Duration::from_millis(LOAD_POLL_MS));
        }

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let home = Position::from_lat_lon(
                    viewport::DEFAULT_CENTER_LAT,
                    viewport::DEFAULT_CENTER_LON,
                );

                self.apply_viewport(ui.available_size());

                let regions_plugin = plugins::Regions::new(&self.state);

                let map = Map::new(Some(self.tiles.as_mut()), &mut self.map_memory, home)
                    .with_plugin(regions_plugin);

                ui.add(map);
            });

        if WidgetSearch::show(ctx, &mut self.search_input) {
            self.dispatch(ViewEvent::TermChanged(self.search_input.clone()));
            // The queued camera is applied next frame, once the panel size
            // is known.
            if self.pending_viewport.is_some() {
                ctx.request_repaint();
            }
        }
    }
}
