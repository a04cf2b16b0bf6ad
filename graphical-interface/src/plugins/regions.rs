use egui::epaint::PathShape;
use egui::{Color32, Pos2, Response, Shape, Stroke};
use walkers::{Plugin, Position, Projector};

use geodata::Region;

use crate::state::ViewState;

const HIGHLIGHT_STROKE_WIDTH: f32 = 3.0;
const MUTED_STROKE_WIDTH: f32 = 1.0;

// 0.1 of full opacity, for the constant low fill.
const FILL_ALPHA: u8 = 26;

/// Draws every region boundary over the base tiles, highlighting the ones
/// the active search matched.
pub struct Regions<'a> {
    view: &'a ViewState,
}

impl<'a> Regions<'a> {
    pub fn new(view: &'a ViewState) -> Self {
        Self { view }
    }
}

impl Plugin for Regions<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for region in &self.view.regions.regions {
            let style = if self.view.is_highlighted(region) {
                RegionStyle::highlighted()
            } else {
                RegionStyle::muted()
            };
            draw_region(region, ui, projector, style);
        }
    }
}

/// Outline and fill for one region, derived from its highlight state.
#[derive(Clone, Copy)]
struct RegionStyle {
    stroke: Stroke,
    fill: Color32,
}

impl RegionStyle {
    fn highlighted() -> Self {
        Self {
            stroke: Stroke::new(HIGHLIGHT_STROKE_WIDTH, Color32::YELLOW),
            fill: Color32::from_rgba_unmultiplied(255, 255, 0, FILL_ALPHA),
        }
    }

    fn muted() -> Self {
        Self {
            stroke: Stroke::new(MUTED_STROKE_WIDTH, Color32::TRANSPARENT),
            fill: Color32::TRANSPARENT,
        }
    }
}

fn draw_region(region: &Region, ui: &mut egui::Ui, projector: &Projector, style: RegionStyle) {
    let Some(polygons) = region.multi_polygon() else {
        return;
    };

    for polygon in polygons {
        for (ring_index, ring) in polygon.iter().enumerate() {
            let points: Vec<Pos2> = ring
                .iter()
                .filter(|position| position.len() >= 2)
                .map(|position| {
                    let projected =
                        projector.project(Position::from_lat_lon(position[1], position[0]));
                    projected.to_pos2()
                })
                .collect();

            if points.len() < 3 {
                continue;
            }

            // The first ring is the shell; interior rings are holes and get
            // an outline only.
            let fill = if ring_index == 0 {
                style.fill
            } else {
                Color32::TRANSPARENT
            };

            ui.painter().add(Shape::Path(PathShape {
                points,
                closed: true,
                fill,
                stroke: style.stroke.into(),
            }));
        }
    }
}
