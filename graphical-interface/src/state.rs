use geodata::{filter_by_name, BoundingBox, Region, RegionCollection};

use crate::viewport::Viewport;

/// Discrete inputs that can change what the viewer shows.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The boundary dataset finished loading.
    RegionsLoaded(RegionCollection),
    /// The search box content changed.
    TermChanged(String),
}

/// Tracks everything the viewer currently shows: the canonical dataset, the
/// filtered view the active search produced, and the wanted camera.
///
/// Snapshots are never mutated in place; [`ViewState::apply`] builds the
/// next snapshot from an event, re-running the filter → bounds → viewport
/// chain on its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// The dataset as loaded. Never changes after the load.
    pub regions: RegionCollection,
    /// The subset the current search term selects.
    pub filtered: RegionCollection,
    pub search_term: String,
    pub viewport: Viewport,
}

impl ViewState {
    /// The state before the dataset has loaded: nothing to draw, default
    /// camera.
    pub fn empty() -> Self {
        Self {
            regions: RegionCollection::default(),
            filtered: RegionCollection::default(),
            search_term: String::new(),
            viewport: Viewport::home(),
        }
    }

    pub fn apply(&self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::RegionsLoaded(regions) => ViewState {
                filtered: regions.clone(),
                regions,
                search_term: String::new(),
                viewport: Viewport::home(),
            },
            ViewEvent::TermChanged(term) => self.with_term(term),
        }
    }

    /// The filter stage: an empty term restores the full dataset and the
    /// default camera; anything else narrows the view to exact
    /// case-insensitive name matches and frames the first one.
    ///
    /// A term that matches nothing (or whose first match has no
    /// MultiPolygon boundary) leaves the previous camera in place.
    fn with_term(&self, term: String) -> ViewState {
        if term.is_empty() {
            return ViewState {
                regions: self.regions.clone(),
                filtered: self.regions.clone(),
                search_term: term,
                viewport: Viewport::home(),
            };
        }

        let filtered = filter_by_name(&self.regions, &term);
        let viewport = match filtered.first().and_then(BoundingBox::of_region) {
            Some(bounds) => Viewport::framing(bounds),
            None => self.viewport.clone(),
        };

        ViewState {
            regions: self.regions.clone(),
            filtered,
            search_term: term,
            viewport,
        }
    }

    /// Whether `region` belongs to the active search result. Always false
    /// while no term is entered.
    pub fn is_highlighted(&self, region: &Region) -> bool {
        if self.search_term.is_empty() {
            return false;
        }

        region.name().is_some_and(|name| {
            self.filtered
                .regions
                .iter()
                .any(|candidate| candidate.name() == Some(name))
        })
    }
}
