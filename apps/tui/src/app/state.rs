use chrono::{DateTime, Local};
use cozy_map_core::{CoordinatePolicy, FilterMode, MapView, SpotEndpoint, SpotMap, TileLayer};
use std::path::PathBuf;
use throbber_widgets_tui::ThrobberState;

use crate::app::fetcher::FetchOutcome;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::search::SearchState;
use crate::app::surface::{CanvasSurface, MarkerId, PlacedMarker};
use crate::config::Settings;
use crate::export::{render_kml, write_kml};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Map,
    Search,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub map: SpotMap<CanvasSurface>,
    pub view: MapView,
    pub layer: TileLayer,
    /// Marker ids are never reused, so a re-render drops the selection.
    pub selected_marker: Option<MarkerId>,
    pub search: SearchState,
    pub status_message: String,
    pub pending_reload: Option<SpotEndpoint>,
    pub in_flight: usize,
    pub throbber: ThrobberState,
    pub export_path: PathBuf,
    pub last_update: Option<DateTime<Local>>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            running: true,
            screen: AppScreen::Map,
            map: SpotMap::new(
                CanvasSurface::default(),
                settings.coordinate_policy,
                settings.signed_in(),
            ),
            view: MapView::default(),
            layer: TileLayer::OPEN_STREET_MAP,
            selected_marker: None,
            search: SearchState::default(),
            status_message: String::new(),
            pending_reload: None,
            in_flight: 0,
            throbber: ThrobberState::default(),
            export_path: settings.export_path.clone(),
            last_update: None,
        }
    }

    /// The first request, issued when the map opens.
    pub fn start(&mut self) -> SpotEndpoint {
        let endpoint = self.map.initial_load();
        self.in_flight += 1;
        endpoint
    }

    /// Re-fetches the list the filter currently shows.
    pub fn reload(&mut self) -> SpotEndpoint {
        let endpoint = if self.filter_mode().is_mine() {
            SpotEndpoint::Mine
        } else {
            SpotEndpoint::All
        };
        self.in_flight += 1;
        self.pending_reload = Some(endpoint);
        self.status_message = format!("Reloading {}...", endpoint.label());
        endpoint
    }

    /// Flips the "only my spots" filter. Returns the request to start, if
    /// any; switching back to all spots re-renders the cached list.
    pub fn toggle_filter(&mut self) -> Option<SpotEndpoint> {
        let Some(change) = self.map.flip_toggle() else {
            self.status_message = "Sign in (--session) to filter your own spots".to_string();
            return None;
        };

        self.status_message = change.label.to_string();
        self.pending_reload = None;
        self.drop_stale_selection();
        if change.fetch.is_some() {
            self.in_flight += 1;
        }
        change.fetch
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let FetchOutcome { endpoint, result } = outcome;
        if self.pending_reload == Some(endpoint) {
            self.pending_reload = None;
            self.status_message.clear();
        }

        match self.map.finish_load(endpoint, result) {
            Ok(placed) => {
                tracing::info!(endpoint = endpoint.path(), placed, "spots rendered");
                self.last_update = Some(Local::now());
                self.drop_stale_selection();
                if !self.search.query.is_empty() {
                    self.refresh_search();
                }
            }
            Err(error) => {
                tracing::error!(endpoint = endpoint.path(), %error, "Error fetching {}", endpoint.label());
            }
        }
    }

    pub fn update(&mut self) {
        if self.in_flight > 0 {
            self.throbber.calc_next();
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.map.filter_mode()
    }

    pub const fn coordinate_policy(&self) -> CoordinatePolicy {
        self.map.renderer().policy()
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        self.map.renderer().surface().markers()
    }

    pub fn marker_count(&self) -> usize {
        self.map.renderer().marker_count()
    }

    pub fn loaded_count(&self) -> usize {
        self.map.renderer().all_spots().len()
    }

    /// Position of the selected marker in placement order.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_marker?;
        self.markers().iter().position(|marker| marker.id == id)
    }

    pub fn selected(&self) -> Option<&PlacedMarker> {
        self.selected_index()
            .and_then(|index| self.markers().get(index))
    }

    fn select_index(&mut self, index: usize) {
        self.selected_marker = self.markers().get(index).map(|marker| marker.id);
    }

    pub fn select_next(&mut self) {
        let len = self.marker_count();
        if len == 0 {
            self.selected_marker = None;
            return;
        }
        let index = self.selected_index().map_or(0, |i| wrap_increment(i, len));
        self.select_index(index);
    }

    pub fn select_prev(&mut self) {
        let len = self.marker_count();
        if len == 0 {
            self.selected_marker = None;
            return;
        }
        let index = self
            .selected_index()
            .map_or(len - 1, |i| wrap_decrement(i, len));
        self.select_index(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected_marker = None;
    }

    fn drop_stale_selection(&mut self) {
        if self.selected_index().is_none() {
            self.selected_marker = None;
        }
    }

    pub fn center_on_selected(&mut self) {
        if let Some(position) = self.selected().map(|marker| marker.position) {
            self.view.center = position;
        }
    }

    /// Degrees moved per key press: an eighth of the visible width.
    pub fn pan_step(&self) -> f64 {
        360.0 / 2_f64.powf(self.view.zoom) / 8.0
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let step = self.pan_step();
        match direction {
            PanDirection::North => self.view.pan(step, 0.0),
            PanDirection::South => self.view.pan(-step, 0.0),
            PanDirection::East => self.view.pan(0.0, step),
            PanDirection::West => self.view.pan(0.0, -step),
        }
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_by(1.0, &self.layer);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_by(-1.0, &self.layer);
    }

    pub fn reset_view(&mut self) {
        self.view = MapView::default();
    }

    pub fn open_search(&mut self) {
        self.search.clear();
        self.refresh_search();
        self.screen = AppScreen::Search;
    }

    pub fn refresh_search(&mut self) {
        let names = self
            .map
            .renderer()
            .surface()
            .markers()
            .iter()
            .map(|marker| marker.popup.title.as_str());
        self.search.refresh(names);
    }

    /// Selects and centers on the best match, then closes the search.
    pub fn accept_search(&mut self) {
        if let Some(index) = self.search.best() {
            self.select_index(index);
            self.center_on_selected();
        } else if !self.search.query.is_empty() {
            self.status_message = format!("No spot matches \"{}\"", self.search.query);
        }
        self.screen = AppScreen::Map;
    }

    pub fn cancel_search(&mut self) {
        self.search.clear();
        self.screen = AppScreen::Map;
    }

    /// Writes the markers currently on the map to the export file.
    pub fn export_markers(&mut self) -> std::io::Result<PathBuf> {
        let kml = render_kml(
            self.markers()
                .iter()
                .map(|marker| (marker.position, &marker.popup)),
            &Local::now(),
        );
        write_kml(&self.export_path, &kml)?;
        Ok(self.export_path.clone())
    }

    pub fn export_and_report(&mut self) {
        match self.export_markers() {
            Ok(path) => {
                self.status_message = format!(
                    "Exported {} spots to {}",
                    self.marker_count(),
                    path.display()
                );
            }
            Err(error) => {
                tracing::error!(%error, path = %self.export_path.display(), "export failed");
                self.status_message = format!("Export failed: {error}");
            }
        }
    }
}
