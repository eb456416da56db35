use crate::domain::{CoordinatePolicy, LatLon, Spot};
use crate::popup::Popup;

/// Paris, where the map opens.
pub const DEFAULT_CENTER: LatLon = LatLon::new(48.8566, 2.3522);
pub const DEFAULT_ZOOM: f64 = 4.0;
pub const MIN_ZOOM: f64 = 0.0;

/// The base tile layer drawn under every marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayer {
    pub url_template: &'static str,
    /// HTML, for Leaflet.
    pub attribution: &'static str,
    /// The same credit as plain text, for terminals and logs.
    pub plain_attribution: &'static str,
    pub max_zoom: f64,
}

impl TileLayer {
    pub const OPEN_STREET_MAP: Self = Self {
        url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>",
        plain_attribution: "© OpenStreetMap contributors",
        max_zoom: 19.0,
    };
}

/// Center and zoom of the visible map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapView {
    pub fn zoom_by(&mut self, delta: f64, layer: &TileLayer) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, layer.max_zoom);
    }

    /// Moves the center, wrapping longitude and clamping latitude to the
    /// range web mercator can show.
    pub fn pan(&mut self, d_lat: f64, d_lon: f64) {
        let lat = (self.center.lat + d_lat).clamp(-85.0, 85.0);
        let lon = (self.center.lon + d_lon + 180.0).rem_euclid(360.0) - 180.0;
        self.center = LatLon::new(lat, lon);
    }
}

/// Whatever actually draws markers: Leaflet in the browser, a canvas in the
/// terminal, a recorder in tests.
pub trait MapSurface {
    type Marker;

    fn add_marker(&mut self, position: LatLon, popup: Popup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);
}

/// Owns the loaded spot list and the markers currently on the surface.
pub struct MapRenderer<S: MapSurface> {
    surface: S,
    policy: CoordinatePolicy,
    all_spots: Vec<Spot>,
    markers: Vec<S::Marker>,
}

impl<S: MapSurface> MapRenderer<S> {
    pub const fn new(surface: S, policy: CoordinatePolicy) -> Self {
        Self {
            surface,
            policy,
            all_spots: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Replaces every marker with one per spot that has usable coordinates,
    /// in input order. Returns the number of markers placed.
    pub fn render_spots(&mut self, spots: &[Spot]) -> usize {
        for marker in self.markers.drain(..) {
            self.surface.remove_marker(marker);
        }

        for spot in spots {
            let Some(position) = spot.position(self.policy) else {
                tracing::debug!(name = %spot.name, "skipping spot without coordinates");
                continue;
            };
            let marker = self.surface.add_marker(position, Popup::for_spot(spot));
            self.markers.push(marker);
        }

        tracing::debug!(
            spots = spots.len(),
            markers = self.markers.len(),
            "rendered spots"
        );
        self.markers.len()
    }

    /// Stores a freshly fetched full list and renders it.
    pub fn replace_all_spots(&mut self, spots: Vec<Spot>) -> usize {
        self.all_spots = spots;
        self.render_all_spots()
    }

    /// Re-renders the stored full list without fetching anything.
    pub fn render_all_spots(&mut self) -> usize {
        let spots = std::mem::take(&mut self.all_spots);
        let placed = self.render_spots(&spots);
        self.all_spots = spots;
        placed
    }

    pub fn all_spots(&self) -> &[Spot] {
        &self.all_spots
    }

    pub fn markers(&self) -> &[S::Marker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub const fn policy(&self) -> CoordinatePolicy {
        self.policy
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{spot, RecordingSurface};
    use super::*;

    fn renderer() -> MapRenderer<RecordingSurface> {
        MapRenderer::new(RecordingSurface::default(), CoordinatePolicy::Truthy)
    }

    #[test]
    fn one_marker_per_valid_spot() {
        let mut map = renderer();
        let spots = vec![
            spot("A", Some(48.85), Some(2.35)),
            spot("B", None, Some(2.0)),
            spot("C", Some(45.0), None),
            spot("D", Some(51.5), Some(-0.12)),
        ];

        assert_eq!(map.render_spots(&spots), 2);
        assert_eq!(map.marker_count(), 2);
        assert_eq!(map.surface().titles(), vec!["A", "D"]);
        assert_eq!(
            map.surface().visible[0].position,
            LatLon::new(48.85, 2.35)
        );
    }

    #[test]
    fn second_render_replaces_first() {
        let mut map = renderer();
        let first = vec![
            spot("A1", Some(1.0), Some(1.0)),
            spot("A2", Some(2.0), Some(2.0)),
            spot("A3", Some(3.0), Some(3.0)),
        ];
        let second = vec![spot("B1", Some(4.0), Some(4.0)), spot("B2", None, None)];

        map.render_spots(&first);
        map.render_spots(&second);

        assert_eq!(map.marker_count(), 1);
        assert_eq!(map.surface().titles(), vec!["B1"]);
        assert_eq!(map.surface().removed, 3);
    }

    #[test]
    fn rendering_is_idempotent_in_visible_state() {
        let mut map = renderer();
        let spots = vec![spot("A", Some(1.0), Some(1.0)), spot("B", Some(2.0), Some(2.0))];

        map.render_spots(&spots);
        let before: Vec<_> = map.surface().visible.iter().map(|p| p.position).collect();
        let first_ids = map.markers().to_vec();
        map.render_spots(&spots);
        let after: Vec<_> = map.surface().visible.iter().map(|p| p.position).collect();

        assert_eq!(before, after);
        assert_ne!(first_ids, map.markers().to_vec());
    }

    #[test]
    fn zero_coordinate_follows_policy() {
        let spots = vec![spot("Equator", Some(0.0), Some(10.0))];

        let mut truthy = renderer();
        assert_eq!(truthy.render_spots(&spots), 0);

        let mut present = MapRenderer::new(RecordingSurface::default(), CoordinatePolicy::Present);
        assert_eq!(present.render_spots(&spots), 1);
    }

    #[test]
    fn replace_all_spots_keeps_backend_order() {
        let mut map = renderer();
        let spots = vec![
            spot("Z", Some(1.0), Some(1.0)),
            spot("A", Some(2.0), Some(2.0)),
        ];

        map.replace_all_spots(spots);

        let names: Vec<_> = map.all_spots().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
        assert_eq!(map.surface().titles(), vec!["Z", "A"]);
    }

    #[test]
    fn plain_attribution_has_no_markup() {
        let layer = TileLayer::OPEN_STREET_MAP;
        assert!(layer.attribution.contains("<a href"));
        assert!(!layer.plain_attribution.contains('<'));
        assert!(!layer.plain_attribution.contains("&copy;"));
        assert!(layer.plain_attribution.contains("OpenStreetMap"));
    }

    #[test]
    fn view_zoom_is_clamped_to_layer() {
        let mut view = MapView::default();
        view.zoom_by(100.0, &TileLayer::OPEN_STREET_MAP);
        assert!((view.zoom - 19.0).abs() < f64::EPSILON);
        view.zoom_by(-100.0, &TileLayer::OPEN_STREET_MAP);
        assert!(view.zoom.abs() < f64::EPSILON);
    }

    #[test]
    fn pan_wraps_longitude() {
        let mut view = MapView {
            center: LatLon::new(0.0, 175.0),
            zoom: DEFAULT_ZOOM,
        };
        view.pan(100.0, 10.0);
        assert!((view.center.lon + 175.0).abs() < 1e-9);
        assert!((view.center.lat - 85.0).abs() < f64::EPSILON);
    }
}
