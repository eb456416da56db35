use cozy_map_core::{LatLon, MapSurface, Popup};

pub type MarkerId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub position: LatLon,
    pub popup: Popup,
}

/// Markers drawn on the terminal canvas, in placement order.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    next_id: MarkerId,
    markers: Vec<PlacedMarker>,
}

impl CanvasSurface {
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&PlacedMarker> {
        self.markers.get(index)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MapSurface for CanvasSurface {
    type Marker = MarkerId;

    fn add_marker(&mut self, position: LatLon, popup: Popup) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.push(PlacedMarker {
            id,
            position,
            popup,
        });
        id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        if let Some(index) = self.markers.iter().position(|placed| placed.id == marker) {
            self.markers.remove(index);
        }
    }
}
