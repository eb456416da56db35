// Shared map logic for the terminal viewer and the web client
pub mod domain;
pub mod error;
pub mod map;
pub mod popup;
pub mod session;
pub mod toggle;

pub use domain::{parse_spots, CoordinatePolicy, LatLon, Spot};
pub use error::SpotError;
pub use map::{MapRenderer, MapSurface, MapView, TileLayer};
pub use popup::Popup;
pub use session::{SpotEndpoint, SpotMap, ToggleChange};
pub use toggle::{FilterMode, FilterToggle, ToggleAction};
