// Application state and key handling for the terminal map

pub mod fetcher;
pub mod input;
pub mod search;
pub mod state;
pub mod surface;

pub use fetcher::{FetchOutcome, SpotFetcher};
pub use input::handle_input;
pub use state::{App, AppScreen, PanDirection};
pub use surface::{CanvasSurface, PlacedMarker};
