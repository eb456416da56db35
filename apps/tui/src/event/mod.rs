mod headless;
mod loop_handler;

pub use headless::{build_headless_stats, run_headless, HeadlessSpot, HeadlessStats};
pub use loop_handler::run;
