pub const LABEL_ALL: &str = "Show only my spots";
pub const LABEL_MINE: &str = "Showing only my spots ☕";

/// Which spot list the map is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    ShowingAll,
    ShowingMine,
}

impl FilterMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowingAll => LABEL_ALL,
            Self::ShowingMine => LABEL_MINE,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::ShowingMine)
    }
}

/// What the caller has to do after the toggle changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Fetch `/my_spots` and render the result once it arrives.
    FetchMine,
    /// Re-render the already loaded full list, no network.
    RenderCached,
}

/// The "only my spots" switch. Only exists for authenticated viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterToggle {
    mode: FilterMode,
}

impl FilterToggle {
    pub const fn new() -> Self {
        Self {
            mode: FilterMode::ShowingAll,
        }
    }

    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    pub const fn label(&self) -> &'static str {
        self.mode.label()
    }

    /// Applies a change event carrying the control's new checked state.
    pub fn set_checked(&mut self, checked: bool) -> ToggleAction {
        if checked {
            self.mode = FilterMode::ShowingMine;
            ToggleAction::FetchMine
        } else {
            self.mode = FilterMode::ShowingAll;
            ToggleAction::RenderCached
        }
    }

    /// Flips the switch, for front ends without a checkbox.
    pub fn flip(&mut self) -> ToggleAction {
        self.set_checked(!self.mode.is_mine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_showing_all() {
        let toggle = FilterToggle::new();
        assert_eq!(toggle.mode(), FilterMode::ShowingAll);
        assert_eq!(toggle.label(), "Show only my spots");
    }

    #[test]
    fn on_fetches_off_reuses_cache() {
        let mut toggle = FilterToggle::new();

        assert_eq!(toggle.set_checked(true), ToggleAction::FetchMine);
        assert_eq!(toggle.label(), "Showing only my spots ☕");

        assert_eq!(toggle.set_checked(false), ToggleAction::RenderCached);
        assert_eq!(toggle.mode(), FilterMode::ShowingAll);
    }

    #[test]
    fn flip_alternates() {
        let mut toggle = FilterToggle::new();
        assert_eq!(toggle.flip(), ToggleAction::FetchMine);
        assert_eq!(toggle.flip(), ToggleAction::RenderCached);
        assert_eq!(toggle.flip(), ToggleAction::FetchMine);
    }
}
