//! Glue between the renderer, the filter toggle and whatever performs HTTP.
//!
//! Front ends ask [`SpotMap`] which endpoint to request, do the request on
//! their own runtime, and hand the outcome back through
//! [`SpotMap::finish_load`]. Outcomes are applied in arrival order, so when
//! two requests overlap the later arrival wins.

use crate::domain::{CoordinatePolicy, Spot};
use crate::map::{MapRenderer, MapSurface};
use crate::toggle::{FilterMode, FilterToggle, ToggleAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotEndpoint {
    All,
    Mine,
}

impl SpotEndpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::All => "/spots",
            Self::Mine => "/my_spots",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all spots",
            Self::Mine => "my spots",
        }
    }
}

/// Result of a toggle change: the new label, and the fetch to start if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChange {
    pub label: &'static str,
    pub fetch: Option<SpotEndpoint>,
}

pub struct SpotMap<S: MapSurface> {
    renderer: MapRenderer<S>,
    toggle: Option<FilterToggle>,
}

impl<S: MapSurface> SpotMap<S> {
    /// `with_toggle` mirrors whether the viewer is signed in.
    pub const fn new(surface: S, policy: CoordinatePolicy, with_toggle: bool) -> Self {
        Self {
            renderer: MapRenderer::new(surface, policy),
            toggle: if with_toggle {
                Some(FilterToggle::new())
            } else {
                None
            },
        }
    }

    /// The request to issue when the map first loads.
    pub const fn initial_load(&self) -> SpotEndpoint {
        SpotEndpoint::All
    }

    /// Handles a change event from the toggle control. Returns `None` when
    /// the viewer has no toggle.
    pub fn toggle_changed(&mut self, checked: bool) -> Option<ToggleChange> {
        let toggle = self.toggle.as_mut()?;
        let action = toggle.set_checked(checked);
        let label = toggle.label();
        Some(self.apply_toggle(action, label))
    }

    pub fn flip_toggle(&mut self) -> Option<ToggleChange> {
        let toggle = self.toggle.as_mut()?;
        let action = toggle.flip();
        let label = toggle.label();
        Some(self.apply_toggle(action, label))
    }

    fn apply_toggle(&mut self, action: ToggleAction, label: &'static str) -> ToggleChange {
        match action {
            ToggleAction::FetchMine => ToggleChange {
                label,
                fetch: Some(SpotEndpoint::Mine),
            },
            ToggleAction::RenderCached => {
                self.renderer.render_all_spots();
                ToggleChange { label, fetch: None }
            }
        }
    }

    /// Applies a finished fetch. On success the full list is stored (for
    /// `/spots` only) and rendered; on failure nothing changes and the error
    /// is handed back for logging.
    pub fn finish_load<E>(
        &mut self,
        endpoint: SpotEndpoint,
        result: Result<Vec<Spot>, E>,
    ) -> Result<usize, E> {
        let spots = result?;
        let placed = match endpoint {
            SpotEndpoint::All => self.renderer.replace_all_spots(spots),
            SpotEndpoint::Mine => self.renderer.render_spots(&spots),
        };
        tracing::debug!(endpoint = endpoint.path(), placed, "applied fetch");
        Ok(placed)
    }

    pub const fn renderer(&self) -> &MapRenderer<S> {
        &self.renderer
    }

    pub const fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.toggle.map(|toggle| toggle.mode()).unwrap_or_default()
    }

    pub fn toggle_label(&self) -> Option<&'static str> {
        self.toggle.as_ref().map(FilterToggle::label)
    }
}
