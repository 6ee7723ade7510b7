use pudo_entities::geo::MapPoint;

use crate::{map::MapAdapter, registry::MarkerRegistry};

/// Fixed per-session constants. The defaults match the production
/// deployment of the locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Search radius for both query variants, in kilometers.
    pub radius_km: f64,
    /// Zoom level used when flying to a search result or to the device
    /// position.
    pub fly_zoom: f64,
    /// Duration of the fly animation, in seconds.
    pub fly_duration_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius_km: 10.0,
            fly_zoom: 15.0,
            fly_duration_secs: 0.75,
        }
    }
}

/// Per-map-instance state: the marker registry and the refresh generation
/// counter.
///
/// One session per map widget; nothing is shared between maps, so several
/// independent maps can live on one page.
#[derive(Debug)]
pub struct MapSession {
    pub(crate) registry: MarkerRegistry,
    pub(crate) generation: u64,
    config: SessionConfig,
}

impl MapSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: MarkerRegistry::new(),
            generation: 0,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Reaction to a popup opening: the pin switches to the selected
    /// visual. The map widget itself guarantees that opening a popup closes
    /// any other, so at most one pin is selected at a time.
    pub fn marker_opened<M: MapAdapter>(&self, map: &mut M, at: MapPoint) {
        map.set_marker_selected(at, true);
    }

    /// Reaction to a popup closing: the pin icon reverts.
    pub fn marker_closed<M: MapAdapter>(&self, map: &mut M, at: MapPoint) {
        map.set_marker_selected(at, false);
    }

    /// Geolocation entry point: fly the viewport to the device position and
    /// replace the current-position indicator. Callers follow up with a
    /// viewport-triggered refresh (see [`crate::usecases::locate_device`]);
    /// a denied or failed geolocation request never reaches this method.
    pub fn device_located<M: MapAdapter>(&self, map: &mut M, position: MapPoint) {
        map.fly_to(position, self.config.fly_zoom, self.config.fly_duration_secs);
        map.set_current_position(position);
    }
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
