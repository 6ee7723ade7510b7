use pudo_entities::{
    geo::{MapBbox, MapPoint},
    pudo::PickupPoint,
};

/// The map widget's current center and visible bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: MapPoint,
    pub bounds: MapBbox,
}

/// Boundary to the concrete map widget (Leaflet in the web app, a fake in
/// tests).
///
/// All operations are synchronous; animations are fire-and-forget from the
/// caller's perspective.
pub trait MapAdapter {
    /// Current center and bounding box.
    fn viewport(&self) -> Viewport;

    /// Places a pin with attached popup content.
    fn add_marker(&mut self, pudo: &PickupPoint);

    /// Destroys the pin at exactly this coordinate, if any.
    fn remove_marker(&mut self, at: MapPoint);

    /// Swaps the pin at `at` between the normal and the selected visual.
    fn set_marker_selected(&mut self, at: MapPoint, selected: bool);

    /// Animates the viewport to `center` at `zoom` over `duration_secs`.
    fn fly_to(&mut self, center: MapPoint, zoom: f64, duration_secs: f64);

    /// Draws the circular device-position indicator, replacing any
    /// previously drawn one. Not a pin; never enters the marker registry.
    fn set_current_position(&mut self, at: MapPoint);
}
