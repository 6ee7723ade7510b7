use crate::geo::MapPoint;

/// A pickup/drop-off point as returned by the remote directory.
///
/// Immutable once received; consumed by the rendering pass that turns it
/// into a marker, not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupPoint {
    pub name: String,
    pub address: String,
    pub schedule: String,
    pub pos: MapPoint,
}
