use pudo_entities::geo::MapPoint;

use crate::{
    directory::{DirectoryError, PudoDirectory},
    map::MapAdapter,
    session::MapSession,
    usecases::{refresh_markers, RefreshOutcome, RefreshTrigger},
};

/// Geolocation entry point to the refresh pipeline.
///
/// Flies the viewport to the device position, replaces the current-position
/// indicator and refreshes nearby pickup points the same way a pan would
/// (never re-centers on the results). Only called once the device position
/// is known; denied or failed geolocation requests are silently ignored by
/// the host.
pub async fn locate_device<M, D>(
    session: &mut MapSession,
    map: &mut M,
    directory: &D,
    position: MapPoint,
) -> Result<RefreshOutcome, DirectoryError>
where
    M: MapAdapter,
    D: PudoDirectory,
{
    session.device_located(map, position);
    refresh_markers(session, map, directory, RefreshTrigger::ViewportChanged).await
}
