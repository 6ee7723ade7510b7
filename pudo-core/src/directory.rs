use std::future::Future;

use thiserror::Error;

use pudo_entities::{geo::MapPoint, pudo::PickupPoint};

/// Parameters of one remote lookup. The two variants are mutually
/// exclusive; the radius is a fixed session constant in both cases.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Around the current viewport center (pan/zoom refresh).
    Nearby { center: MapPoint, radius_km: f64 },
    /// Around a visitor-entered postal code.
    PostalCode { code: String, radius_km: f64 },
}

/// Answer of a lookup that reached the directory.
///
/// `NoMatch` covers the `VALIDATION` and `NOT_FOUND` envelopes: reported to
/// the visitor, but not a failure. Markers already on display stay
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectorySearch {
    Found(Vec<PickupPoint>),
    NoMatch,
}

/// Transport or decoding failure. Aborts the refresh cycle that issued the
/// lookup; the registry keeps its post-prune state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("PUDO lookup failed: {0}")]
pub struct DirectoryError(pub String);

/// Read-only remote search for nearby pickup points.
///
/// Idempotent from the caller's perspective: no retries, no cancellation.
pub trait PudoDirectory {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<DirectorySearch, DirectoryError>>;
}
