use std::fmt;

use thiserror::Error;
use time::OffsetDateTime;

/// Identifier of a parcel as entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingId(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tracking id must not be empty")]
pub struct InvalidTrackingId;

impl TrackingId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidTrackingId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidTrackingId);
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TrackingId> for String {
    fn from(from: TrackingId) -> Self {
        from.0
    }
}

/// Lifecycle state of a parcel: the forward leg from registration to
/// delivery, the mirrored return leg, and the terminal special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParcelStatus {
    Created,
    InOriginPoint,
    InTransitDepot,
    InDepot,
    InTransitDestination,
    InDestinationPoint,
    Delivered,
    ReturnInDestinationPoint,
    ReturnInTransitDepot,
    ReturnInDepot,
    ReturnInTransitOrigin,
    ReturnInOriginPoint,
    ReturnDelivered,
    Incidence,
    Cancelled,
    Returned,
}

impl ParcelStatus {
    /// User-facing label. The service speaks Spanish to its visitors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "Registrado en el sistema",
            Self::InOriginPoint => "Recolectado",
            Self::InTransitDepot => "En camino al almacén",
            Self::InDepot => "En almacén",
            Self::InTransitDestination => "En ruta hacia el punto de entrega",
            Self::InDestinationPoint => "Disponible en punto de entrega",
            Self::Delivered => "Entregado",
            Self::ReturnInDestinationPoint => "Devolución recolectada",
            Self::ReturnInTransitDepot => "Devolución en camino al almacén",
            Self::ReturnInDepot => "Devolución en almacén",
            Self::ReturnInTransitOrigin => "Devolución en ruta hacia el punto de entrega",
            Self::ReturnInOriginPoint => "Devolución disponible en punto de entrega",
            Self::ReturnDelivered => "Devolución entregada",
            Self::Incidence => "Incidencia detectada, revisando",
            Self::Cancelled => "Cancelado",
            Self::Returned => "Devuelto",
        }
    }
}

/// One entry of a parcel's status history.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub status: ParcelStatus,
    pub when: OffsetDateTime,
}

/// The pickup point a parcel is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub address: String,
    pub schedule: String,
}

/// Delivery state of a single parcel.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub tracking: TrackingId,
    pub destination: Destination,
    pub status: ParcelStatus,
    /// Chronological, oldest first (wire order).
    pub history: Vec<StatusRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_empty_tracking_id() {
        assert_eq!(TrackingId::new(""), Err(InvalidTrackingId));
        assert_eq!(TrackingId::new("   "), Err(InvalidTrackingId));
        assert!(TrackingId::new("PP-0001").is_ok());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ParcelStatus::Created.label(), "Registrado en el sistema");
        assert_eq!(ParcelStatus::Delivered.label(), "Entregado");
        assert_eq!(
            ParcelStatus::ReturnInTransitOrigin.label(),
            "Devolución en ruta hacia el punto de entrega"
        );
    }
}
