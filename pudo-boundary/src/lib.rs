use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

// ----- Pickup point search ----- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub latitude  : f64,
    pub longitude : f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PudoAddress {
    pub address    : String,
    pub coordinate : Coordinate,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Pudo {
    pub name     : String,
    pub address  : PudoAddress,
    pub schedule : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PudosResponse {
    pub items: Vec<Pudo>,
}

// ----- Parcel tracking ----- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
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

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct StatusEntry {
    pub status: ParcelStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub when: OffsetDateTime,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DestinationAddress {
    pub address : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Destination {
    pub name     : String,
    pub address  : DestinationAddress,
    pub schedule : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ParcelDetail {
    pub tracking       : String,
    pub destination    : Destination,
    pub status         : ParcelStatus,
    pub status_history : Vec<StatusEntry>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TrackingResponse {
    pub detail: ParcelDetail,
}

// ----- Error envelope ----- //

/// Envelope the API returns in place of a payload.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error),
    error("{kind:?}")
)]
pub struct Error {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    BadRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_pudos_response() {
        let json = r#"{
            "items": [
                {
                    "name": "Abarrotes La Espiga",
                    "address": {
                        "address": "Av. 5 de Mayo 32, Centro",
                        "coordinate": { "latitude": 19.43, "longitude": -99.13 }
                    },
                    "schedule": "L-V 9:00-20:00"
                }
            ]
        }"#;
        let response: PudosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        let pudo = &response.items[0];
        assert_eq!(pudo.name, "Abarrotes La Espiga");
        assert_eq!(pudo.address.coordinate.latitude, 19.43);
        assert_eq!(pudo.address.coordinate.longitude, -99.13);
    }

    #[test]
    fn deserialize_tracking_response() {
        let json = r#"{
            "detail": {
                "tracking": "PP-0001",
                "destination": {
                    "name": "Punto Centro",
                    "address": { "address": "Av. 5 de Mayo 32, Centro" },
                    "schedule": "L-V 9:00-20:00"
                },
                "status": "in_transit_depot",
                "status_history": [
                    { "status": "created", "when": "2024-03-01T10:00:00Z" },
                    { "status": "in_origin_point", "when": "2024-03-01T15:30:00Z" },
                    { "status": "in_transit_depot", "when": "2024-03-02T08:00:00Z" }
                ]
            }
        }"#;
        let response: TrackingResponse = serde_json::from_str(json).unwrap();
        let detail = response.detail;
        assert_eq!(detail.tracking, "PP-0001");
        assert!(matches!(detail.status, ParcelStatus::InTransitDepot));
        assert_eq!(detail.status_history.len(), 3);
        assert!(matches!(
            detail.status_history[0].status,
            ParcelStatus::Created
        ));
        assert_eq!(
            detail.status_history[0].when,
            time::macros::datetime!(2024-03-01 10:00 UTC)
        );
    }

    #[test]
    fn deserialize_error_envelope() {
        let err: Error = serde_json::from_str(r#"{ "type": "VALIDATION" }"#).unwrap();
        assert!(matches!(err.kind, ErrorKind::Validation));
        let err: Error = serde_json::from_str(r#"{ "type": "NOT_FOUND" }"#).unwrap();
        assert!(matches!(err.kind, ErrorKind::NotFound));
        let err: Error = serde_json::from_str(r#"{ "type": "BAD_REQUEST" }"#).unwrap();
        assert!(matches!(err.kind, ErrorKind::BadRequest));
    }

    #[test]
    fn error_envelope_is_a_std_error() {
        let err: Error = serde_json::from_str(r#"{ "type": "NOT_FOUND" }"#).unwrap();
        assert_eq!(err.to_string(), "NotFound");
        let err: &dyn std::error::Error = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn serialize_status_round_trip_names() {
        let json = serde_json::to_string(&ParcelStatus::ReturnInTransitOrigin).unwrap();
        assert_eq!(json, r#""return_in_transit_origin""#);
    }
}
