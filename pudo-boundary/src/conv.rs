use pudo_entities::{geo::MapPoint, parcel, pudo::PickupPoint};

use crate::{Coordinate, Destination, ParcelDetail, ParcelStatus, Pudo, StatusEntry};

impl From<Coordinate> for MapPoint {
    fn from(from: Coordinate) -> Self {
        let Coordinate {
            latitude,
            longitude,
        } = from;
        Self::new(latitude, longitude)
    }
}

impl From<Pudo> for PickupPoint {
    fn from(from: Pudo) -> Self {
        let Pudo {
            name,
            address,
            schedule,
        } = from;
        Self {
            name,
            address: address.address,
            schedule,
            pos: address.coordinate.into(),
        }
    }
}

impl From<ParcelStatus> for parcel::ParcelStatus {
    fn from(from: ParcelStatus) -> Self {
        match from {
            ParcelStatus::Created => Self::Created,
            ParcelStatus::InOriginPoint => Self::InOriginPoint,
            ParcelStatus::InTransitDepot => Self::InTransitDepot,
            ParcelStatus::InDepot => Self::InDepot,
            ParcelStatus::InTransitDestination => Self::InTransitDestination,
            ParcelStatus::InDestinationPoint => Self::InDestinationPoint,
            ParcelStatus::Delivered => Self::Delivered,
            ParcelStatus::ReturnInDestinationPoint => Self::ReturnInDestinationPoint,
            ParcelStatus::ReturnInTransitDepot => Self::ReturnInTransitDepot,
            ParcelStatus::ReturnInDepot => Self::ReturnInDepot,
            ParcelStatus::ReturnInTransitOrigin => Self::ReturnInTransitOrigin,
            ParcelStatus::ReturnInOriginPoint => Self::ReturnInOriginPoint,
            ParcelStatus::ReturnDelivered => Self::ReturnDelivered,
            ParcelStatus::Incidence => Self::Incidence,
            ParcelStatus::Cancelled => Self::Cancelled,
            ParcelStatus::Returned => Self::Returned,
        }
    }
}

impl From<StatusEntry> for parcel::StatusRecord {
    fn from(from: StatusEntry) -> Self {
        let StatusEntry { status, when } = from;
        Self {
            status: status.into(),
            when,
        }
    }
}

impl From<Destination> for parcel::Destination {
    fn from(from: Destination) -> Self {
        let Destination {
            name,
            address,
            schedule,
        } = from;
        Self {
            name,
            address: address.address,
            schedule,
        }
    }
}

impl TryFrom<ParcelDetail> for parcel::Parcel {
    type Error = parcel::InvalidTrackingId;

    fn try_from(from: ParcelDetail) -> Result<Self, Self::Error> {
        let ParcelDetail {
            tracking,
            destination,
            status,
            status_history,
        } = from;
        Ok(Self {
            tracking: parcel::TrackingId::new(tracking)?,
            destination: destination.into(),
            status: status.into(),
            history: status_history.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PudoAddress;

    #[test]
    fn pudo_into_pickup_point() {
        let pudo = Pudo {
            name: "Punto Centro".into(),
            address: PudoAddress {
                address: "Av. 5 de Mayo 32, Centro".into(),
                coordinate: Coordinate {
                    latitude: 19.43,
                    longitude: -99.13,
                },
            },
            schedule: "L-V 9:00-20:00".into(),
        };
        let point = PickupPoint::from(pudo);
        assert_eq!(point.name, "Punto Centro");
        assert_eq!(point.address, "Av. 5 de Mayo 32, Centro");
        assert_eq!(point.pos, MapPoint::new(19.43, -99.13));
    }

    #[test]
    fn parcel_detail_with_empty_tracking_is_rejected() {
        let detail = ParcelDetail {
            tracking: String::new(),
            destination: Destination {
                name: "Punto Centro".into(),
                address: crate::DestinationAddress {
                    address: "Av. 5 de Mayo 32, Centro".into(),
                },
                schedule: "L-V 9:00-20:00".into(),
            },
            status: ParcelStatus::Created,
            status_history: vec![],
        };
        assert!(parcel::Parcel::try_from(detail).is_err());
    }
}
