use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use pudo_boundary::{PudosResponse, TrackingResponse};

use crate::{into_json, Result};

/// Public PUDO web API.
#[derive(Debug, Clone)]
pub struct PudoApi {
    url: String,
}

impl PudoApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Looks up pickup points around a coordinate.
    pub async fn pudos_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<PudosResponse> {
        let url = format!(
            "{}/pudos?latitude={latitude}&longitude={longitude}&radius_km={radius_km}",
            self.url
        );
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Looks up pickup points around a visitor-entered postal code.
    pub async fn pudos_by_postal_code(
        &self,
        postal_code: &str,
        radius_km: f64,
    ) -> Result<PudosResponse> {
        let encoded_code = utf8_percent_encode(postal_code, NON_ALPHANUMERIC);
        let url = format!(
            "{}/pudos?postal_code={encoded_code}&radius_km={radius_km}",
            self.url
        );
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Fetches the delivery detail of a single parcel.
    pub async fn parcel(&self, tracking_id: &str) -> Result<TrackingResponse> {
        let encoded_id = utf8_percent_encode(tracking_id, NON_ALPHANUMERIC);
        let url = format!("{}/parcels/{encoded_id}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
