use pudo_boundary::ErrorKind;
use pudo_core::{DirectoryError, DirectorySearch, PudoDirectory, SearchQuery};

use crate::{Error, PudoApi};

impl PudoDirectory for PudoApi {
    async fn search(&self, query: &SearchQuery) -> Result<DirectorySearch, DirectoryError> {
        let result = match query {
            SearchQuery::Nearby { center, radius_km } => {
                self.pudos_nearby(center.lat, center.lng, *radius_km).await
            }
            SearchQuery::PostalCode { code, radius_km } => {
                self.pudos_by_postal_code(code, *radius_km).await
            }
        };
        match result {
            Ok(response) => Ok(DirectorySearch::Found(
                response.items.into_iter().map(Into::into).collect(),
            )),
            // The directory answers a fruitless point search with an error
            // envelope; for the locator that is an empty result, not a failure.
            Err(Error::Api(err))
                if matches!(err.kind, ErrorKind::Validation | ErrorKind::NotFound) =>
            {
                Ok(DirectorySearch::NoMatch)
            }
            Err(err) => Err(DirectoryError(err.to_string())),
        }
    }
}
