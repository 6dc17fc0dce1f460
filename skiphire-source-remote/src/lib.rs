//! Catalog source fetching location-specific skip offers over HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use skiphire_core::{
    model::SkipOption,
    ports::{CatalogError, CatalogSource},
};

/// Postcode and area the offers are requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Postcode district, e.g. `NR32`.
    pub postcode: String,
    /// Area name, e.g. `Lowestoft`.
    pub area: String,
}

impl Location {
    /// Construct a location.
    #[must_use]
    pub fn new<P: Into<String>, A: Into<String>>(postcode: P, area: A) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

/// Source calling `GET {url}?postcode=..&area=..`, which answers with a JSON
/// array of skip records.
pub struct RemoteSource {
    client: Client,
    url: String,
    location: Location,
}

impl RemoteSource {
    /// Create a source bound to the given HTTP client and endpoint.
    #[must_use]
    pub fn new<U: Into<String>>(client: Client, url: U, location: Location) -> Self {
        Self {
            client,
            url: url.into(),
            location,
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    fn describe(&self) -> String {
        format!(
            "{} ({} {})",
            self.url, self.location.area, self.location.postcode
        )
    }

    async fn load(&self) -> Result<Vec<SkipOption>, CatalogError> {
        let postcode = self.location.postcode.trim();
        let area = self.location.area.trim();
        if postcode.is_empty() {
            return Err(CatalogError::Internal("postcode is required".into()));
        }

        let mut req = self.client.get(&self.url).query(&[("postcode", postcode)]);
        if !area.is_empty() {
            req = req.query(&[("area", area)]);
        }

        fetch_json::<Vec<SkipOption>>(req).await
    }
}

/// Build the shared source handle.
#[must_use]
pub fn source<U: Into<String>>(
    client: Client,
    url: U,
    location: Location,
) -> Arc<dyn CatalogSource> {
    Arc::new(RemoteSource::new(client, url, location))
}

// Decode through serde_json so a bad record surfaces as `Malformed`, not `Network`.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, CatalogError> {
    let body = req
        .send()
        .await
        .map_err(CatalogError::from)?
        .error_for_status()
        .map_err(CatalogError::from)?
        .bytes()
        .await
        .map_err(CatalogError::from)?;
    serde_json::from_slice(&body).map_err(CatalogError::from)
}
