//! Backend table API client.
//!
//! This client issues the two backend calls the site needs: an authenticated
//! read of all rows in the services table, and a row creation in the requests
//! table. Both use bearer-token auth against an Airtable-style REST API.
//! There is no retry, no cache: one fetch per page render, one write per
//! submission.

use serde_json::json;
use tracing::{info, warn};

use super::error::BackendError;
use super::record::{Collection, RecordPage};
use crate::core::config::BackendConfig;

/// Client for the hosted table backend.
pub struct TableClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl TableClient {
    /// Create a new client with the given backend configuration.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resolve the configured credentials, or fail without issuing a request.
    fn credentials(&self) -> Result<(&str, &str), BackendError> {
        match (&self.config.api_token, &self.config.base_id) {
            (Some(token), Some(base)) => Ok((token, base)),
            _ => Err(BackendError::MissingCredentials),
        }
    }

    /// URL of a named table within the configured base.
    fn table_url(&self, base: &str, table: &str) -> String {
        format!("{}/{}/{}", self.config.api_url, base, table)
    }

    /// Fetch all rows of the services table as a Record Collection.
    ///
    /// An empty response body signals the "unavailable" condition; the
    /// caller's policy (redirect home, render nothing) lives in the page
    /// handlers, not here.
    pub async fn list_records(&self) -> Result<Collection, BackendError> {
        let (token, base) = self.credentials()?;
        let url = self.table_url(base, &self.config.services_table);

        info!("Fetching records from table '{}'", self.config.services_table);

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            warn!("Backend returned an empty body for the record read");
            return Err(BackendError::Unavailable);
        }

        let page: RecordPage = serde_json::from_str(&body)?;
        let collection = Collection::from(page);

        info!("Fetched {} records", collection.len());

        Ok(collection)
    }

    /// Create a new row `{ Name: <value> }` in the requests table.
    ///
    /// On success the created-record payload is returned verbatim; on a
    /// backend rejection the raw error payload is carried in
    /// [`BackendError::Rejected`] so the inbound endpoint can forward it
    /// untranslated.
    pub async fn create_request(&self, name: &str) -> Result<serde_json::Value, BackendError> {
        let (token, base) = self.credentials()?;
        let url = self.table_url(base, &self.config.requests_table);

        info!("Creating request row in table '{}'", self.config.requests_table);

        let body = json!({
            "records": [
                { "fields": { "Name": name } }
            ]
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload: serde_json::Value = response.json().await?;

        if status.is_success() {
            Ok(payload)
        } else {
            warn!("Backend rejected the request write: HTTP {}", status);
            Err(BackendError::rejected(payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(api_token: Option<&str>, base_id: Option<&str>) -> TableClient {
        TableClient::new(BackendConfig {
            api_token: api_token.map(String::from),
            base_id: base_id.map(String::from),
            ..BackendConfig::default()
        })
    }

    #[tokio::test]
    async fn test_list_without_credentials_fails_fast() {
        let client = client_with(None, None);
        let result = client.list_records().await;
        assert!(matches!(result, Err(BackendError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_create_without_base_fails_fast() {
        let client = client_with(Some("token"), None);
        let result = client.create_request("Figma").await;
        assert!(matches!(result, Err(BackendError::MissingCredentials)));
    }

    #[test]
    fn test_table_url_shape() {
        let client = client_with(Some("token"), Some("appBase"));
        assert_eq!(
            client.table_url("appBase", "Services"),
            "https://api.airtable.com/v0/appBase/Services"
        );
    }
}
