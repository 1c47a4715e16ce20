//! GoDaddy bulk availability client
//!
//! One POST per batch to `/v1/domains/available`, authenticated with an
//! `sso-key` key/secret pair.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::AvailabilityApi;
use crate::error::{DomainSweepError, Result};
use crate::types::{AvailabilityRecord, RegistrarConfig};

const AVAILABLE_PATH: &str = "/v1/domains/available";

/// GoDaddy availability client
pub struct GoDaddyClient {
    client: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

impl GoDaddyClient {
    pub fn new(config: &RegistrarConfig) -> Result<Self> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(DomainSweepError::config(
                "GoDaddy API key and secret are required",
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("domain-sweep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainSweepError::network(e.to_string(), None))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, AVAILABLE_PATH)
    }

    fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }
}

#[async_trait]
impl AvailabilityApi for GoDaddyClient {
    async fn check_availability(&self, batch: &[String]) -> Result<Vec<AvailabilityRecord>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint();
        let response = self
            .client
            .post(&url)
            .query(&[("checkType", "FAST")])
            .header("Authorization", self.authorization())
            .header("Accept", "application/json")
            .json(batch)
            .send()
            .await
            .map_err(|e| {
                DomainSweepError::network(
                    format!("Failed to reach availability endpoint: {}", e),
                    Some(url.clone()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = match status.as_u16() {
                401 | 403 => {
                    "Authentication failed, check your GoDaddy API key and secret".to_string()
                }
                429 => "Rate limit exceeded".to_string(),
                _ => format!("HTTP {}: {}", status, error_text),
            };

            return Err(DomainSweepError::registrar(
                message,
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let body = response.text().await.map_err(|e| {
            DomainSweepError::network(format!("Failed to read response: {}", e), Some(url.clone()))
        })?;

        parse_bulk_response(&body)
    }

    fn name(&self) -> &'static str {
        "godaddy"
    }
}

#[derive(Debug, Deserialize)]
struct BulkAvailabilityResponse {
    #[serde(default)]
    domains: Vec<DomainAvailability>,
    #[serde(default)]
    errors: Vec<DomainAvailabilityError>,
}

#[derive(Debug, Deserialize)]
struct DomainAvailability {
    domain: String,
    available: bool,
}

#[derive(Debug, Deserialize)]
struct DomainAvailabilityError {
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Parse a bulk availability response body.
///
/// Per-domain entries under `errors` are dropped: a name the registrar
/// could not answer for is not reported as available.
pub(crate) fn parse_bulk_response(body: &str) -> Result<Vec<AvailabilityRecord>> {
    let parsed: BulkAvailabilityResponse = serde_json::from_str(body).map_err(|e| {
        DomainSweepError::parse(
            format!("Failed to parse availability response: {}", e),
            Some(body.to_string()),
        )
    })?;

    for err in &parsed.errors {
        tracing::debug!(
            domain = err.domain.as_deref().unwrap_or("?"),
            code = err.code.as_deref().unwrap_or("?"),
            message = err.message.as_deref().unwrap_or(""),
            "Registrar could not check domain"
        );
    }

    Ok(parsed
        .domains
        .into_iter()
        .map(|d| AvailabilityRecord::new(d.domain, d.available))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> RegistrarConfig {
        RegistrarConfig {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            base_url: "https://api.ote-godaddy.com/".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_requires_credentials() {
        let mut cfg = config();
        cfg.api_secret.clear();
        assert!(GoDaddyClient::new(&cfg).is_err());
    }

    #[test]
    fn test_endpoint_and_auth() {
        let client = GoDaddyClient::new(&config()).unwrap();
        assert_eq!(client.endpoint(), "https://api.ote-godaddy.com/v1/domains/available");
        assert_eq!(client.authorization(), "sso-key key:secret");
        assert_eq!(client.name(), "godaddy");
    }

    #[test]
    fn test_empty_batch_skips_request() {
        let client = GoDaddyClient::new(&config()).unwrap();
        let records = tokio_test::block_on(client.check_availability(&[])).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_bulk_response() {
        let body = r#"{
            "domains": [
                {"available": true, "domain": "bab.com", "definitive": false, "price": 11990000, "currency": "USD", "period": 1},
                {"available": false, "domain": "cat.com", "definitive": false}
            ],
            "errors": [
                {"domain": "zzz.com", "code": "UNSUPPORTED_TLD", "message": "nope", "status": 422}
            ]
        }"#;

        let records = parse_bulk_response(body).unwrap();
        assert_eq!(
            records,
            vec![
                AvailabilityRecord::new("bab.com", true),
                AvailabilityRecord::new("cat.com", false),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_bulk_response("<html>").unwrap_err();
        assert!(matches!(err, DomainSweepError::Parse { .. }));
    }
}
