use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, LocationRecord};
use crate::geocoding::QueryMode;
use crate::geocoding::response::{GeocodingResponse, Status};
use futures::future::join_all;
use reqwest::{Client, RequestBuilder, Response};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Resolves postal codes to locations with a single lookup each. Failures never escape: they are logged and degrade
/// to [`LocationRecord::unknown`].
#[derive(Clone)]
pub struct Resolver {
    client: Client,
    url: String,
    api_key: String,
    query_mode: QueryMode,
    bias: GeoLocation,
    radius_m: u32,
}

impl Resolver {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Resolver {
            client,
            url: config.geocoding().url().to_string(),
            api_key: config.geocoding().api_key().to_string(),
            query_mode: config.geocoding().query_mode(),
            bias: *config.reference(),
            radius_m: config.geocoding().radius_m(),
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, postal_code: &str) -> LocationRecord {
        match self.lookup(postal_code).await {
            Ok(record) => {
                debug!("Resolved '{}' to {} ({:?})", postal_code, record.place_name, record.location);
                record
            }
            Err(err) => {
                warn!("⚠️ Error for postal code '{}': {}", postal_code, err);
                LocationRecord::unknown(postal_code)
            }
        }
    }

    /// Resolves all postal codes concurrently. The result has one record per postal code, in input order.
    #[instrument(skip_all, fields(count = postal_codes.len()))]
    pub async fn resolve_all(&self, postal_codes: &[String]) -> Vec<LocationRecord> {
        info!("🌍 Resolving {} postal codes...", postal_codes.len());
        let records = join_all(postal_codes.iter().map(|postal_code| self.resolve(postal_code))).await;

        let unknown = records.iter().filter(|record| !record.is_resolved()).count();
        info!("🌍 Resolving {} postal codes... OK, {} resolved, {} unknown", postal_codes.len(), records.len() - unknown, unknown);
        records
    }

    async fn lookup(&self, postal_code: &str) -> Result<LocationRecord, GeocodingError> {
        let response = self
            .request(postal_code)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(GeocodingError::request)?;
        let body = response.json::<GeocodingResponse>().await.map_err(GeocodingError::request)?;

        if body.status != Status::Ok {
            return Err(GeocodingError::Status {
                status: body.status,
                message: body.error_message,
            });
        }

        let result = body.results.first().ok_or(GeocodingError::NoResults)?;
        Ok(LocationRecord::new(postal_code, result.location(), result.place_name()))
    }

    fn request(&self, postal_code: &str) -> RequestBuilder {
        match self.query_mode {
            QueryMode::TextSearch => {
                let location = format!("{},{}", self.bias.latitude, self.bias.longitude);
                let radius = self.radius_m.to_string();
                self.client.get(format!("{}/maps/api/place/textsearch/json", self.url)).query(&[
                    ("query", postal_code),
                    ("location", location.as_str()),
                    ("radius", radius.as_str()),
                    ("type", "postal_code"),
                    ("key", self.api_key.as_str()),
                ])
            }
            QueryMode::Geocode => self
                .client
                .get(format!("{}/maps/api/geocode/json", self.url))
                .query(&[("address", postal_code), ("key", self.api_key.as_str())]),
        }
    }
}

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("request error: {0}")]
    RequestError(#[source] reqwest::Error),
    #[error("{status}{}", provider_message(.message))]
    Status { status: Status, message: Option<String> },
    #[error("no results")]
    NoResults,
}

impl GeocodingError {
    // The request URL carries the API key
    fn request(err: reqwest::Error) -> Self {
        GeocodingError::RequestError(err.without_url())
    }
}

fn provider_message(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(" ({})", m)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::geocoding::new_client;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use test_log::test;

    const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
    const GEOCODE_PATH: &str = "/maps/api/geocode/json";

    fn resolver(url: String, query_mode: QueryMode) -> Resolver {
        let config = AppConfigBuilder::new().geocoding_url(url).query_mode(query_mode).build();
        Resolver::new(new_client().expect("could not create client"), &config)
    }

    #[test(tokio::test)]
    async fn resolve_maps_a_text_search_result() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "90803".into()),
                Matcher::UrlEncoded("location".into(), "34.0395,-118.2662".into()),
                Matcher::UrlEncoded("radius".into(), "50000".into()),
                Matcher::UrlEncoded("type".into(), "postal_code".into()),
                Matcher::UrlEncoded("key".into(), "key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/text_search_long_beach.json"))
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::TextSearch).resolve("90803").await;

        mock.assert_async().await;
        assert_eq!(record, LocationRecord::new("90803", GeoLocation::new(33.7523035, -118.1298234), "Long Beach"));
        assert!(record.location.latitude.is_finite() && record.location.longitude.is_finite());
    }

    #[test(tokio::test)]
    async fn resolve_maps_a_geocode_result_using_the_locality() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", GEOCODE_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("address".into(), "90803".into()),
                Matcher::UrlEncoded("key".into(), "key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/geocode_long_beach.json"))
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::Geocode).resolve("90803").await;

        mock.assert_async().await;
        assert_eq!(record, LocationRecord::new("90803", GeoLocation::new(33.7523035, -118.1298234), "Long Beach"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_for_a_non_ok_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/zero_results.json"))
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::TextSearch).resolve("00000").await;

        assert_eq!(record, LocationRecord::unknown("00000"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_when_the_request_is_denied() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", GEOCODE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/request_denied.json"))
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::Geocode).resolve("90803").await;

        assert_eq!(record, LocationRecord::unknown("90803"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_for_an_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::TextSearch).resolve("90803").await;

        assert_eq!(record, LocationRecord::unknown("90803"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_for_a_malformed_response() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::TextSearch).resolve("90803").await;

        assert_eq!(record, LocationRecord::unknown("90803"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_for_an_ok_status_without_results() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "status": "OK", "results": [] }"#)
            .create_async()
            .await;

        let record = resolver(server.url(), QueryMode::TextSearch).resolve("90803").await;

        assert_eq!(record, LocationRecord::unknown("90803"));
    }

    #[test(tokio::test)]
    async fn resolve_returns_unknown_when_the_provider_is_unreachable() {
        let record = resolver("http://127.0.0.1:1".to_string(), QueryMode::TextSearch).resolve("90803").await;

        assert_eq!(record, LocationRecord::unknown("90803"));
    }

    #[test(tokio::test)]
    async fn resolve_all_keeps_input_order_and_isolates_failures() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::UrlEncoded("query".into(), "90803".into()))
            .with_status(200)
            .with_body(include_str!("../../tests/resources/text_search_long_beach.json"))
            .expect(2)
            .create_async()
            .await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::UrlEncoded("query".into(), "00000".into()))
            .with_status(500)
            .create_async()
            .await;

        let postal_codes = vec!["00000".to_string(), "90803".to_string(), "90803".to_string()];
        let records = resolver(server.url(), QueryMode::TextSearch).resolve_all(&postal_codes).await;

        let long_beach = LocationRecord::new("90803", GeoLocation::new(33.7523035, -118.1298234), "Long Beach");
        assert_eq!(records, vec![LocationRecord::unknown("00000"), long_beach.clone(), long_beach]);
    }

    #[test(tokio::test)]
    async fn request_errors_do_not_expose_the_api_key() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", TEXT_SEARCH_PATH)
            .match_query(Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let error = resolver(server.url(), QueryMode::TextSearch)
            .lookup("90803")
            .await
            .expect_err("expected the lookup to fail");

        assert!(matches!(error, GeocodingError::RequestError(_)));
        assert!(!error.to_string().contains("key="), "error exposes the key: {}", error);
    }

    #[test]
    fn status_errors_include_the_provider_message() {
        let error = GeocodingError::Status {
            status: Status::RequestDenied,
            message: Some("The provided API key is invalid.".to_string()),
        };

        assert_eq!(error.to_string(), "REQUEST_DENIED (The provided API key is invalid.)");
        assert_eq!(
            GeocodingError::Status {
                status: Status::ZeroResults,
                message: None
            }
            .to_string(),
            "ZERO_RESULTS"
        );
    }

    #[test(tokio::test)]
    async fn lookup_reports_an_unrecognised_status_verbatim() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", GEOCODE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "status": "OVER_DAILY_LIMIT", "error_message": "Billing is not enabled.", "results": [] }"#)
            .create_async()
            .await;

        let resolver = resolver(server.url(), QueryMode::Geocode);
        let error = resolver.lookup("90803").await.expect_err("expected the lookup to fail");

        assert_eq!(error.to_string(), "OVER_DAILY_LIMIT (Billing is not enabled.)");
        assert_eq!(resolver.resolve("90803").await, LocationRecord::unknown("90803"));
    }
}
