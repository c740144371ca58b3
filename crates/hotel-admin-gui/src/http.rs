//! reqwest-backed [`HotelApi`] talking to a running hotel-admin server.

use async_trait::async_trait;
use hotel_admin_core::{Hotel, HotelListQuery, HotelPage, HotelUpdate, NewHotel};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, HotelApi};
use crate::config::ApiClientConfig;
use crate::error::GuiError;

/// Production [`HotelApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpHotelApi {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    changes: &'a HotelUpdate,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpHotelApi {
    /// Build a client for the server described by `config`.
    pub fn new(config: &ApiClientConfig) -> Result<Self, GuiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GuiError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/hotels", config.base_url()),
            token: config.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(target: "hotel_admin.client", status = status.as_u16(), "request failed");
            return Err(status_error(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Query-string pairs for a list request.
///
/// Filters are only sent when set, `name` only when non-empty. `page` is
/// always sent.
pub fn query_pairs(query: &HotelListQuery) -> Vec<(&'static str, String)> {
    let filter = &query.filter;
    let mut pairs = Vec::with_capacity(5);
    if let Some(name) = filter.name_fragment() {
        pairs.push(("name", name.to_string()));
    }
    if let Some(rating) = filter.rating {
        pairs.push(("rating", rating.to_string()));
    }
    if let Some(min) = filter.price_min {
        pairs.push(("priceMin", min.to_string()));
    }
    if let Some(max) = filter.price_max {
        pairs.push(("priceMax", max.to_string()));
    }
    pairs.push(("page", query.page.max(1).to_string()));
    pairs
}

fn status_error(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::Status { status, message }
}

#[async_trait]
impl HotelApi for HttpHotelApi {
    async fn list_hotels(&self, query: &HotelListQuery) -> Result<HotelPage, ApiError> {
        let request = self.client.get(&self.endpoint).query(&query_pairs(query));
        self.execute(request).await
    }

    async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        let request = self.client.post(&self.endpoint).json(hotel);
        self.execute(request).await
    }

    async fn update_hotel(&self, id: &str, changes: &HotelUpdate) -> Result<Hotel, ApiError> {
        let request = self
            .client
            .put(&self.endpoint)
            .json(&UpdateBody { id, changes });
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_admin_core::HotelFilter;

    #[test]
    fn test_query_pairs_skip_unset_filters() {
        let pairs = query_pairs(&HotelListQuery::default());
        assert_eq!(pairs, vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_query_pairs_encode_all_filters() {
        let filter = HotelFilter {
            name: Some("sea ".to_string()),
            rating: Some(4.0),
            price_min: Some(100.0),
            price_max: Some(200.5),
        };
        let pairs = query_pairs(&HotelListQuery::new(filter, 3));
        assert_eq!(
            pairs,
            vec![
                ("name", "sea ".to_string()),
                ("rating", "4".to_string()),
                ("priceMin", "100".to_string()),
                ("priceMax", "200.5".to_string()),
                ("page", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_name_is_not_sent() {
        let filter = HotelFilter {
            name: Some(String::new()),
            ..HotelFilter::default()
        };
        let pairs = query_pairs(&HotelListQuery::new(filter, 1));
        assert!(pairs.iter().all(|(key, _)| *key != "name"));
    }

    #[test]
    fn test_status_error_prefers_server_message() {
        let err = status_error(400, br#"{"error":"Hotel 'id' is required.","status":400}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Hotel 'id' is required.".to_string()
            }
        );

        let err = status_error(502, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_update_body_merges_id_with_changes() {
        let changes = HotelUpdate {
            name: Some("X".to_string()),
            price_per_night: Some(80.0),
            ..HotelUpdate::default()
        };
        let body = serde_json::to_value(UpdateBody {
            id: "h1",
            changes: &changes,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"id": "h1", "name": "X", "pricePerNight": 80.0})
        );
    }

    #[test]
    fn test_endpoint_from_config() {
        let api =
            HttpHotelApi::new(&ApiClientConfig::new().with_base_url("http://example.test/"))
                .unwrap();
        assert_eq!(api.endpoint(), "http://example.test/api/hotels");
    }
}
