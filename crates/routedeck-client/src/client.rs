use crate::api::{ListQuery, RouteApi};
use crate::envelope::{apply_name_filter, extract_records};
use crate::error::{ApiError, Result};
use reqwest::StatusCode;
use routedeck_types::{Route, RoutePayload};
use serde_json::Value;

/// HTTP client for the remote routes collection.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn routes_url(&self) -> String {
        format!("{}/routes", self.base_url)
    }

    fn route_url(&self, id: i64) -> String {
        format!("{}/routes/{}", self.base_url, id)
    }

    /// Read the response body and decode it, mapping failure statuses to
    /// [`ApiError::Status`] with whatever body text the server attached.
    async fn decode_body(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn decode_route(value: Value) -> Result<Route> {
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl RouteApi for RoutesClient {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Route>> {
        let response = self
            .http
            .get(self.routes_url())
            .query(&query.params())
            .send()
            .await?;
        let body = Self::decode_body(response).await?;

        let records = extract_records(body);
        let routes: Vec<Route> = records
            .into_iter()
            .map(Self::decode_route)
            .collect::<Result<_>>()?;

        Ok(apply_name_filter(routes, &query.name))
    }

    async fn get(&self, id: i64) -> Result<Route> {
        let response = self.http.get(self.route_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        Self::decode_route(Self::decode_body(response).await?)
    }

    async fn create(&self, payload: &RoutePayload) -> Result<Route> {
        let response = self
            .http
            .post(self.routes_url())
            .json(payload)
            .send()
            .await?;
        Self::decode_route(Self::decode_body(response).await?)
    }

    async fn update(&self, id: i64, payload: &RoutePayload) -> Result<Route> {
        let response = self
            .http
            .put(self.route_url(id))
            .json(payload)
            .send()
            .await?;
        Self::decode_route(Self::decode_body(response).await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self.http.delete(self.route_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = RoutesClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.routes_url(), "http://localhost:8080/api/routes");
        assert_eq!(client.route_url(7), "http://localhost:8080/api/routes/7");
    }
}
