//! HTTP Food Service Client
//!
//! `reqwest` implementation of [`CatalogApi`]. On wasm32 requests go
//! through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, CatalogApi};
use crate::config::ApiConfig;
use crate::models::{Food, FoodPatch, NewFood};

const FOODS_PATH: &str = "/foods";

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn food_url(&self, id: u32) -> String {
        self.config.endpoint(&format!("{FOODS_PATH}/{id}"))
    }
}

/// Send and reject non-2xx statuses
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Service {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        send_json(self.client.get(self.config.endpoint(FOODS_PATH))).await
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError> {
        send_json(self.client.post(self.config.endpoint(FOODS_PATH)).json(food)).await
    }

    async fn update_food(&self, current: &Food, patch: &FoodPatch) -> Result<Food, ApiError> {
        let merged = patch.apply_to(current);
        send_json(self.client.put(self.food_url(current.id)).json(&merged)).await
    }

    async fn delete_food(&self, id: u32) -> Result<(), ApiError> {
        send(self.client.delete(self.food_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_for(server: &MockServer) -> HttpCatalogApi {
        HttpCatalogApi::new(ApiConfig::new(server.base_url()))
    }

    fn burger() -> Food {
        Food {
            id: 2,
            name: "Burger".to_string(),
            description: "Double cheese".to_string(),
            price: "25.00".to_string(),
            available: true,
            image: "https://img.example/burger.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_foods() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/foods");
            then.status(200).json_body(json!([burger()]));
        });

        let foods = client_for(&server).list_foods().await.expect("list failed");
        assert_eq!(foods, vec![burger()]);
        mock.assert();
    }

    #[tokio::test]
    async fn test_non_2xx_is_service_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/foods");
            then.status(500);
        });

        let err = client_for(&server).list_foods().await.unwrap_err();
        assert_eq!(err, ApiError::Service { status: 500 });
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/foods");
            then.status(200).body("<html>not json</html>");
        });

        let err = client_for(&server).list_foods().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_is_transport_error() {
        // Port 9 (discard) is not listening in the test environment
        let api = HttpCatalogApi::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = api.list_foods().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_create_posts_candidate() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/foods").json_body(json!({
                "name": "Burger",
                "description": "Double cheese",
                "price": "25.00",
                "available": true,
                "image": "https://img.example/burger.png"
            }));
            then.status(201).json_body(json!(burger()));
        });

        let candidate = NewFood {
            name: "Burger".to_string(),
            description: "Double cheese".to_string(),
            price: "25.00".to_string(),
            available: true,
            image: "https://img.example/burger.png".to_string(),
        };
        let created = client_for(&server).create_food(&candidate).await.expect("create failed");
        assert_eq!(created.id, 2);
        mock.assert();
    }

    #[tokio::test]
    async fn test_update_sends_full_merged_record() {
        let server = MockServer::start_async().await;
        let expected = Food {
            price: "27.50".to_string(),
            ..burger()
        };
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/foods/2").json_body(json!(expected));
            then.status(200).json_body(json!(expected));
        });

        let patch = FoodPatch {
            price: Some("27.50".to_string()),
            ..Default::default()
        };
        let updated = client_for(&server)
            .update_food(&burger(), &patch)
            .await
            .expect("update failed");
        assert_eq!(updated, expected);
        mock.assert();
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/foods/2");
            then.status(200).body("");
        });

        client_for(&server).delete_food(2).await.expect("delete failed");
        mock.assert();
    }
}
