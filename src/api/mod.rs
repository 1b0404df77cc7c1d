//! Food Service Client
//!
//! Frontend bindings to the remote `/foods` REST resource.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Food, FoodPatch, NewFood};

pub use http::HttpCatalogApi;

/// Failure talking to the food service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, bad URL)
    #[error("food service unreachable: {0}")]
    Transport(String),
    /// Response arrived with a non-2xx status
    #[error("food service responded with status {status}")]
    Service { status: u16 },
    /// 2xx response whose body is not the expected payload
    #[error("malformed food service response: {0}")]
    Decode(String),
}

/// Operations over the food collection.
///
/// No retries and no timeouts beyond the transport's own; every failure is
/// returned to the caller.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /foods`
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;

    /// `POST /foods`; the service assigns the id
    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError>;

    /// `PUT /foods/{id}` with `patch` merged over the full `current` record.
    /// The service does not merge, so the complete record is always sent.
    async fn update_food(&self, current: &Food, patch: &FoodPatch) -> Result<Food, ApiError>;

    /// `DELETE /foods/{id}`; the response body is ignored
    async fn delete_food(&self, id: u32) -> Result<(), ApiError>;
}
