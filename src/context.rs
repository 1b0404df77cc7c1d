//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpCatalogApi;
use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Food service location
    api_config: ApiConfig,
}

impl AppContext {
    pub fn new(api_config: ApiConfig) -> Self {
        Self { api_config }
    }

    /// Client for the food service
    pub fn api(&self) -> HttpCatalogApi {
        HttpCatalogApi::new(self.api_config.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
