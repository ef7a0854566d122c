use std::sync::Arc;

use log::{info, warn};
use tokio::sync::OnceCell;

use crate::auth::graph_client::GraphClient;
use crate::auth::token::{fetch_token, token_url};
use crate::config::AuthConfig;
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Auth provider not set; the cache never builds a client
    Disabled,
    Unbuilt,
    Built,
}

/// Builds the downstream client once and hands out the cached handle.
///
/// Concurrent first callers share a single token request. A failed build
/// leaves the cache `Unbuilt` so a later call may retry; once `Built` no
/// further token request is made.
pub struct ClientCache {
    config: AuthConfig,
    http: reqwest::Client,
    client: OnceCell<Arc<GraphClient>>,
}

impl ClientCache {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a custom reqwest client for the token request (timeouts, proxies, ...)
    pub fn with_http_client(config: AuthConfig, http: reqwest::Client) -> Self {
        ClientCache {
            config,
            http,
            client: OnceCell::new(),
        }
    }

    pub fn state(&self) -> CacheState {
        if !self.config.is_enabled() {
            CacheState::Disabled
        } else if self.client.initialized() {
            CacheState::Built
        } else {
            CacheState::Unbuilt
        }
    }

    /// The cached client, building it on first demand.
    ///
    /// Returns `None` when auth is disabled or the token could not be obtained.
    pub async fn get(&self) -> Option<Arc<GraphClient>> {
        let Some(url) = token_url(&self.config) else {
            info!("Auth provider not set. Aborting token request...");
            return None;
        };

        match self.client.get_or_try_init(|| self.build(url)).await {
            Ok(client) => Some(Arc::clone(client)),
            Err(e) => {
                warn!("Failed to get access token ({}). Abandoning client setup...", e);
                None
            }
        }
    }

    async fn build(&self, url: String) -> Result<Arc<GraphClient>, AuthError> {
        info!("Building graphql client...");
        let endpoint = self
            .config
            .endpoint_url
            .as_deref()
            .ok_or(AuthError::MissingEndpoint)?;

        let token = fetch_token(&self.http, &url, &self.config).await?;

        Ok(Arc::new(GraphClient::new(endpoint, token)?))
    }
}
