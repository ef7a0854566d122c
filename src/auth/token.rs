use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, AuthProvider};
use crate::error::AuthError;

/// Form body of a client-credentials grant.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub audience: &'a str,
}

impl<'a> TokenRequest<'a> {
    pub fn client_credentials(config: &'a AuthConfig) -> Self {
        TokenRequest {
            grant_type: "client_credentials",
            client_id: &config.client_id,
            client_secret: &config.client_secret,
            audience: &config.identifier,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Token endpoint for the configured provider, `None` when auth is disabled.
pub fn token_url(config: &AuthConfig) -> Option<String> {
    match config.provider {
        AuthProvider::Disabled => None,
        AuthProvider::Keycloak => Some(format!(
            "{}/auth/realms/{}/protocol/openid-connect/token",
            config.domain, config.identifier
        )),
        AuthProvider::OAuth => Some(format!("https://{}/oauth/token", config.domain)),
    }
}

/// POSTs a client-credentials grant and returns the access token.
pub async fn fetch_token(
    http: &reqwest::Client,
    url: &str,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let response = http
        .post(url)
        .form(&TokenRequest::client_credentials(config))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::Status(status.as_u16()));
    }

    let body: TokenResponse = response.json().await?;
    info!("Finished auth token request...");

    body.access_token
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
