use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use serde_json::{json, Value};

use crate::error::AuthError;

/// Downstream GraphQL client bound to one endpoint and one bearer token.
///
/// Never mutated after construction; a new token means a new client.
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl GraphClient {
    pub fn new(endpoint: impl AsRef<str>, token: impl Into<String>) -> Result<Self, AuthError> {
        let endpoint = Url::parse(endpoint.as_ref())
            .map_err(|e| AuthError::InvalidUrl(e.to_string()))?;
        let token = token.into();

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AuthError::InvalidToken)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(GraphClient {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Executes a query and returns its `data` member.
    pub async fn query(&self, query: &str, variables: Value) -> Result<Value, AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuthError::Downstream(format!("{}: {}", status, error_text)));
        }

        let mut body: Value = response.json().await?;
        if let Some(errors) = body.get("errors").filter(|e| !e.is_null()) {
            return Err(AuthError::Downstream(errors.to_string()));
        }

        Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    }
}
