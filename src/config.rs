use std::env;

use log::warn;

use crate::domain::solver_factory::SolverType;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

/// Which token endpoint shape to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthProvider {
    /// No token request is made at all
    Disabled,
    /// `{domain}/auth/realms/{identifier}/protocol/openid-connect/token`
    Keycloak,
    /// `https://{domain}/oauth/token`
    OAuth,
}

impl AuthProvider {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" => AuthProvider::Disabled,
            "keycloak" => AuthProvider::Keycloak,
            _ => AuthProvider::OAuth,
        }
    }
}

/// Settings for the token request and the downstream endpoint.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub provider: AuthProvider,
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    /// Audience; doubles as the realm name for Keycloak
    pub identifier: String,
    pub endpoint_url: Option<String>,
}

impl AuthConfig {
    pub fn disabled() -> Self {
        AuthConfig {
            provider: AuthProvider::Disabled,
            domain: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            identifier: String::new(),
            endpoint_url: None,
        }
    }

    pub fn from_env() -> Self {
        AuthConfig {
            provider: AuthProvider::parse(&env::var("AUTH_PROVIDER").unwrap_or_default()),
            domain: env::var("AUTH_DOMAIN").unwrap_or_default(),
            client_id: env::var("AUTH_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("AUTH_SECRET").unwrap_or_default(),
            identifier: env::var("AUTH_IDENTIFIER").unwrap_or_default(),
            endpoint_url: non_empty_var("MAANA_ENDPOINT_URL")
                .or_else(|| non_empty_var("GRAPH_ENDPOINT_URL")),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider != AuthProvider::Disabled
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// Server settings read from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub json_limit: usize,
    pub solver: SolverType,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let json_limit = env::var("JSON_PAYLOAD_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_JSON_LIMIT);

        let solver = match env::var("SOLVER") {
            Ok(name) if !name.is_empty() => SolverType::parse(&name).unwrap_or_else(|| {
                warn!("Unknown solver '{}', falling back to microlp", name);
                SolverType::default()
            }),
            _ => SolverType::default(),
        };

        ServerConfig {
            port,
            json_limit,
            solver,
        }
    }
}
