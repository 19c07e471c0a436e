use std::env;
use std::fmt;
use std::str::FromStr;
use anyhow::{anyhow, Context, Result};

/// What to do with a navigation to a path the route table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedRoute {
    /// Send the browser to the landing route
    Redirect,
    /// Answer with a JSON 404
    NotFound,
}

impl FromStr for UnmatchedRoute {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "redirect" => Ok(UnmatchedRoute::Redirect),
            "not-found" => Ok(UnmatchedRoute::NotFound),
            other => Err(anyhow!("expected 'redirect' or 'not-found', got '{}'", other)),
        }
    }
}

impl fmt::Display for UnmatchedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedRoute::Redirect => f.write_str("redirect"),
            UnmatchedRoute::NotFound => f.write_str("not-found"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub app_title: String,
    pub unmatched_route: UnmatchedRoute,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            app_title: "Certificate Manager".to_string(),
            unmatched_route: UnmatchedRoute::Redirect,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let service_port = match lookup("SERVICE_PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => defaults.service_port,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or(defaults.service_host);

        let app_title = lookup("APP_TITLE").unwrap_or(defaults.app_title);

        let unmatched_route = match lookup("UNMATCHED_ROUTE") {
            Some(policy) => policy
                .parse::<UnmatchedRoute>()
                .context("UNMATCHED_ROUTE is invalid")?,
            None => defaults.unmatched_route,
        };

        Ok(Config {
            service_port,
            service_host,
            app_title,
            unmatched_route,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  App title: {}", self.app_title);
        tracing::info!("  Unmatched routes: {}", self.unmatched_route);
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
