// SPDX-License-Identifier: Apache-2.0
use std::env;

use thiserror::Error;

/// Environment variable names for the SMTP relay
pub const SMTP_HOST_ENV: &str = "SMTP_HOST";
pub const SMTP_PORT_ENV: &str = "SMTP_PORT";
pub const SMTP_USER_ENV: &str = "SMTP_USER";
pub const SMTP_PASS_ENV: &str = "SMTP_PASS";
pub const SMTP_FROM_ENV: &str = "SMTP_FROM";

/// Environment variable names for the HTTP server
pub const BIND_ADDR_ENV: &str = "CONTACT_RELAY_BIND_ADDR";
pub const STATIC_DIR_ENV: &str = "CONTACT_RELAY_STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("SMTP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("{var} is not a valid mailbox: {reason}")]
    InvalidAddress { var: &'static str, reason: String },
    #[error("cannot set up TLS for {host}: {reason}")]
    Tls { host: String, reason: String },
}

/// SMTP settings used to relay submissions
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    /// Used for authentication and as the recipient of every submission
    pub username: String,
    pub password: String,
    pub sender_address: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender_address", &self.sender_address)
            .finish()
    }
}

impl MailConfig {
    /// Load the mail configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the mail configuration from any key lookup.
    ///
    /// Every missing variable is reported at once. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let host = read(SMTP_HOST_ENV);
        let port = read(SMTP_PORT_ENV);
        let username = read(SMTP_USER_ENV);
        let password = read(SMTP_PASS_ENV);
        let sender_address = read(SMTP_FROM_ENV);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        Ok(Self {
            host,
            port,
            username,
            password,
            sender_address,
        })
    }

    /// Port 465 expects TLS from the first byte
    pub fn implicit_tls(&self) -> bool {
        self.port == 465
    }
}

/// Where the HTTP server listens and what it serves
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let static_dir =
            env::var(STATIC_DIR_ENV).unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Self {
            bind_addr,
            static_dir,
        }
    }
}
