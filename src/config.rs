//! Transport configuration
//!
//! Supplied once at construction and immutable afterwards. Everything the
//! transport needs beyond the DSN lives here: extra request headers, an
//! explicit proxy, an optional root CA certificate, and keep-alive behavior.

use crate::error::{Result, TransportError};
use http::HeaderMap;

/// Configuration for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// DSN connection string for the ingestion endpoint.
    pub dsn: String,

    /// Extra headers added to every outbound request.
    ///
    /// Layered after the mandatory content-type and auth headers, so a
    /// caller that deliberately duplicates one of those wins.
    pub extra_headers: HeaderMap,

    /// Explicit proxy URL; takes precedence over environment settings.
    pub proxy: Option<String>,

    /// PEM-encoded root CA certificate trusted in addition to system roots.
    pub ca_cert: Option<Vec<u8>>,

    /// Whether to keep connections alive between sends.
    pub keep_alive: bool,
}

impl TransportConfig {
    /// Create a configuration with defaults for everything but the DSN.
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            extra_headers: HeaderMap::new(),
            proxy: None,
            ca_cert: None,
            keep_alive: true,
        }
    }

    /// Create a builder for a fluent configuration.
    pub fn builder(dsn: impl Into<String>) -> TransportConfigBuilder {
        TransportConfigBuilder {
            config: Self::new(dsn),
        }
    }
}

/// Builder for [`TransportConfig`].
#[derive(Debug)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Add an extra header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| TransportError::InvalidHeader(format!("invalid name '{key_str}'")))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| TransportError::InvalidHeader(format!("invalid value '{value_str}'")))?;

        self.config.extra_headers.insert(key, value);
        Ok(self)
    }

    /// Replace the extra headers wholesale.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config.extra_headers = headers;
        self
    }

    /// Set an explicit proxy URL.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Trust an additional PEM-encoded root CA certificate.
    pub fn ca_cert(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.config.ca_cert = Some(pem.into());
        self
    }

    /// Enable or disable connection keep-alive (enabled by default).
    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.config.keep_alive = keep_alive;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TransportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TransportConfig::new("https://pubkey@sentry.io/1");
        assert!(config.extra_headers.is_empty());
        assert!(config.proxy.is_none());
        assert!(config.ca_cert.is_none());
        assert!(config.keep_alive);
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = TransportConfig::builder("https://pubkey@sentry.io/1")
            .header("x-custom", "value")
            .unwrap()
            .proxy("http://proxy.internal:3128")
            .ca_cert(b"-----BEGIN CERTIFICATE-----".to_vec())
            .keep_alive(false)
            .build();

        assert_eq!(config.extra_headers.get("x-custom").unwrap(), "value");
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.internal:3128"));
        assert!(config.ca_cert.is_some());
        assert!(!config.keep_alive);
    }

    #[test]
    fn builder_rejects_invalid_header_name() {
        let result = TransportConfig::builder("https://pubkey@sentry.io/1").header("bad name", "v");
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn builder_rejects_invalid_header_value() {
        let result =
            TransportConfig::builder("https://pubkey@sentry.io/1").header("x-ok", "bad\nvalue");
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }
}
