//! Agent and proxy selection
//!
//! Chooses, once per transport construction, the connection agent used for
//! every subsequent send: either a direct connection or one through a
//! forward proxy. Environment settings are captured into an explicit
//! [`ProxyEnv`] struct at construction so that selection is a pure function
//! of its inputs and later environment changes cannot affect a live
//! transport.

use crate::config::TransportConfig;
use crate::dsn::{Dsn, Scheme};
use crate::error::{Result, TransportError};
use url::Url;

/// Proxy-related environment settings, read once at construction.
#[derive(Debug, Clone, Default)]
pub struct ProxyEnv {
    /// `http_proxy`: proxy for plain-HTTP targets, and the generic
    /// fallback for TLS targets.
    pub http_proxy: Option<String>,
    /// `https_proxy`: proxy for TLS targets.
    pub https_proxy: Option<String>,
    /// `no_proxy`: comma-separated `host` or `host:port` exclusions.
    pub no_proxy: Option<String>,
}

impl ProxyEnv {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self {
            http_proxy: env_nonempty("http_proxy"),
            https_proxy: env_nonempty("https_proxy"),
            no_proxy: env_nonempty("no_proxy"),
        }
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Outcome of agent selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentKind {
    /// Connect to the target directly.
    Direct,
    /// Connect through the given forward proxy.
    Proxied(Url),
}

/// Select the agent for a target.
///
/// Priority: a `no_proxy` exclusion matching the target host (and resolved
/// port, when the entry carries one) forces a direct connection; otherwise
/// an explicit proxy wins over the environment, where the scheme-specific
/// setting is preferred and `http_proxy` serves as the generic fallback for
/// TLS targets.
///
/// # Errors
///
/// Returns [`TransportError::InvalidProxy`] when the effective proxy URL
/// does not parse.
pub fn select_agent(dsn: &Dsn, explicit: Option<&str>, env: &ProxyEnv) -> Result<AgentKind> {
    if no_proxy_matches(dsn, env.no_proxy.as_deref()) {
        return Ok(AgentKind::Direct);
    }

    let effective = match explicit {
        Some(proxy) => Some(proxy.to_owned()),
        None => match dsn.scheme() {
            Scheme::Http => env.http_proxy.clone(),
            Scheme::Https => env.https_proxy.clone().or_else(|| env.http_proxy.clone()),
        },
    };

    match effective {
        Some(raw) => {
            let url = Url::parse(&raw)
                .map_err(|e| TransportError::InvalidProxy(format!("{raw}: {e}")))?;
            Ok(AgentKind::Proxied(url))
        }
        None => Ok(AgentKind::Direct),
    }
}

fn no_proxy_matches(dsn: &Dsn, list: Option<&str>) -> bool {
    let Some(list) = list else {
        return false;
    };
    let host = dsn.host();
    let port = dsn.port().unwrap_or_else(|| dsn.scheme().default_port());
    let host_port = format!("{host}:{port}");

    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .any(|entry| entry == host || entry == host_port)
}

/// Build the reqwest client that acts as the agent.
///
/// reqwest's own environment-proxy detection is disabled so that
/// [`select_agent`] remains the single source of truth; when proxied,
/// reqwest tunnels or forwards based on the target scheme.
pub(crate) fn build_agent(kind: &AgentKind, config: &TransportConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(crate::client_identifier());

    builder = match kind {
        AgentKind::Direct => builder.no_proxy(),
        AgentKind::Proxied(url) => builder.proxy(
            reqwest::Proxy::all(url.clone())
                .map_err(|e| TransportError::InvalidProxy(e.to_string()))?,
        ),
    };

    if let Some(pem) = &config.ca_cert {
        let cert = reqwest::Certificate::from_pem(pem)
            .map_err(|e| TransportError::HttpClient(format!("invalid CA certificate: {e}")))?;
        builder = builder.add_root_certificate(cert);
    }

    if !config.keep_alive {
        builder = builder.pool_max_idle_per_host(0);
    }

    builder
        .build()
        .map_err(|e| TransportError::HttpClient(e.to_string()))
}
