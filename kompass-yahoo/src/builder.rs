//! Construction-time configuration for the Yahoo connector.

use kompass_core::KompassError;
use url::Url;

use crate::YahooConnector;
use crate::client::YahooClient;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/";
const DEFAULT_API_KEY_HEADER: &str = "X-RapidAPI-Key";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Builder for [`YahooConnector`].
///
/// All deployment specifics (endpoint host, API key and its header name,
/// user agent, a preconfigured HTTP client) are explicit construction-time
/// configuration; the connector never reads ambient secrets.
#[derive(Debug, Default)]
pub struct YahooConnectorBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    api_key_header: Option<String>,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl YahooConnectorBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL. Primarily used to point tests at a local
    /// mock server, and by hosted API-gateway deployments.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Attach an API key, sent with every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the header name used to transmit the API key.
    #[must_use]
    pub fn api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = Some(header.into());
        self
    }

    /// Override the user agent string.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Provide a preconfigured `reqwest::Client` (proxies, timeouts, TLS).
    ///
    /// When set, the user agent option is ignored; configure it on the
    /// client instead.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL does not parse, and `Other`
    /// when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YahooConnector, KompassError> {
        let mut base = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // Url::join treats a path without a trailing slash as a file component.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| KompassError::InvalidArg(format!("invalid base url '{base}': {e}")))?;

        let http = match self.http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                )
                .build()
                .map_err(|e| KompassError::Other(e.to_string()))?,
        };

        let api_key = self.api_key.map(|key| {
            (
                self.api_key_header
                    .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string()),
                key,
            )
        });

        Ok(YahooConnector::from_client(YahooClient::new(
            http, base_url, api_key,
        )))
    }
}
