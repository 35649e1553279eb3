//! Thin HTTP layer over the provider's JSON endpoints.

use kompass_core::KompassError;
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire;

pub(crate) const CONNECTOR_NAME: &str = "kompass-yahoo";

const QUOTE_SUMMARY_MODULES: &str =
    "summaryDetail,financialData,defaultKeyStatistics,assetProfile,esgScores,price";

fn looks_like_not_found(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("not found") || m.contains("no data") || m.contains("no matches")
}

fn api_error_to_kompass(err: &wire::ApiError, what: &str) -> KompassError {
    let msg = err
        .description
        .as_deref()
        .or(err.code.as_deref())
        .unwrap_or("unspecified provider error");
    if looks_like_not_found(msg) {
        KompassError::not_found(what.to_string())
    } else {
        KompassError::connector(CONNECTOR_NAME, msg)
    }
}

pub(crate) struct YahooClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<(String, String)>,
}

impl YahooClient {
    pub(crate) const fn new(
        http: reqwest::Client,
        base_url: Url,
        api_key: Option<(String, String)>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<T, KompassError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| KompassError::InvalidArg(format!("bad request url: {e}")))?;

        let mut req = self.http.get(url).query(query);
        if let Some((header, key)) = &self.api_key {
            req = req.header(header.as_str(), key.as_str());
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                KompassError::transport(e.to_string())
            } else {
                KompassError::connector(CONNECTOR_NAME, e.to_string())
            }
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(KompassError::not_found(what.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_ms = resp
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| secs * 1_000);
            return Err(KompassError::rate_limited(retry_after_ms));
        }
        if status.is_server_error() {
            return Err(KompassError::transport(format!(
                "provider returned {status}"
            )));
        }
        if !status.is_success() {
            return Err(KompassError::connector(
                CONNECTOR_NAME,
                format!("provider returned {status}"),
            ));
        }

        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                KompassError::transport(e.to_string())
            } else {
                KompassError::connector(CONNECTOR_NAME, e.to_string())
            }
        })?;
        serde_json::from_slice(&body)
            .map_err(|e| KompassError::data(format!("undecodable payload for {what}: {e}")))
    }

    /// Fetch the quoteSummary result block for a symbol.
    pub(crate) async fn quote_summary(
        &self,
        symbol: &str,
        what: &str,
    ) -> Result<wire::QuoteSummaryResult, KompassError> {
        let envelope: wire::QuoteSummaryEnvelope = self
            .get_json(
                &format!("v10/finance/quoteSummary/{symbol}"),
                &[("modules", QUOTE_SUMMARY_MODULES)],
                what,
            )
            .await?;

        let summary = envelope
            .quote_summary
            .ok_or_else(|| KompassError::data(format!("missing quoteSummary block for {what}")))?;
        if let Some(err) = &summary.error
            && (err.code.is_some() || err.description.is_some())
        {
            return Err(api_error_to_kompass(err, what));
        }
        summary
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| KompassError::not_found(what.to_string()))
    }

    /// Fetch the daily close series for a symbol over a logical range.
    pub(crate) async fn chart(
        &self,
        symbol: &str,
        range: &str,
        what: &str,
    ) -> Result<wire::ChartResult, KompassError> {
        let envelope: wire::ChartEnvelope = self
            .get_json(
                &format!("v8/finance/chart/{symbol}"),
                &[("range", range), ("interval", "1d")],
                what,
            )
            .await?;

        let chart = envelope
            .chart
            .ok_or_else(|| KompassError::data(format!("missing chart block for {what}")))?;
        if let Some(err) = &chart.error
            && (err.code.is_some() || err.description.is_some())
        {
            return Err(api_error_to_kompass(err, what));
        }
        chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| KompassError::not_found(what.to_string()))
    }
}
