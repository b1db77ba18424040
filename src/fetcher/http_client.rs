use super::{FetchError, HistoryApi, QueryWindow};
use crate::config::Config;
use crate::error::{RekapError, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Body POST: `{"tid": ..., "periodeAwal": ..., "periodeAkhir": ...}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRequest<'a> {
    tid: &'a str,
    periode_awal: &'a str,
    periode_akhir: &'a str,
}

/// Client endpoint riwayat RPL (JSON over HTTP POST)
#[derive(Debug, Clone)]
pub struct HttpHistoryClient {
    client: reqwest::Client,
    api_url: String,
}

impl HttpHistoryClient {
    pub fn new(api_url: &str, connect_timeout: Duration, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| RekapError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.trim().to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, config.connect_timeout(), config.timeout())
    }
}

impl HistoryApi for HttpHistoryClient {
    async fn fetch_history(&self, tid: &str, window: &QueryWindow) -> std::result::Result<Value, FetchError> {
        let body = HistoryRequest {
            tid,
            periode_awal: &window.periode_awal,
            periode_akhir: &window.periode_akhir,
        };
        debug!(tid, url = %self.api_url, "POST riwayat");

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await.map_err(transport_error)?;
        parse_body(&text)
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}

/// Body kosong dan JSON rusak dibedakan
pub(crate) fn parse_body(text: &str) -> std::result::Result<Value, FetchError> {
    if text.trim().is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|_| FetchError::InvalidJson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Err(FetchError::EmptyResponse));
        assert_eq!(parse_body(" \n"), Err(FetchError::EmptyResponse));
        assert_eq!(parse_body("<html>"), Err(FetchError::InvalidJson));
        assert_eq!(parse_body(r#"{"data":[]}"#), Ok(json!({"data": []})));
    }

    #[test]
    fn test_request_body_field_names() {
        let body = HistoryRequest {
            tid: "T1",
            periode_awal: "2000-01-01",
            periode_akhir: "2024-03-10",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"tid": "T1", "periodeAwal": "2000-01-01", "periodeAkhir": "2024-03-10"})
        );
    }

    #[test]
    fn test_from_config_trims_url() {
        let mut config = Config::default();
        config.api_url = "  http://localhost:9/api  ".into();
        let client = HttpHistoryClient::from_config(&config).unwrap();
        assert_eq!(client.api_url, "http://localhost:9/api");
    }
}
