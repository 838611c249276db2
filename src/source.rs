use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{ReporterError, Result};
use crate::types::UsageSnapshot;

/// Anything that can produce the current cumulative usage counters.
///
/// A failure here is fatal to the run: no notification is ever sent from
/// placeholder values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageSource: Send + Sync {
    async fn fetch(&self) -> Result<UsageSnapshot>;
}

/// Reads the usage JSON exported from Railway out of a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UsageSource for FileSource {
    async fn fetch(&self) -> Result<UsageSnapshot> {
        let contents =
            fs::read_to_string(&self.path)
                .await
                .map_err(|e| ReporterError::UsageFileUnavailable {
                    path: self.path.clone(),
                    source: e,
                })?;

        let snapshot = serde_json::from_str(&contents).map_err(|e| {
            ReporterError::MalformedData {
                context: self.path.display().to_string(),
                source: e,
            }
        })?;

        debug!(path = %self.path.display(), "loaded usage snapshot");
        Ok(snapshot)
    }
}

/// Fetches the same counters from a remote endpoint returning JSON.
pub struct HttpSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl UsageSource for HttpSource {
    async fn fetch(&self) -> Result<UsageSnapshot> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ReporterError::UsageEndpointUnavailable {
                url: self.url.clone(),
                source: e,
            })?;

        let body = response
            .text()
            .await
            .map_err(|e| ReporterError::UsageEndpointUnavailable {
                url: self.url.clone(),
                source: e,
            })?;

        let snapshot =
            serde_json::from_str(&body).map_err(|e| ReporterError::MalformedData {
                context: self.url.clone(),
                source: e,
            })?;

        debug!(url = %self.url, "fetched usage snapshot");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_file_source_reads_counters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cpuSeconds": 120, "memoryMBSeconds": 2048, "networkEgressMB": 3, "volumeGBSeconds": 60}}"#
        )
        .unwrap();

        let snapshot = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(snapshot.cpu_seconds, 120.0);
        assert_eq!(snapshot.memory_mb_seconds, 2048.0);
        assert_eq!(snapshot.network_egress_mb, 3.0);
        assert_eq!(snapshot.volume_gb_seconds, 60.0);
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, ReporterError::UsageFileUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_file_source_invalid_json_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = FileSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, ReporterError::MalformedData { .. }));
    }

    #[tokio::test]
    async fn test_http_source_fetches_counters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usage"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    r#"{"cpuSeconds": 7, "networkEgressMB": 11}"#,
                    "application/json",
                ),
            )
            .mount(&server)
            .await;

        let snapshot = HttpSource::new(format!("{}/usage", server.uri()))
            .fetch()
            .await
            .unwrap();
        assert_eq!(snapshot.cpu_seconds, 7.0);
        assert_eq!(snapshot.network_egress_mb, 11.0);
        assert_eq!(snapshot.memory_mb_seconds, 0.0);
    }

    #[tokio::test]
    async fn test_http_source_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = HttpSource::new(format!("{}/usage", server.uri()))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, ReporterError::UsageEndpointUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_http_source_bad_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "text/html"))
            .mount(&server)
            .await;

        let err = HttpSource::new(format!("{}/usage", server.uri()))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, ReporterError::MalformedData { .. }));
    }
}
