//! Asset retrieval for logos and screenshots.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{DataUrl, ExportError};

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the raw bytes behind `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Root for bare and absolute-looking asset paths (`/logos/visa.svg`).
    pub root: PathBuf,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }
}

/// Fetches `http(s)://` over the network, `data:` inline, and everything else
/// from disk.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    client: reqwest::Client,
    root: PathBuf,
}

impl AssetFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, ExportError> {
        let mut builder = reqwest::Client::builder().timeout(settings.timeout);
        if let Some(agent) = &settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|err| ExportError::fetch("<client>", err))?;
        Ok(Self {
            client,
            root: settings.root,
        })
    }

    async fn fetch_http(&self, url: url::Url) -> Result<Vec<u8>, ExportError> {
        let shown = url.to_string();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| ExportError::fetch(&shown, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::fetch(&shown, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ExportError::fetch(&shown, err))?;
        Ok(body.to_vec())
    }

    async fn fetch_file(&self, shown: &str, path: &Path) -> Result<Vec<u8>, ExportError> {
        tokio::fs::read(path)
            .await
            .map_err(|err| ExportError::fetch(shown, err))
    }

    /// Resolve a non-URL asset path against the asset root.
    fn local_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl Fetcher for AssetFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        match url::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                self.fetch_http(parsed).await
            }
            Ok(parsed) if parsed.scheme() == "data" => DataUrl::parse(url).map(|d| d.data),
            Ok(parsed) if parsed.scheme() == "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|()| ExportError::fetch(url, "not a local file path"))?;
                self.fetch_file(url, &path).await
            }
            _ => self.fetch_file(url, &self.local_path(url)).await,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(root: &Path) -> AssetFetcher {
        AssetFetcher::new(FetchSettings {
            root: root.to_path_buf(),
            ..FetchSettings::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_local_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("logos")).unwrap();
        fs::write(dir.path().join("logos/visa.svg"), "<svg/>").unwrap();
        let fetcher = fetcher(dir.path());

        assert_eq!(fetcher.fetch("/logos/visa.svg").await.unwrap(), b"<svg/>");
        assert_eq!(fetcher.fetch("logos/visa.svg").await.unwrap(), b"<svg/>");

        let file_url = url::Url::from_file_path(dir.path().join("logos/visa.svg")).unwrap();
        assert_eq!(fetcher.fetch(file_url.as_str()).await.unwrap(), b"<svg/>");

        let missing = fetcher.fetch("/logos/none.svg").await;
        assert!(matches!(missing, Err(ExportError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_fetch_data_url() {
        let dir = TempDir::new().unwrap();
        let body = fetcher(dir.path())
            .fetch("data:image/png;base64,iVBORw==")
            .await
            .unwrap();
        assert_eq!(body, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_fetch_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/seed/nuran1/400/800"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(b"PNGDATA".to_vec(), "image/png"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(dir.path());

        let ok = fetcher
            .fetch(&format!("{}/seed/nuran1/400/800", server.uri()))
            .await
            .unwrap();
        assert_eq!(ok, b"PNGDATA");

        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(&err, ExportError::Fetch { reason, .. } if reason.contains("404")));
    }
}
