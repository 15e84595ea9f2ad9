use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::{Client, header::CONTENT_TYPE};
use tracing::{error, warn};
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{entities::FetchedImage, ports::ImageFetcher, value_objects::ImageLocator},
};

/// Reads images over HTTP(S), or from the local filesystem below `image_root`.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
    image_root: Option<PathBuf>,
}

impl HttpImageFetcher {
    pub fn new(timeout_seconds: u64, image_root: Option<PathBuf>) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                CoreError::ConfigurationError(format!("invalid HTTP client settings: {}", e))
            })?;

        Ok(Self { client, image_root })
    }

    pub fn allows_file_locators(&self) -> bool {
        self.image_root.is_some()
    }

    /// Resolves `path` against the image root, refusing anything that escapes it.
    async fn confine(&self, path: &Path) -> Result<PathBuf, CoreError> {
        let Some(root) = &self.image_root else {
            return Err(CoreError::InvalidInput(
                "file image locators are disabled on this server".to_string(),
            ));
        };

        let root = tokio::fs::canonicalize(root).await.map_err(|e| {
            error!("Image root {} is unusable: {}", root.display(), e);
            CoreError::ConfigurationError(format!("image root is unusable: {}", e))
        })?;

        let resolved = tokio::fs::canonicalize(root.join(path))
            .await
            .map_err(|e| CoreError::FetchError(format!("cannot read {}: {}", path.display(), e)))?;

        if !resolved.starts_with(&root) {
            warn!(path = %path.display(), "Rejected image path outside the image root");
            return Err(CoreError::InvalidInput(
                "image path is outside the image root".to_string(),
            ));
        }

        Ok(resolved)
    }

    async fn fetch_remote(&self, url: Url) -> Result<FetchedImage, CoreError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("Image request to {} failed: {}", url, e);
            CoreError::FetchError(format!("request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::FetchError(format!(
                "Failed to fetch image: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CoreError::FetchError(format!("failed to read image body: {}", e)))?;

        Ok(FetchedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }

    async fn fetch_file(&self, path: &Path) -> Result<FetchedImage, CoreError> {
        let path = self.confine(path).await?;
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            error!("Failed to read image file {}: {}", path.display(), e);
            CoreError::FetchError(format!("cannot read {}: {}", path.display(), e))
        })?;

        Ok(FetchedImage {
            bytes,
            content_type: None,
        })
    }
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, locator: ImageLocator) -> Result<FetchedImage, CoreError> {
        match locator {
            ImageLocator::Remote(url) => self.fetch_remote(url).await,
            ImageLocator::File(path) => self.fetch_file(&path).await,
            ImageLocator::Data { .. } => Err(CoreError::InvalidInput(
                "inline images are decoded without fetching".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_fetch_file_reads_bytes_below_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        file.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();

        let fetcher = HttpImageFetcher::new(5, Some(dir.path().to_path_buf())).unwrap();
        let fetched = fetcher
            .fetch(ImageLocator::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(fetched.bytes, vec![0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(fetched.content_type, None);
    }

    #[tokio::test]
    async fn test_fetch_relative_path_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("label.jpg"), [0xFF, 0xD8]).unwrap();

        let fetcher = HttpImageFetcher::new(5, Some(dir.path().to_path_buf())).unwrap();
        let fetched = fetcher
            .fetch(ImageLocator::File(PathBuf::from("label.jpg")))
            .await
            .unwrap();

        assert_eq!(fetched.bytes, vec![0xFF, 0xD8]);
    }

    #[tokio::test]
    async fn test_file_locators_rejected_without_root() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"secret").unwrap();

        let fetcher = HttpImageFetcher::new(5, None).unwrap();
        assert!(!fetcher.allows_file_locators());

        let err = fetcher
            .fetch(ImageLocator::File(file.path().to_path_buf()))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_paths_outside_root_are_rejected() {
        let root = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let secret = outside.path().join("secret.jpg");
        std::fs::write(&secret, b"secret").unwrap();

        let fetcher = HttpImageFetcher::new(5, Some(root.path().to_path_buf())).unwrap();

        let absolute = fetcher
            .fetch(ImageLocator::File(secret.clone()))
            .await
            .unwrap_err();
        assert!(matches!(absolute, CoreError::InvalidInput(_)));

        let escaping = PathBuf::from("..")
            .join(outside.path().file_name().unwrap())
            .join("secret.jpg");
        let traversal = fetcher
            .fetch(ImageLocator::File(escaping))
            .await
            .unwrap_err();
        assert!(matches!(traversal, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = HttpImageFetcher::new(5, Some(dir.path().to_path_buf())).unwrap();

        let err = fetcher
            .fetch(ImageLocator::File(dir.path().join("missing.jpg")))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::FetchError(_)));
    }
}
