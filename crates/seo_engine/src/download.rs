use std::path::{Path, PathBuf};

use engine_logging::engine_info;
use futures_util::StreamExt;
use percent_encoding::percent_decode_str;

use crate::client::map_reqwest_error;
use crate::{AtomicFileWriter, EngineSettings, FailureKind, RequestError};

/// Name the collaborator gives its output when the link has no usable file name.
pub const DEFAULT_CSV_FILENAME: &str = "seo_analysis.csv";

/// Saves the CSV behind a download link into a local directory.
#[derive(Debug, Clone)]
pub struct CsvDownloader {
    max_bytes: u64,
    client: reqwest::Client,
}

impl CsvDownloader {
    pub fn new(settings: &EngineSettings) -> Result<Self, RequestError> {
        let client = settings
            .build_client()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            max_bytes: settings.max_download_bytes,
            client,
        })
    }

    pub async fn download(&self, link: &str, dir: &Path) -> Result<PathBuf, RequestError> {
        let parsed = reqwest::Url::parse(link)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let filename = file_name_for(&parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }

        let saved = AtomicFileWriter::new(dir.to_path_buf())
            .write(&filename, &bytes)
            .map_err(|err| RequestError::new(FailureKind::Persist, err.to_string()))?;
        engine_info!("Saved {} bytes to {:?}", bytes.len(), saved);
        Ok(saved)
    }

    fn too_large(&self, actual: Option<u64>) -> RequestError {
        RequestError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

/// Decoded last non-empty path segment of the link, or the collaborator's default name.
fn file_name_for(link: &url::Url) -> String {
    link.path_segments()
        .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
        .and_then(|segment| percent_decode_str(segment).decode_utf8().ok())
        .filter(|name| is_bare_file_name(name))
        .map(|name| name.into_owned())
        .unwrap_or_else(|| DEFAULT_CSV_FILENAME.to_string())
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(link: &str) -> String {
        file_name_for(&url::Url::parse(link).unwrap())
    }

    #[test]
    fn file_name_uses_last_segment() {
        assert_eq!(name("http://127.0.0.1:5000/files/out.csv"), "out.csv");
        assert_eq!(
            name("http://127.0.0.1:5000/files/my%20report.csv"),
            "my report.csv"
        );
        assert_eq!(
            name("http://127.0.0.1:5000/files/r%C3%A9sum%C3%A9.csv"),
            "résumé.csv"
        );
    }

    #[test]
    fn file_name_falls_back_to_default() {
        assert_eq!(name("http://127.0.0.1:5000/"), DEFAULT_CSV_FILENAME);
        assert_eq!(name("http://127.0.0.1:5000/csv//"), "csv");
        // Decoding must not smuggle separators or parent references into the name.
        assert_eq!(name("http://127.0.0.1:5000/files/..%2Fescape.csv"), DEFAULT_CSV_FILENAME);
        assert_eq!(name("http://127.0.0.1:5000/files/a%5Cb.csv"), DEFAULT_CSV_FILENAME);
        assert_eq!(name("http://127.0.0.1:5000/files/%2E%2E"), DEFAULT_CSV_FILENAME);
        assert_eq!(name("http://127.0.0.1:5000/files/%FF.csv"), DEFAULT_CSV_FILENAME);
    }
}
