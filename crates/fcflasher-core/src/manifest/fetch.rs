//! Remote manifest download

use std::io::Read;
use std::time::Duration;

use flate2::read::GzDecoder;
use serde_json::Value;

use super::{ManifestError, ManifestHandler};

/// Network timeout for the manifest fetch; the fetch must fail fast
/// rather than hang the registry build
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

impl ManifestHandler {
    /// Download and decompress the manifest document
    ///
    /// Network and decode failures surface as [`ManifestError`] so the
    /// caller can report a degraded registry instead of silently losing
    /// identifiers.
    pub fn fetch_remote(&self) -> Result<Value, ManifestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        let response = client.get(&self.url).send()?.error_for_status()?;
        let compressed = response.bytes()?;

        let mut raw = String::new();
        GzDecoder::new(compressed.as_ref()).read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Gzip a byte slice, for test fixtures standing in for the remote
#[cfg(test)]
pub(crate) fn gzip(data: &[u8]) -> Vec<u8> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_remote_decompresses_document() {
        let mut server = mockito::Server::new();
        let body = gzip(br#"{"firmware": [{"USBID": "0x1209/0x5740", "platform": "MatekH743"}]}"#);
        let mock = server
            .mock("GET", "/manifest.json.gz")
            .with_status(200)
            .with_body(body)
            .create();

        let handler = ManifestHandler::with_url(format!("{}/manifest.json.gz", server.url()));
        let document = handler.fetch_remote().unwrap();

        mock.assert();
        assert!(document.get("firmware").is_some());
    }

    #[test]
    fn test_fetch_remote_reports_http_failure() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/manifest.json.gz")
            .with_status(503)
            .create();

        let handler = ManifestHandler::with_url(format!("{}/manifest.json.gz", server.url()));
        assert!(matches!(
            handler.fetch_remote(),
            Err(ManifestError::Http(_))
        ));
    }

    #[test]
    fn test_fetch_remote_reports_garbage_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/manifest.json.gz")
            .with_status(200)
            .with_body(gzip(b"not json at all"))
            .create();

        let handler = ManifestHandler::with_url(format!("{}/manifest.json.gz", server.url()));
        assert!(matches!(
            handler.fetch_remote(),
            Err(ManifestError::Decode(_))
        ));
    }
}
