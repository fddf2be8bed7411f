use super::EdlSource;
use crate::errors::{EdlParserError, EdlParserResult, SourceError};
use async_trait::async_trait;
use log::info;
use reqwest::Client;

/// EDL fetched over HTTP(S) with a single GET
pub struct HttpEdlSource {
    url: String,
    client: Client,
    http_request_count: u64,
    http_request_bytes_read: u64,
}

#[async_trait]
impl EdlSource for HttpEdlSource {
    async fn read_all(&mut self) -> EdlParserResult<Vec<u8>> {
        self.read_all().await
    }

    fn print_stats(&self) {
        self.print_stats()
    }

    fn http_request_count(&self) -> u64 {
        self.http_request_count()
    }

    fn http_request_bytes_read(&self) -> u64 {
        self.http_request_bytes_read()
    }
}

impl HttpEdlSource {
    pub fn new(url: impl Into<String>) -> EdlParserResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::new(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
            http_request_count: 0,
            http_request_bytes_read: 0,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Http request count function.
    pub fn http_request_count(&self) -> u64 {
        self.http_request_count
    }

    /// Http request bytes read function.
    pub fn http_request_bytes_read(&self) -> u64 {
        self.http_request_bytes_read
    }

    pub fn print_stats(&self) {
        info!("📊 Download Statistics:");
        info!("   🔢 HTTP Requests: {}", self.http_request_count);
        info!(
            "   📥 Total Downloaded: {} bytes ({:.2} KB)",
            self.http_request_bytes_read,
            self.http_request_bytes_read as f64 / 1024.0
        );
    }

    pub async fn read_all(&mut self) -> EdlParserResult<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::new(e.to_string()))?;

        self.http_request_count += 1;

        if !response.status().is_success() {
            return Err(EdlParserError::Source(SourceError::new(format!(
                "HTTP error: {}",
                response.status()
            ))));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::new(e.to_string()))?;

        self.http_request_bytes_read += bytes.len() as u64;
        Ok(bytes.to_vec())
    }
}
