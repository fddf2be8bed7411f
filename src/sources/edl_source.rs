use crate::errors::EdlParserResult;
use async_trait::async_trait;
use std::io::{self, Read};
use std::path::Path;

/// Where raw EDL bytes come from: a local file or an HTTP URL
#[async_trait]
pub trait EdlSource: Send {
    async fn read_all(&mut self) -> EdlParserResult<Vec<u8>>;

    fn print_stats(&self) {}
    fn http_request_count(&self) -> u64 {
        0
    }
    fn http_request_bytes_read(&self) -> u64 {
        0
    }
}

/// Local file wrapper
pub struct LocalEdlSource(std::fs::File);

impl LocalEdlSource {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalEdlSource(std::fs::File::open(path)?))
    }
}

#[async_trait]
impl EdlSource for LocalEdlSource {
    async fn read_all(&mut self) -> EdlParserResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.0.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
