use crate::transport::buffer::ResponseBuffer;
use crate::transport::error::TransportError;
use crate::transport::{HttpResponse, Transport};
use log::{debug, info};
use reqwest::blocking::Client;
use std::io::{ErrorKind, Read};

const CHUNK_SIZE: usize = 8192;

/// [`Transport`] over a blocking `reqwest` client.
///
/// Redirects follow reqwest's default policy. No retries, no extra headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        info!("Downloading {}", url);
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::NetworkRequest(url.to_string(), e))?;
        let status = response.status().as_u16();

        let mut body = ResponseBuffer::new();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match response.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    body.append(&chunk[..n]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(TransportError::BodyRead(url.to_string(), e)),
            }
        }

        debug!("Received {} bytes with status {} from {}", body.len(), status, url);
        Ok(HttpResponse { status, body })
    }
}
