//! Single blocking HTTP GET, with the body collected into a [`ResponseBuffer`].

pub mod buffer;
pub mod error;
pub mod http_client;

use buffer::ResponseBuffer;
use error::TransportError;

/// Outcome of a request that reached the server.
///
/// Any status is reported here, including non-success ones; only failures
/// to talk to the server at all are a [`TransportError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: ResponseBuffer,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs one GET per call.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}
