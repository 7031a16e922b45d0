use crate::domain::{DisplayValue, PropertyListing, SearchResult};
use crate::search::{ApiError, SearchApi, SearchQuery};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

/// In-memory `SearchApi` that records every query it receives.
pub struct StubApi {
    response: Result<SearchResult, u16>,
    calls: Mutex<Vec<SearchQuery>>,
}

impl StubApi {
    pub fn ok(total: u64, properties: Vec<PropertyListing>) -> Self {
        Self {
            response: Ok(SearchResult { total, properties }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            response: Err(code),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchApi for StubApi {
    fn search(&self, query: &SearchQuery) -> Result<SearchResult, ApiError> {
        self.calls.lock().unwrap().push(query.clone());
        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(code) => Err(ApiError::Status(*code)),
        }
    }
}

pub fn listing(id: &str) -> PropertyListing {
    PropertyListing {
        id: DisplayValue::Text(id.to_string()),
        title: format!("Apartamento {id}"),
        location: "El Poblado, Medellín".to_string(),
        zone: "Castropol".to_string(),
        price: "$ 450.000.000".to_string(),
        area: "120 m²".to_string(),
        bedrooms: DisplayValue::Int(3),
        bathrooms: DisplayValue::Int(2),
        image_url: Some(format!("https://img.example.com/{id}.jpg")),
        external_url: format!("https://listings.example.com/{id}"),
    }
}

/// One-shot HTTP server on localhost. Answers the first request with
/// `status` and `body`; the handle yields that request's request line.
pub fn stub_api(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub server addr");
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        let request = String::from_utf8_lossy(&raw).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();

        request_line
    });

    (format!("http://{addr}"), handle)
}

/// Base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}
