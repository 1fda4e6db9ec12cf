use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Certificate;
use serde_json::{Map, Value};

use crate::error::{AgentError, Result};

pub const API_ROOT: &str = "/api";
pub const API_HOSTS: &str = "/api/hosts?all_content=true";
pub const API_DATACENTERS: &str = "/api/datacenters?follow=storage_domains";
pub const API_CLUSTERS: &str = "/api/clusters";
pub const API_VM_STATISTICS: &str = "/api/vms?follow=statistics";
pub const API_VM_SNAPSHOTS: &str = "/api/vms?follow=snapshots";

/// Read-only access to the engine API.
///
/// Implementations never fail: an endpoint that cannot be fetched yields an
/// empty JSON object.
pub trait ApiSource {
    fn get(&self, endpoint: &str) -> Value;
}

pub fn empty_response() -> Value {
    Value::Object(Map::new())
}

pub struct OvirtClient {
    engine_url: String,
    username: String,
    password: String,
    http: Client,
}

impl OvirtClient {
    pub fn new(
        engine_url: &str,
        username: &str,
        password: &str,
        certfile: Option<&Path>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("version", HeaderValue::from_static("4"));

        let mut builder = Client::builder().default_headers(headers);
        builder = match certfile {
            Some(path) => builder
                .tls_built_in_root_certs(false)
                .add_root_certificate(load_certificate(path)?),
            None => builder.danger_accept_invalid_certs(true),
        };

        Ok(Self {
            engine_url: engine_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            http: builder.build()?,
        })
    }

    fn fetch(&self, endpoint: &str) -> std::result::Result<Value, reqwest::Error> {
        self.http
            .get(format!("{}{}", self.engine_url, endpoint))
            .basic_auth(&self.username, Some(&self.password))
            .send()?
            .error_for_status()?
            .json()
    }
}

impl ApiSource for OvirtClient {
    fn get(&self, endpoint: &str) -> Value {
        let started = Instant::now();
        let result = self.fetch(endpoint);
        info!("GET {} took {:.3}s", endpoint, started.elapsed().as_secs_f64());

        match result {
            Ok(data) => data,
            Err(e) => {
                error!("Error fetching {}: {}", endpoint, e);
                empty_response()
            }
        }
    }
}

fn load_certificate(path: &Path) -> Result<Certificate> {
    let cert_error = |reason: String| AgentError::Certificate {
        path: PathBuf::from(path),
        reason,
    };
    let pem = fs::read(path).map_err(|e| cert_error(e.to_string()))?;
    Certificate::from_pem(&pem).map_err(|e| cert_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one canned HTTP response on a local port and hand back the raw
    /// request head.
    fn serve_once(response: &'static str) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end().to_string();
                if line.is_empty() {
                    break;
                }
                request.push(line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });
        (url, handle)
    }

    fn header<'a>(request: &'a [String], name: &str) -> Option<&'a str> {
        request.iter().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    #[test]
    fn test_request_headers_and_basic_auth() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 24\r\nConnection: close\r\n\r\n{\"product_info\":{\"a\":1}}",
        );
        let client = OvirtClient::new(&url, "admin@internal", "pw", None).unwrap();
        let data = client.get(API_HOSTS);
        let request = server.join().unwrap();

        assert_eq!(request[0], "GET /api/hosts?all_content=true HTTP/1.1");
        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(header(&request, "version"), Some("4"));
        assert_eq!(header(&request, "authorization"), Some("Basic YWRtaW5AaW50ZXJuYWw6cHc="));
        assert_eq!(data, serde_json::json!({"product_info": {"a": 1}}));
    }

    #[test]
    fn test_server_error_degrades_to_empty_object() {
        let (url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let client = OvirtClient::new(&url, "admin@internal", "pw", None).unwrap();
        assert_eq!(client.get(API_ROOT), empty_response());
        server.join().unwrap();
    }

    #[test]
    fn test_undecodable_body_degrades_to_empty_object() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
        );
        let client = OvirtClient::new(&url, "admin@internal", "pw", None).unwrap();
        assert_eq!(client.get(API_CLUSTERS), empty_response());
        server.join().unwrap();
    }

    #[test]
    fn test_engine_url_trailing_slash_trimmed() {
        let client = OvirtClient::new("https://engine.example/ovirt-engine/", "admin@internal", "pw", None)
            .unwrap();
        assert_eq!(client.engine_url, "https://engine.example/ovirt-engine");
    }

    #[test]
    fn test_missing_certificate_is_an_error() {
        let result = OvirtClient::new(
            "https://engine.example",
            "admin@internal",
            "pw",
            Some(Path::new("/nonexistent/engine.pem")),
        );
        assert!(matches!(result, Err(AgentError::Certificate { .. })));
    }

    #[test]
    fn test_unreachable_engine_degrades_to_empty_object() {
        // Port 9 (discard) on localhost is not expected to speak HTTP.
        let client = OvirtClient::new("http://127.0.0.1:9", "admin@internal", "pw", None).unwrap();
        assert_eq!(client.get(API_ROOT), empty_response());
    }
}
