//! Blogger v3 content API client.
//!
//! One GET per call, no retries:
//!
//! ```text
//! GET {base_url}/blogs/{blog_id}/posts?key={key}
//! GET {base_url}/blogs/{blog_id}/pages?key={key}
//! ```
//!
//! Missing credentials short-circuit before any network activity.

mod error;
mod types;

pub use error::ApiError;
pub use types::{ListResponse, RemoteAuthor, RemoteLink, RemotePage, RemotePost};

use crate::config::{ApiConfig, Credentials};
use crate::log;
use serde::de::DeserializeOwned;

/// The two collections the application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Posts,
    Pages,
}

impl Collection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Pages => "pages",
        }
    }
}

/// HTTP client bound to one API configuration.
#[derive(Debug, Clone)]
pub struct BloggerClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl BloggerClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            credentials: config.credentials(),
        }
    }

    /// Whether both credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Fetch every post of the configured blog.
    pub async fn list_posts(&self) -> Result<Vec<RemotePost>, ApiError> {
        self.list(Collection::Posts).await
    }

    /// Fetch every page of the configured blog.
    pub async fn list_pages(&self) -> Result<Vec<RemotePage>, ApiError> {
        self.list(Collection::Pages).await
    }

    /// Full request URL for a collection, or `None` without credentials.
    pub fn collection_url(&self, collection: Collection) -> Option<String> {
        let creds = self.credentials.as_ref()?;
        Some(format!(
            "{}/blogs/{}/{}?key={}",
            self.base_url,
            urlencoding::encode(&creds.blog_id),
            collection.as_str(),
            urlencoding::encode(&creds.key),
        ))
    }

    async fn list<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, ApiError> {
        let url = self
            .collection_url(collection)
            .ok_or(ApiError::MissingCredentials)?;

        log!("fetch"; "GET {}", collection.as_str());
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let list: ListResponse<T> = serde_json::from_slice(&body)?;
        Ok(list.into_items())
    }
}

/// Local stand-in for the content API, serving one canned response.
#[cfg(test)]
pub mod testing {
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::thread::JoinHandle;
    use tiny_http::{Header, Response, Server};

    use crate::config::ApiConfig;

    pub struct StubApi {
        server: Arc<Server>,
        handle: Option<JoinHandle<()>>,
        requests: Arc<Mutex<Vec<String>>>,
        pub base_url: String,
    }

    impl StubApi {
        /// Serve `body` with `status` for every request.
        pub fn serve(status: u16, body: &str) -> Self {
            let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
            let port = server.server_addr().to_ip().unwrap().port();
            let requests = Arc::new(Mutex::new(Vec::new()));

            let handle = {
                let server = Arc::clone(&server);
                let requests = Arc::clone(&requests);
                let body = body.to_owned();
                std::thread::spawn(move || {
                    for request in server.incoming_requests() {
                        requests.lock().push(request.url().to_owned());
                        let header =
                            Header::from_bytes("Content-Type", "application/json").unwrap();
                        let response = Response::from_string(body.clone())
                            .with_status_code(status)
                            .with_header(header);
                        request.respond(response).ok();
                    }
                })
            };

            Self {
                server,
                handle: Some(handle),
                requests,
                base_url: format!("http://127.0.0.1:{port}"),
            }
        }

        /// Config pointing at this stub with both credentials set.
        pub fn config(&self) -> ApiConfig {
            ApiConfig {
                key: Some("test-key".into()),
                blog_id: Some("42".into()),
                base_url: self.base_url.clone(),
            }
        }

        /// Request paths received so far.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().clone()
        }
    }

    impl Drop for StubApi {
        fn drop(&mut self) {
            self.server.unblock();
            if let Some(handle) = self.handle.take() {
                handle.join().ok();
            }
        }
    }

    /// Config for an address nothing listens on.
    pub fn unreachable_config() -> ApiConfig {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        ApiConfig {
            key: Some("test-key".into()),
            blog_id: Some("42".into()),
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    /// Config with no credentials at all.
    pub fn missing_credentials_config() -> ApiConfig {
        ApiConfig::default()
    }
}
