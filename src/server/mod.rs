//! Page server
//!
//! Serves one pre-rendered [`Document`] over HTTP with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - the dashboard page
//!
//! Every request gets the same immutable document; there is no
//! per-request state.
//!
//! # Example
//!
//! ```rust,no_run
//! use humdash::dashboard::build_document;
//! use humdash::server::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = build_document("Ethiopia Humanitarian Dashboard")?;
//!     let server = Server::bind("0.0.0.0", 8000).await?;
//!     server.serve(document).await?;
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ServerError, ServerResult};

use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::render::Document;

/// Build the router serving `document` at `/`
pub fn build_router(document: Document) -> Router {
    let page = Bytes::from(document.into_html());

    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(page)
}

/// GET /
///
/// Cloning `Bytes` shares the rendered buffer; the page is never copied.
async fn index(State(page): State<Bytes>) -> Html<Bytes> {
    Html(page)
}

/// A bound, not yet serving, HTTP listener
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Bind `host:port`. Failure is reported as [`ServerError::Bind`];
    /// there is no retry and no fallback port.
    pub async fn bind(host: &str, port: u16) -> ServerResult<Self> {
        let addr = format!("{}:{}", host, port);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        tracing::info!("Bound {}", local);
        Ok(Self {
            listener,
            addr: local,
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve `document` until a shutdown signal arrives
    pub async fn serve(self, document: Document) -> ServerResult<()> {
        self.serve_with_shutdown(document, shutdown_signal()).await
    }

    /// Serve `document` until `shutdown` completes
    pub async fn serve_with_shutdown<F>(self, document: Document, shutdown: F) -> ServerResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(document);

        tracing::info!("Dashboard listening on http://{}", self.addr);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Dashboard server shut down gracefully");
        Ok(())
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{div, p, Node};
    use crate::render::render;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::util::ServiceExt;

    fn document() -> Document {
        let root: Node = div([p("hello")]).into();
        render(&root, "Test Page").unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_document() {
        let doc = document();
        let app = build_router(doc.clone());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), doc.html().as_bytes());
    }

    #[tokio::test]
    async fn test_same_document_every_request() {
        let app = build_router(document());

        let mut bodies = Vec::new();
        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            bodies.push(
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap(),
            );
        }
        assert!(bodies.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = build_router(document());

        let response = app
            .oneshot(Request::builder().uri("/api/data").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bind_free_port() {
        let server = Server::bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_occupied_port() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        match Server::bind("127.0.0.1", port).await {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, format!("127.0.0.1:{}", port)),
            Err(other) => panic!("expected bind error, got {}", other),
            Ok(_) => panic!("expected bind error"),
        }
    }

    #[tokio::test]
    async fn test_bind_free_port_all_interfaces() {
        let server = Server::bind("0.0.0.0", 0).await.unwrap();
        let addr = server.local_addr();
        assert!(addr.ip().is_unspecified());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_occupied_port_all_interfaces() {
        let occupied = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        match Server::bind("0.0.0.0", port).await {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, format!("0.0.0.0:{}", port)),
            Err(other) => panic!("expected bind error, got {}", other),
            Ok(_) => panic!("expected bind error"),
        }
    }

    #[tokio::test]
    async fn test_bind_invalid_host() {
        let result = Server::bind("not a host", 8000).await;
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    #[tokio::test]
    async fn test_serve_over_tcp() {
        let server = Server::bind("127.0.0.1", 0).await.unwrap();
        let addr = server.local_addr();
        let doc = document();
        let expected = doc.html().to_string();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_with_shutdown(doc, async {
            let _ = rx.await;
        }));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with(&expected));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
