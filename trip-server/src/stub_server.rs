//! Local HTTP upstreams with canned answers, for client tests.

use axum::Router;
use axum::http::StatusCode;

/// Serve `body` with `status` for every request on an ephemeral port.
///
/// Returns the base URL. The server runs until the test's runtime shuts
/// down.
pub async fn serve_fixed(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move { (status, body) });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
