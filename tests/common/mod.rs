use axum::Router;

/// Serve a mock GitHub API from a background task on an ephemeral port.
///
/// The base URL is handed to `make_router` before the server starts so
/// handlers can emit absolute pagination links, and returned so tests can
/// point a client at it.
pub async fn serve<F>(make_router: F) -> String
where
    F: FnOnce(String) -> Router,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API server");
    let base_url = format!(
        "http://{}",
        listener.local_addr().expect("Failed to read local addr")
    );

    let router = make_router(base_url.clone());
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed");
    });

    base_url
}
