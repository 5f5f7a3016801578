//! A throwaway backend on an ephemeral port for exercising the blocking
//! client end to end.

use std::sync::mpsc;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderMap;
use carematch_api::ApiClient;

pub const TOKEN: &str = "test-token";

/// Serve `router` on a background runtime and return a client pointed at it.
pub fn serve(router: Router) -> ApiClient {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    ApiClient::new(&format!("http://{addr}/"), Duration::from_secs(5))
}

/// True when the request carries `Authorization: Bearer test-token`.
pub fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}
