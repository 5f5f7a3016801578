use std::sync::mpsc;
use std::time::Duration;

use axum::Router;
use carematch_api::ApiClient;

/// Serve `router` on an ephemeral port from a background runtime.
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
    ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5))
}
