//! Fake wolweb server used by tests across the crate.

use axum::{Json, Router, extract::Path, routing::get};

use super::types::{Device, DeviceListResponse, WakeResult};

/// Serve `router` on a random local port and return its base URL
pub(crate) async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A port that nothing is listening on
pub(crate) fn closed_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub(crate) fn device(name: &str, mac: &str) -> Device {
    Device {
        name: name.to_string(),
        mac: mac.to_string(),
    }
}

/// A wolweb that lists three devices and only wakes "host1"
pub(crate) fn wolweb_router() -> Router {
    Router::new()
        .route(
            "/wolweb/data/get",
            get(|| async {
                Json(DeviceListResponse {
                    devices: vec![
                        device("host1", "AA:BB:CC:DD:EE:01"),
                        device("nas", "AA:BB:CC:DD:EE:02"),
                        device("host1", "AA:BB:CC:DD:EE:03"),
                    ],
                })
            }),
        )
        .route(
            "/wolweb/wake/:name",
            get(|Path(name): Path<String>| async move {
                if name == "host1" {
                    Json(WakeResult {
                        success: true,
                        message: format!("woke {name}"),
                    })
                } else {
                    Json(WakeResult {
                        success: false,
                        message: "device not found".to_string(),
                    })
                }
            }),
        )
}
