//! Test-only stub HTTP server with canned JSON responses.
//!
//! Serves one response per connection and closes it, which is all the
//! client's GET-and-parse cycle needs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) struct StubRoute {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl StubRoute {
    pub fn ok(path: &'static str, body: String) -> Self {
        Self {
            path,
            status: 200,
            body,
        }
    }
}

pub(crate) struct StubServer {
    pub base_url: String,
    /// Total requests received, across all routes.
    pub hits: Arc<AtomicUsize>,
}

pub(crate) async fn spawn_stub(routes: Vec<StubRoute>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let task_hits = hits.clone();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            let hits = task_hits.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                hits.fetch_add(1, Ordering::SeqCst);

                let (status, body) = routes
                    .iter()
                    .find(|r| r.path == path)
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or((
                        404,
                        r#"{"success": false, "error": "not found"}"#.to_string(),
                    ));
                let reason = if status == 200 { "OK" } else { "ERROR" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubServer {
        base_url: format!("http://{}", addr),
        hits,
    }
}

pub(crate) fn prediction_body() -> String {
    json!({
        "success": true,
        "prediction": {
            "status": "NEXT ROUND",
            "draw_number": 3,
            "target_time": "13:30",
            "predicted_number": 7,
            "confidence": 21.5,
            "method": "Hot Number Analysis",
            "time_to_next": "42m"
        },
        "timestamp": "2025-11-02T12:48:00.000000"
    })
    .to_string()
}

pub(crate) fn number_wise_body() -> String {
    json!({
        "success": true,
        "number_wise_predictions": {
            "probabilities": {
                "0": 5.0, "1": 22.0, "2": 9.0, "3": 8.0, "4": 6.0,
                "5": 12.0, "6": 7.0, "7": 16.0, "8": 10.0, "9": 5.0
            },
            "sorted_predictions": [
                [1, 22.0], [7, 16.0], [5, 12.0], [8, 10.0], [2, 9.0],
                [3, 8.0], [6, 7.0], [4, 6.0], [0, 5.0], [9, 5.0]
            ],
            "top_prediction": 1,
            "top_probability": 22.0
        }
    })
    .to_string()
}

pub(crate) fn statistics_body(total_draws: u64) -> String {
    json!({
        "success": true,
        "statistics": {
            "total_draws_analyzed": total_draws,
            "most_frequent_number": 7,
            "least_frequent_number": 0,
            "recent_trend": [3, 7, 1, 7, 9],
            "frequency_distribution": {"0": 4, "7": 31}
        }
    })
    .to_string()
}

/// Routes for the three data endpoints, all succeeding.
pub(crate) fn ok_routes() -> Vec<StubRoute> {
    vec![
        StubRoute::ok("/api/current-prediction", prediction_body()),
        StubRoute::ok("/api/number-wise-predictions", number_wise_body()),
        StubRoute::ok("/api/statistics", statistics_body(220)),
    ]
}
