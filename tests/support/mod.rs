//! テスト用の解析サービス
//!
//! `/uploadfile` で multipart を受け取り、受信内容を記録して固定レスポンスを返す。

#![allow(dead_code)]

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// 受信したパート
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// 受信したリクエスト（パートの一覧）
pub type Received = Arc<Mutex<Vec<Vec<ReceivedPart>>>>;

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    received: Received,
}

async fn handle_upload(State(state): State<ServerState>, mut multipart: Multipart) -> (StatusCode, String) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            size,
        });
    }
    state.received.lock().unwrap().push(parts);

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    (state.status, state.body.clone())
}

/// サーバーを起動してベースURLと受信記録を返す
pub async fn spawn_parser_server(status: u16, body: &str) -> (String, Received) {
    spawn_server(status, body, None).await
}

/// 応答を遅らせるサーバー（タイムアウト確認用）
pub async fn spawn_slow_server(delay: Duration) -> (String, Received) {
    spawn_server(200, r#"{"name":"late"}"#, Some(delay)).await
}

async fn spawn_server(status: u16, body: &str, delay: Option<Duration>) -> (String, Received) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        status: StatusCode::from_u16(status).expect("status"),
        body: body.to_string(),
        delay,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/uploadfile", post(handle_upload))
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), received)
}
