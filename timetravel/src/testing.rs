//! Test helpers: an in-process stand-in for the arrivals board.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::sync::Mutex;

/// A board page with a heading row and three buses.
pub const BOARD_HTML: &str = r#"<html><body>
<table>
  <tr><th>Service</th><th>To</th><th>Time</th><th>Low Floor</th></tr>
  <tr><td>12</td><td>TownCentre</td><td>Due</td><td>Yes</td></tr>
  <tr><td>5</td><td>Bus Station</td><td>9</td><td>No</td></tr>
  <tr><td>36</td><td>Harrogate</td><td>14:32</td><td>Yes</td></tr>
</table>
</body></html>"#;

/// What the stub board saw of the last request.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub stop_ref: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct BoardState {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Option<SeenRequest>>>,
}

/// A running stub board.
pub struct StubBoard {
    addr: SocketAddr,
    seen: Arc<Mutex<Option<SeenRequest>>>,
}

impl StubBoard {
    /// URL to use as the client's base URL.
    pub fn url(&self) -> String {
        format!("http://{}/Text/WebDisplay.aspx", self.addr)
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().await.clone()
    }
}

async fn board_page(
    State(state): State<BoardState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    *state.seen.lock().await = Some(SeenRequest {
        stop_ref: query.get("stopRef").cloned(),
        user_agent,
    });

    (state.status, Html(state.body))
}

/// Serve `body` with `status` on an ephemeral local port.
pub async fn spawn_board(status: StatusCode, body: &'static str) -> StubBoard {
    let seen = Arc::new(Mutex::new(None));
    let state = BoardState {
        status,
        body,
        seen: seen.clone(),
    };

    let app = Router::new()
        .route("/Text/WebDisplay.aspx", get(board_page))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBoard { addr, seen }
}
