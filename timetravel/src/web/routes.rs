//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use crate::acis::{AcisClient, FetchError};
use crate::config::Config;
use crate::domain::{BusArrival, StopCode};
use crate::error::Error;

use super::dto::*;
use super::state::AppState;

/// Body message for a missing or malformed stop code.
pub const INVALID_CODE_MESSAGE: &str = "NapTAN code must be an 8 digit number.";

/// Body message for any failure to get arrivals from the board.
pub const UNABLE_MESSAGE: &str = "unable to fetch buses.";

/// Create the application router.
///
/// Every request and its response status are logged at `info`.
pub fn create_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/check_buses", get(check_buses))
        .layer(trace)
        .with_state(state)
}

/// Serve the API on `config.bind` until Ctrl-C.
pub async fn serve(config: &Config) -> Result<(), Error> {
    let client = AcisClient::new(config)?;
    let app = create_router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "timetravel API is up");
    println!("timetravel API is up on http://{}", config.bind);
    println!("  GET /check_buses?naptan=<code>");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("timetravel API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("unable to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// Arrivals for one stop.
async fn check_buses(
    State(state): State<AppState>,
    Query(req): Query<CheckBusesRequest>,
) -> Result<Json<Vec<BusArrival>>, AppError> {
    let code = req.naptan.unwrap_or_default();
    let stop = StopCode::parse(&code).map_err(|_| AppError::InvalidStopCode { code })?;

    let arrivals = state.client.get_arrivals(&stop).await?;

    Ok(Json(arrivals))
}

/// Application error type.
///
/// Every failure is a 400 with a fixed message; the detail only goes to
/// the log.
#[derive(Debug)]
pub enum AppError {
    InvalidStopCode { code: String },
    Unavailable(FetchError),
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Unavailable(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::InvalidStopCode { code } => {
                warn!(code = %code, "rejected stop code");
                INVALID_CODE_MESSAGE
            }
            AppError::Unavailable(e) => {
                warn!("unable to fetch buses: {e}");
                UNABLE_MESSAGE
            }
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BOARD_HTML, spawn_board};
    use axum::http::header;
    use std::io;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    /// Serve the API against a stub board and return its address.
    async fn spawn_api(board_status: StatusCode, board_body: &'static str) -> SocketAddr {
        let board = spawn_board(board_status, board_body).await;
        let config = Config::default().with_base_url(board.url());
        let app = create_router(AppState::new(AcisClient::new(&config).unwrap()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn get(addr: SocketAddr, query: &str) -> reqwest::Response {
        reqwest::get(format!("http://{addr}/check_buses{query}"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn returns_arrivals_as_json() {
        let addr = spawn_api(StatusCode::OK, BOARD_HTML).await;

        let response = get(addr, "?naptan=22001688").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert_eq!(content_type, "application/json");

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!([
                {"bus": 12, "to": "TownCentre", "time": "Due", "double_decker": false},
                {"bus": 5, "to": "Bus Station", "time": "9", "double_decker": true},
                {"bus": 36, "to": "Harrogate", "time": "14:32", "double_decker": false},
            ])
        );
    }

    #[tokio::test]
    async fn short_code_is_rejected() {
        let addr = spawn_api(StatusCode::OK, BOARD_HTML).await;

        let response = get(addr, "?naptan=1234567").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text().await.unwrap(),
            r#"{"error":"NapTAN code must be an 8 digit number."}"#
        );
    }

    #[tokio::test]
    async fn letters_and_missing_code_are_rejected() {
        let addr = spawn_api(StatusCode::OK, BOARD_HTML).await;

        for query in ["?naptan=2200168A", "?naptan=", ""] {
            let response = get(addr, query).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "query {query:?}");

            let body: ErrorResponse = response.json().await.unwrap();
            assert_eq!(body.error, INVALID_CODE_MESSAGE);
        }
    }

    #[tokio::test]
    async fn upstream_failure_is_unable_to_fetch() {
        let addr = spawn_api(StatusCode::SERVICE_UNAVAILABLE, "").await;

        let response = get(addr, "?naptan=22001688").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text().await.unwrap(),
            r#"{"error":"unable to fetch buses."}"#
        );
    }

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn requests_are_logged_at_info() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        // The test runtime is single threaded, so the server task logs here too
        let _guard = tracing::subscriber::set_default(subscriber);

        let addr = spawn_api(StatusCode::OK, BOARD_HTML).await;
        let response = get(addr, "?naptan=22001688").await;
        assert_eq!(response.status(), StatusCode::OK);

        let text = logs.text();
        assert!(text.contains("/check_buses?naptan=22001688"), "logs: {text}");
        assert!(text.contains("status=200"), "logs: {text}");
    }

    #[tokio::test]
    async fn unparseable_page_is_unable_to_fetch() {
        let addr = spawn_api(StatusCode::OK, "<p>maintenance</p>").await;

        let response = get(addr, "?naptan=22001688").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json().await.unwrap();
        assert_eq!(body.error, UNABLE_MESSAGE);
    }
}
