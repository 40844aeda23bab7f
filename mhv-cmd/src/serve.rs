//! HTTP server for the dashboard.
//!
//! Each request rebuilds the page from scratch, mirroring a dashboard script
//! that re-runs top to bottom; only the sampled dataset comes from the
//! process-wide memo cache.
//!
//! ## Endpoints
//!
//! - `GET /` - the dashboard page
//! - `GET /api/sample` - sampled listings as JSON
//! - `GET /api/charts/:name` - one Vega-Lite spec
//! - `GET /health` - health check

use crate::DataArgs;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{info, warn};
use mhv_dashboard::charts::housing_data;
use mhv_dashboard::page::render_html;
use mhv_dashboard::{ChartName, Dashboard};
use mhv_data::{get_data, Dataset, LoadRequest};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServeState {
    request: Arc<LoadRequest>,
}

impl ServeState {
    pub fn new(request: LoadRequest) -> Self {
        Self {
            request: Arc::new(request),
        }
    }
}

/// Error response: status plus a plain-text message.
#[derive(Debug)]
pub struct ServeError(StatusCode, String);

impl ServeError {
    fn internal(e: impl std::fmt::Display) -> Self {
        ServeError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            warn!("request failed: {}", self.1);
        }
        (self.0, self.1).into_response()
    }
}

/// Fetch the memoized sample off the async runtime (first call reads the CSV).
async fn dataset(state: &ServeState) -> Result<Arc<Dataset>, ServeError> {
    let request = Arc::clone(&state.request);
    tokio::task::spawn_blocking(move || get_data(&request))
        .await
        .map_err(ServeError::internal)?
        .map_err(ServeError::internal)
}

async fn index(State(state): State<ServeState>) -> Result<Html<String>, ServeError> {
    let dataset = dataset(&state).await?;
    let dashboard = Dashboard::build(&dataset).map_err(ServeError::internal)?;
    Ok(Html(render_html(&dashboard)))
}

async fn sample(State(state): State<ServeState>) -> Result<Response, ServeError> {
    let dataset = dataset(&state).await?;
    Ok(Json(dataset.rows()).into_response())
}

async fn chart(
    State(state): State<ServeState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ServeError> {
    let chart: ChartName = name
        .parse()
        .map_err(|e: String| ServeError(StatusCode::NOT_FOUND, e))?;
    let dataset = dataset(&state).await?;
    let data = housing_data(&dataset).map_err(ServeError::internal)?;
    let spec = chart.build(data).map_err(ServeError::internal)?;
    Ok(Json(spec))
}

async fn health() -> &'static str {
    "ok"
}

pub fn build_router(state: ServeState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/sample", get(sample))
        .route("/api/charts/:name", get(chart))
        .route("/health", get(health))
        .with_state(state)
}

/// Load the sample once up front so a bad path or sample size fails at
/// startup, then serve until the process is stopped.
pub async fn run_serve(args: &DataArgs, addr: SocketAddr) -> anyhow::Result<()> {
    let request = args.request();
    let preload = request.clone();
    let dataset = tokio::task::spawn_blocking(move || get_data(&preload)).await??;
    info!("Loaded {} sampled listings from {}", dataset.len(), args.data.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving dashboard on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(ServeState::new(request))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use mhv_data::DataSource;
    use std::io::Write;
    use tower::ServiceExt;

    fn fixture() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Price,Landsize,Distance,Type,Regionname").unwrap();
        for i in 0..40 {
            writeln!(
                file,
                "{},{},{},{},South-Eastern Metropolitan",
                700_000 + i * 5_000,
                150 + i * 10,
                5.0 + i as f64 / 4.0,
                ["h", "u", "t"][i % 3]
            )
            .unwrap();
        }
        // Over the price threshold, never sampled
        writeln!(file, "4500000,900,8.0,h,Southern Metropolitan").unwrap();
        file.flush().unwrap();
        file
    }

    fn router(path: &std::path::Path, n_sample: usize) -> Router {
        let request = LoadRequest::new(DataSource::file(path))
            .with_n_sample(n_sample)
            .with_seed(Some(11));
        build_router(ServeState::new(request))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let input = fixture();
        let (status, body) = get_body(router(input.path(), 10), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let input = fixture();
        let (status, body) = get_body(router(input.path(), 20), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Dynamic visualization in plots</h2>"));
    }

    #[tokio::test]
    async fn test_sample_endpoint_respects_filter() {
        let input = fixture();
        let (status, body) = get_body(router(input.path(), 40), "/api/sample").await;
        assert_eq!(status, StatusCode::OK);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(rows.len(), 40);
        assert!(rows.iter().all(|r| r["Price"].as_f64().unwrap() < 3_000_000.0));
    }

    #[tokio::test]
    async fn test_chart_endpoint() {
        let input = fixture();
        let (status, body) = get_body(router(input.path(), 15), "/api/charts/static-scatter").await;
        assert_eq!(status, StatusCode::OK);
        let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(spec["mark"]["type"], "circle");
    }

    #[tokio::test]
    async fn test_unknown_chart_is_404() {
        let input = fixture();
        let (status, _) = get_body(router(input.path(), 15), "/api/charts/pie").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_zero_sample_renders_empty_charts() {
        let input = fixture();
        let app = router(input.path(), 0);
        let (status, body) = get_body(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("vegaEmbed('#static-scatter'"));

        let (status, body) = get_body(app, "/api/charts/brush-scatter-hist").await;
        assert_eq!(status, StatusCode::OK);
        let spec: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(spec["datasets"]["melb_housing"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_oversized_sample_is_500() {
        let input = fixture();
        let (status, body) = get_body(router(input.path(), 41), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("only 40 rows"));
    }
}
