use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use surfplot::config::ServerConfig;
use surfplot::preview::{self, Camera};
use surfplot::render::LatestFigure;
use surfplot::slider::Slider;
use surfplot::{Equation, Error, Figure, ParamName, Params, Session};

const PREVIEW_W: usize = 640;
const PREVIEW_H: usize = 480;

/// The page-scoped session. The lock queues waiters FIFO, so updates apply
/// one at a time in arrival order.
type Shared = Arc<Mutex<Session<LatestFigure>>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

#[derive(Serialize)]
struct EquationInfo {
    name: Equation,
    params: &'static [ParamName],
}

#[derive(Serialize)]
struct PageState {
    equation: Equation,
    sliders: Vec<Slider>,
    figure: Option<Figure>,
}

#[derive(Deserialize)]
struct SelectRequest {
    equation: String,
}

#[derive(Deserialize)]
struct SliderRequest {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct PreviewResponse {
    data_url: String,
}

fn reject(e: Error) -> (StatusCode, String) {
    let status = match e {
        Error::UnknownEquation(_) | Error::UnknownParam(_) | Error::Unbound { .. } => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

fn internal(msg: impl ToString) -> (StatusCode, String) {
    let msg = msg.to_string();
    error!("{msg}");
    (StatusCode::INTERNAL_SERVER_ERROR, msg)
}

fn page_state(session: &Session<LatestFigure>) -> PageState {
    PageState {
        equation: session.equation(),
        sliders: session.sliders().to_vec(),
        figure: session.renderer().figure().cloned(),
    }
}

/// Take the session lock, then run `f` on the blocking pool while holding it.
async fn with_session<T, F>(shared: Shared, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Session<LatestFigure>) -> Result<T, Error> + Send + 'static,
{
    let mut session = shared.lock_owned().await;
    tokio::task::spawn_blocking(move || f(&mut session).map(Json).map_err(reject))
        .await
        .map_err(internal)?
}

async fn equations_handler() -> Json<Vec<EquationInfo>> {
    Json(
        Equation::ALL
            .into_iter()
            .map(|name| EquationInfo {
                name,
                params: name.active_params(),
            })
            .collect(),
    )
}

async fn state_handler(State(shared): State<Shared>) -> ApiResult<PageState> {
    with_session(shared, |s| Ok(page_state(s))).await
}

async fn select_handler(
    State(shared): State<Shared>,
    Json(req): Json<SelectRequest>,
) -> ApiResult<PageState> {
    with_session(shared, move |s| {
        let equation: Equation = req.equation.parse()?;
        s.select_equation(equation)?;
        Ok(page_state(s))
    })
    .await
}

async fn slider_handler(
    State(shared): State<Shared>,
    Json(req): Json<SliderRequest>,
) -> ApiResult<PageState> {
    with_session(shared, move |s| {
        let name: ParamName = req.name.parse()?;
        s.slider_input(name, &req.value)?;
        Ok(page_state(s))
    })
    .await
}

async fn preview_handler(State(shared): State<Shared>) -> ApiResult<PreviewResponse> {
    with_session(shared, |s| {
        let rgba = match s.renderer().figure() {
            Some(figure) => preview::rasterize(figure.cloud(), Camera::default(), PREVIEW_W, PREVIEW_H),
            None => preview::rasterize(s.figure().cloud(), Camera::default(), PREVIEW_W, PREVIEW_H),
        };
        let png = preview::encode_png(&rgba, PREVIEW_W, PREVIEW_H)?;
        let b64 = base64::engine::general_purpose::STANDARD.encode(&png);
        Ok(PreviewResponse {
            data_url: format!("data:image/png;base64,{}", b64),
        })
    })
    .await
}

fn app(shared: Shared, frontend_dir: &Path) -> Router {
    Router::new()
        .route("/api/equations", get(equations_handler))
        .route("/api/state", get(state_handler))
        .route("/api/equation", post(select_handler))
        .route("/api/slider", post(slider_handler))
        .route("/api/preview", get(preview_handler))
        .with_state(shared)
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let session = Session::new(Equation::default(), Params::default(), LatestFigure::default())
        .context("initial draw failed")?;
    let shared: Shared = Arc::new(Mutex::new(session));

    let app = app(shared, &config.frontend_dir);

    info!(
        "surfplot server at http://{} (frontend: {})",
        config.addr,
        config.frontend_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
