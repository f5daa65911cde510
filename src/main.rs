use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use serde_json::json;

use crowd_predictor::log_store::PredictionLog;
use crowd_predictor::{
    artifacts, predictor, train_names, Config, PipelineError, PredictionResult, Predictor,
};

// ---------- Request types ----------

#[derive(Deserialize, Debug)]
struct PredictQuery {
    source: String,
    destination: String,
    time: String,
}

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    predictor: Arc<Predictor>,
    log: Arc<PredictionLog>,
}

// ---------- Handlers ----------

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_form(
        state.predictor.stations(),
        state.predictor.times(),
    ))
}

async fn predict_form(
    State(state): State<AppState>,
    Form(query): Form<PredictQuery>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match run_predict(&state, &query) {
        Ok(result) => Ok(Html(render_result(&result))),
        Err(PipelineError::UnknownCategory { field, value }) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_error(&format!("Unknown {}: {}", field, value))),
        )),
        Err(e) => {
            tracing::error!("prediction failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("Prediction failed, try again later.")),
            ))
        }
    }
}

async fn predict_api(
    State(state): State<AppState>,
    Json(query): Json<PredictQuery>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<serde_json::Value>)> {
    match run_predict(&state, &query) {
        Ok(result) => Ok(Json(result)),
        Err(e @ PipelineError::UnknownCategory { .. }) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )),
        Err(e) => {
            tracing::error!("prediction failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}

async fn stations_api(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "stations": state.predictor.stations(),
        "times": state.predictor.times(),
    }))
}

/// Shared path for both frontends; the predict-then-log composition lives
/// in the library so nothing is logged when the prediction itself fails.
fn run_predict(
    state: &AppState,
    query: &PredictQuery,
) -> Result<PredictionResult, PipelineError> {
    let result = predictor::predict_and_log(
        &state.predictor,
        &state.log,
        &query.source,
        &query.destination,
        &query.time,
    )?;
    tracing::info!(
        "predicted crowd={} for {} -> {} ({})",
        result.crowd,
        query.source,
        query.destination,
        query.time
    );
    Ok(result)
}

// ---------- HTML rendering (presentation glue) ----------

fn render_form(stations: &[String], times: &[String]) -> String {
    let station_opts: String = stations
        .iter()
        .map(|s| format!("<option value=\"{s}\">{s}</option>"))
        .collect();
    let time_opts: String = times
        .iter()
        .map(|t| format!("<option value=\"{t}\">{t}</option>"))
        .collect();
    format!(
        "<!doctype html><html><head><title>Train Crowd Predictor</title></head><body>\
         <h1>Train Crowd Predictor</h1>\
         <form action=\"/predict\" method=\"post\">\
         <label>From <select name=\"source\">{station_opts}</select></label> \
         <label>To <select name=\"destination\">{station_opts}</select></label> \
         <label>When <select name=\"time\">{time_opts}</select></label> \
         <button type=\"submit\">Predict</button>\
         </form></body></html>"
    )
}

fn render_result(r: &PredictionResult) -> String {
    format!(
        "<!doctype html><html><head><title>Prediction</title></head><body>\
         <h1>Prediction</h1><ul>\
         <li>Best train: {}</li>\
         <li>Departure: {}</li>\
         <li>Arrival: {}</li>\
         <li>Crowd level: {}</li>\
         <li>Expected standing time: {}</li>\
         <li>Seat likely available after: {}</li>\
         <li>Alternate train: {}</li>\
         </ul><a href=\"/\">Back</a></body></html>",
        train_names::display(&r.train),
        r.departure,
        r.arrival,
        r.crowd,
        r.standing_time,
        r.seat_available_after,
        train_names::display(&r.alternate_train)
    )
}

fn render_error(message: &str) -> String {
    format!(
        "<!doctype html><html><head><title>Prediction</title></head><body>\
         <p>{message}</p><a href=\"/\">Back</a></body></html>"
    )
}

// ---------- Entry point ----------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let predictor = artifacts::build_or_load(&config)?;
    let log = PredictionLog::open(&config.log_path)?;

    let state = AppState {
        predictor: Arc::new(predictor),
        log: Arc::new(log),
    };

    let app = Router::new()
        .route("/", get(home))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_api))
        .route("/api/stations", get(stations_api))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
