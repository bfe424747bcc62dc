use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{
    error::ApiError,
    model::{MODEL_VERSION, Prediction},
    state::AppState,
    utils::{check_batch_text, extract_text, extract_texts, parse_body},
};

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    pub input_text: String,
    pub model_version: &'static str,
}

/// One entry per submitted text, in submission order. An element that fails
/// its own checks becomes an error entry without failing the rest of the
/// batch.
#[derive(Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    Scored {
        index: usize,
        prediction: Prediction,
        input_text: String,
    },
    Failed {
        index: usize,
        error: String,
    },
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchResult>,
    pub total_texts: usize,
    pub model_version: &'static str,
}

pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = parse_body(&body)?;
    let text = extract_text(&payload)?;

    let prediction = state.model.predict(text);

    info!(
        sentiment = %prediction.sentiment,
        confidence = prediction.confidence,
        "Prediction made"
    );

    Ok(Json(PredictResponse {
        prediction,
        input_text: text.to_string(),
        model_version: MODEL_VERSION,
    }))
}

pub async fn batch_predict_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = parse_body(&body)?;
    let texts = extract_texts(&payload)?;

    let results = texts
        .iter()
        .enumerate()
        .map(|(index, value)| match check_batch_text(value) {
            Ok(text) => BatchResult::Scored {
                index,
                prediction: state.model.predict(text),
                input_text: text.to_string(),
            },
            Err(err) => BatchResult::Failed {
                index,
                error: err.to_string(),
            },
        })
        .collect();

    info!(total_texts = texts.len(), "Batch prediction made");

    Ok(Json(BatchResponse {
        results,
        total_texts: texts.len(),
        model_version: MODEL_VERSION,
    }))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "ml-sentiment-analysis",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment
    }))
}

pub async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "service": "ML Sentiment Analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "environment": state.config.environment,
        "endpoints": {
            "health": "/health",
            "predict": "/predict",
            "batch_predict": "/batch-predict",
            "metrics": "/metrics"
        },
        "documentation": {
            "predict": {
                "method": "POST",
                "body": { "text": "string" },
                "description": "Predict sentiment of a single text"
            },
            "batch_predict": {
                "method": "POST",
                "body": { "texts": ["string1", "string2"] },
                "description": "Predict sentiment of multiple texts"
            }
        }
    }))
}

pub async fn metrics_handler() -> impl IntoResponse {
    // Static placeholders; no counters are tracked in-process.
    Json(json!({
        "model_info": {
            "name": "Sentiment Analysis Model",
            "version": MODEL_VERSION,
            "type": "keyword-based",
            "supported_languages": ["en"]
        },
        "performance": {
            "total_predictions": 0,
            "average_confidence": 0.0,
            "accuracy": 0.0
        },
        "endpoints": {
            "predict": "/predict",
            "batch_predict": "/batch-predict",
            "health": "/health"
        }
    }))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
