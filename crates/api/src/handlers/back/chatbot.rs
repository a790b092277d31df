//! Gemini-backed assistant for the owner app.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use tupermiso_registry::gemini::build_prompt;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub mensaje: String,
    pub contexto_adicional: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub respuesta: String,
}

/// POST /chatbot/gemini
pub async fn chatbot_gemini(
    State(state): State<AppState>,
    Json(input): Json<ChatbotRequest>,
) -> AppResult<Json<ChatbotResponse>> {
    let mensaje = input.mensaje.trim();
    if mensaje.is_empty() {
        return Err(AppError::BadRequest(
            "El campo 'mensaje' es obligatorio.".into(),
        ));
    }

    let prompt = build_prompt(mensaje, input.contexto_adicional.as_deref());
    let respuesta = state
        .gemini()?
        .generate(&prompt)
        .await
        .map_err(|e| AppError::InternalError(format!("Gemini request failed: {e}")))?;

    Ok(Json(ChatbotResponse { respuesta }))
}
