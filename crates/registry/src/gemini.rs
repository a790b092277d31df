//! Gemini `generateContent` client for the TU PERMISO chatbot.

use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::error::RegistryError;

/// Fixed context prepended to every chatbot prompt.
pub const SYSTEM_CONTEXT: &str = "\
Eres un asistente virtual especializado en el sistema TU PERMISO, una plataforma digital \
para la gestión de permisos de circulación vehicular en Chile a nivel nacional.

Información del sistema:
- TU PERMISO permite a los propietarios ver sus documentos vehiculares (Permiso de \
Circulación, SOAP, Revisión Técnica), pagar el permiso de circulación en una o dos cuotas, \
revisar su historial de pagos y verificar multas de tránsito y RPI.
- El acceso es con RUT y Clave Única. El pago se realiza a través de WebPay con tarjetas \
de crédito, débito o prepago.
- Desde 2025 el permiso de circulación se paga exclusivamente en TU PERMISO y es digital.
- Para pagar el permiso se requiere tener SOAP y Revisión Técnica vigentes, no tener multas \
de tránsito ni RPI impagas y que el vehículo no tenga encargo por robo.
- Secciones del portal: Inicio, Preguntas Frecuentes, Mis Documentos, Ver Vehículos, \
Validaciones de Pago, Formulario de Pago, Pago SOAP e Historial de Pagos.
- Estados de un vehículo: \"Al día\", \"Apto para pagar\" y \"Presenta problemas\".

Instrucciones para el asistente:
- Responde de forma clara y concisa, en español de Chile, con un tono formal pero accesible.
- Si el usuario no sabe cómo usar la plataforma, guíalo paso a paso.
- Si la pregunta está fuera del ámbito de TU PERMISO, indícalo amablemente.
- Formatea la respuesta en HTML usando etiquetas como <p>, <ul>, <li>, <b> e <i>.
";

/// Assemble the prompt sent to the model.
pub fn build_prompt(mensaje: &str, contexto_adicional: Option<&str>) -> String {
    let mut prompt = format!("{SYSTEM_CONTEXT}\n\n");
    if let Some(contexto) = contexto_adicional.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("Información adicional: {contexto}\n\n"));
    }
    prompt.push_str(&format!("Usuario: {mensaje}\nAsistente:"));
    prompt
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send `prompt` and return the first candidate's text, trimmed.
    pub async fn generate(&self, prompt: &str) -> Result<String, RegistryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RegistryError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(RegistryError::EmptyCompletion);
        }
        Ok(text.to_string())
    }
}
