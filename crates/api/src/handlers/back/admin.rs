//! Dashboard login and metrics.
//!
//! Metrics are computed on demand from the audit and payment logs; every
//! request re-runs its aggregate queries over the requested window.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use tupermiso_core::error::CoreError;
use tupermiso_core::metrics::{percentage, MetricsScope, MetricsWindow, PeriodType};
use tupermiso_core::rut::Rut;
use tupermiso_core::types::Date;
use tupermiso_db::repositories::{MetricsRepo, UsuarioAdminRepo};
use tupermiso_db::DbPool;

use crate::auth::jwt::ROLE_ADMIN;
use crate::auth::password::{is_acceptable_length, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::TokenResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginAdminRequest {
    #[serde(default)]
    pub rut: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub rut: String,
    pub nombre: String,
    pub email: String,
}

/// Body of `POST /calcular-metricas`. Fields are optional so a missing one
/// is reported by name.
#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub scope: Option<String>,
    pub period_type: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: MetricsData,
}

#[derive(Debug, Serialize)]
pub struct MetricsData {
    pub kpi: Value,
    pub charts: Value,
    pub tables: Value,
    pub scope: MetricsScope,
    pub period_type: PeriodType,
    pub from_date: Date,
    pub to_date: Date,
}

// ---------------------------------------------------------------------------
// POST /login_admin
// ---------------------------------------------------------------------------

pub async fn login_admin(
    State(state): State<AppState>,
    Json(input): Json<LoginAdminRequest>,
) -> AppResult<Json<TokenResponse<AdminInfo>>> {
    if !is_acceptable_length(&input.password) {
        return Err(AppError::BadRequest("Contraseña inválida".into()));
    }

    let rejected =
        || AppError::Core(CoreError::Unauthorized("Usuario o contraseña incorrectos".into()));

    let rut = Rut::parse(&input.rut).map_err(|_| rejected())?;
    let admin = UsuarioAdminRepo::find_by_rut(&state.pool, &rut.to_string())
        .await?
        .ok_or_else(rejected)?;

    let ok = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Stored hash is unreadable: {e}")))?;
    if !ok {
        tracing::info!(rut = %rut, "Admin login rejected");
        return Err(rejected());
    }

    let jwt = state.jwt()?;
    let token = jwt
        .issue(&admin.rut, ROLE_ADMIN)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(rut = %admin.rut, "Admin login");
    Ok(Json(TokenResponse::bearer(
        token,
        AdminInfo {
            rut: admin.rut,
            nombre: admin.nombre,
            email: admin.email,
        },
        jwt.expires_in_secs(),
    )))
}

// ---------------------------------------------------------------------------
// POST /calcular-metricas
// ---------------------------------------------------------------------------

pub async fn calcular_metricas(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<MetricsRequest>,
) -> AppResult<Json<MetricsResponse>> {
    let window = MetricsWindow::new(
        required(input.scope.as_deref(), "scope")?,
        required(input.period_type.as_deref(), "period_type")?,
        required(input.from_date.as_deref(), "from_date")?,
        required(input.to_date.as_deref(), "to_date")?,
    )?;

    tracing::debug!(admin = %admin.rut, scope = %window.scope, "Computing metrics");
    compute(&state.pool, window).await.map(Json)
}

/// POST /calcular-metricas/{scope}/{period_type}/{from_date}/{to_date}
pub async fn calcular_metricas_path(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path((scope, period_type, from_date, to_date)): Path<(String, String, String, String)>,
) -> AppResult<Json<MetricsResponse>> {
    let window = MetricsWindow::new(&scope, &period_type, &from_date, &to_date)?;

    tracing::debug!(admin = %admin.rut, scope = %window.scope, "Computing metrics");
    compute(&state.pool, window).await.map(Json)
}

fn required<'a>(value: Option<&'a str>, name: &str) -> AppResult<&'a str> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| {
        AppError::BadRequest(format!("Parámetro requerido '{name}' no encontrado"))
    })
}

async fn compute(pool: &DbPool, window: MetricsWindow) -> AppResult<MetricsResponse> {
    let (kpi, charts, tables) = match window.scope {
        MetricsScope::Fiscalizacion => fiscalizacion(pool, &window).await?,
        MetricsScope::Consultas => consultas(pool, &window).await?,
        MetricsScope::Permisos => permisos(pool, &window).await?,
    };

    Ok(MetricsResponse {
        status: "success",
        message: "Métricas calculadas correctamente",
        data: MetricsData {
            kpi,
            charts,
            tables,
            scope: window.scope,
            period_type: window.period,
            from_date: window.from,
            to_date: window.to,
        },
    })
}

type Sections = (Value, Value, Value);

async fn fiscalizacion(pool: &DbPool, window: &MetricsWindow) -> AppResult<Sections> {
    let totals = MetricsRepo::fiscalizacion_totals(pool, window).await?;
    let por_condicion = MetricsRepo::fiscalizacion_por_condicion(pool, window).await?;
    let miles = MetricsRepo::fiscalizacion_miles(pool, window).await?;
    let recientes = MetricsRepo::fiscalizaciones_recientes(pool, window).await?;

    let al_dia_pct = percentage(totals.al_dia, totals.total);
    let problemas_pct = percentage(totals.con_problemas, totals.total);

    Ok((
        json!({
            "total_fiscalizaciones": totals.total,
            "documentos_al_dia_pct": al_dia_pct,
            "vencidos_o_encargo_pct": problemas_pct,
        }),
        json!({
            "vehiculos_por_condicion": por_condicion,
            "miles_fiscalizados": miles,
            "pie_documentos": { "al_dia": al_dia_pct, "con_problemas": problemas_pct },
        }),
        json!({ "vehiculos": recientes }),
    ))
}

async fn consultas(pool: &DbPool, window: &MetricsWindow) -> AppResult<Sections> {
    let totals = MetricsRepo::consultas_totals(pool, window).await?;
    let por_periodo = MetricsRepo::consultas_por_periodo(pool, window).await?;
    let recientes = MetricsRepo::consultas_recientes(pool, window).await?;

    let consultas: Vec<Value> = por_periodo
        .iter()
        .map(|p| json!({ "periodo": p.periodo, "consultas": p.consultas }))
        .collect();
    let usuarios: Vec<Value> = por_periodo
        .iter()
        .map(|p| json!({ "periodo": p.periodo, "usuarios_unicos": p.usuarios_unicos }))
        .collect();

    Ok((
        json!({
            "total_consultas": totals.total_consultas,
            "usuarios_unicos_acumulados": totals.usuarios_unicos,
        }),
        json!({
            "consultas_por_periodo": consultas,
            "usuarios_unicos_por_periodo": usuarios,
        }),
        json!({ "ultimas_consultas": recientes }),
    ))
}

async fn permisos(pool: &DbPool, window: &MetricsWindow) -> AppResult<Sections> {
    let totals = MetricsRepo::permisos_totals(pool, window).await?;
    let miles = MetricsRepo::permisos_miles(pool, window).await?;
    let recientes = MetricsRepo::permisos_recientes(pool, window).await?;

    Ok((
        json!({
            "total_permisos_emitidos": totals.total_permisos,
            "recaudacion_total_clp": totals.recaudacion_total,
            "valor_promedio_clp": totals.valor_promedio,
        }),
        json!({ "emisiones_por_periodo_miles": miles }),
        json!({ "permisos": recientes }),
    ))
}
