//! Session handlers: language preference and farmer login
//!
//! GET/POST /session, POST /session/login, /session/logout, /session/language

use axum::{extract::State, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use krishi_common::context::{ProfileUpdate, UserContext, UserProfile};
use krishi_common::events::KrishiEvent;
use krishi_common::Language;

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Current session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub language: Language,
    pub authenticated: bool,
    pub user: Option<UserProfile>,
    pub display_name: Option<String>,
    pub languages: Vec<LanguageOption>,
}

impl SessionResponse {
    fn from_context(context: &UserContext) -> Self {
        Self {
            language: context.language(),
            authenticated: context.is_authenticated(),
            user: context.user().cloned(),
            display_name: context.user().map(UserProfile::display_name),
            languages: Language::ALL
                .iter()
                .map(|l| LanguageOption {
                    key: l.key(),
                    label: l.native_label(),
                })
                .collect(),
        }
    }
}

/// POST /session/login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Generated when absent
    pub id: Option<String>,
    pub mobile_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub village: String,
    /// Keeps the current session language when absent
    pub language: Option<Language>,
}

/// POST /session/language request
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

/// GET /session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let context = state.context.read().await;
    Json(SessionResponse::from_context(&context))
}

/// POST /session
///
/// Partial profile update; ignored when nobody is logged in
pub async fn update_session(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<SessionResponse>> {
    let mut context = state.context.write().await;
    context.update_profile(update).await?;
    Ok(Json(SessionResponse::from_context(&context)))
}

/// POST /session/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let mut context = state.context.write().await;
    let profile = UserProfile {
        id: request.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        mobile_number: request.mobile_number,
        first_name: request.first_name,
        last_name: request.last_name,
        state: request.state,
        district: request.district,
        taluka: request.taluka,
        village: request.village,
        language: request.language.unwrap_or(context.language()),
    };
    context.login(profile).await?;
    Ok(Json(SessionResponse::from_context(&context)))
}

/// POST /session/logout
pub async fn logout(State(state): State<AppState>) -> ApiResult<Json<SessionResponse>> {
    let mut context = state.context.write().await;
    context.logout().await?;
    Ok(Json(SessionResponse::from_context(&context)))
}

/// POST /session/language
///
/// Unlike content lookup, an unknown key is rejected here so a typo never
/// gets persisted.
pub async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let language = Language::from_key(&request.language)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown language: {}", request.language)))?;

    let mut context = state.context.write().await;
    if context.language() != language {
        context.set_language(language).await?;
        tracing::info!(language = %language, "Display language changed");
        state.event_bus.emit_lossy(KrishiEvent::LanguageChanged {
            language,
            timestamp: chrono::Utc::now(),
        });
    }
    Ok(Json(SessionResponse::from_context(&context)))
}

/// Build session routes
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session).post(update_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/session/language", post(set_language))
}
