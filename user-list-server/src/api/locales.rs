use crate::errors::ApiError;
use crate::openapi::LOCALES_TAG;
use crate::state::AppState;
use axum::{extract::Path, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use user_list::Locale;
use utoipa::ToSchema;

/// A supported display language
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub(crate) struct LocaleSummary {
    /// Language code, e.g. "tr"
    locale: String,
    /// Language name in that language
    title: String,
}

/// Display labels for one language
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocaleLabels {
    locale: String,
    title: String,
    users: String,
    next_page: String,
    previous_page: String,
}

impl From<Locale> for LocaleLabels {
    fn from(locale: Locale) -> Self {
        let labels = locale.labels();
        Self {
            locale: locale.code().to_string(),
            title: locale.title().to_string(),
            users: labels.users.to_string(),
            next_page: labels.next_page.to_string(),
            previous_page: labels.previous_page.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/1.0/locales",
    tag = LOCALES_TAG,
    responses(
        (status = 200, description = "Supported languages", body = Vec<LocaleSummary>)
    )
)]
pub(crate) async fn list_locales() -> Json<Vec<LocaleSummary>> {
    Json(
        Locale::ALL
            .iter()
            .map(|locale| LocaleSummary {
                locale: locale.code().to_string(),
                title: locale.title().to_string(),
            })
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/1.0/locales/{code}",
    tag = LOCALES_TAG,
    params(
        ("code" = String, Path, description = "Language code, e.g. \"en\" or \"tr-TR\""),
    ),
    responses(
        (status = 200, description = "Labels for the language", body = LocaleLabels),
        (status = 404, description = "Unsupported language")
    )
)]
pub(crate) async fn get_locale(Path(code): Path<String>) -> Result<Json<LocaleLabels>, ApiError> {
    let locale: Locale = code.parse().map_err(ApiError::not_found)?;
    Ok(Json(locale.into()))
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/api/1.0/locales", get(list_locales))
        .route("/api/1.0/locales/{code}", get(get_locale))
}
