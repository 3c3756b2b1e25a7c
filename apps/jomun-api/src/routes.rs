use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use jomun_service::{
	ArticleDetail, HealthReport, LawOut, SearchRequest, SearchResponse, ServiceError,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/search", get(search))
		.route("/laws", get(laws))
		.route("/articles/{law_code}/{article_no}", get(article_detail))
		.route("/articles/{law_code}/{article_no}/{article_sub_no}", get(article_detail_with_sub))
		.with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
	q: String,
	#[serde(default = "default_scope")]
	scope: String,
	limit: Option<u32>,
	offset: Option<u32>,
	#[serde(default)]
	strict: bool,
}

fn default_scope() -> String {
	"all".to_string()
}

#[derive(Debug, Deserialize)]
struct SubNoParam {
	#[serde(default)]
	sub_no: i32,
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
	Json(state.service.health().await)
}

async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state
		.service
		.search(SearchRequest {
			query: params.q,
			scope: params.scope,
			limit: params.limit,
			offset: params.offset,
			strict: params.strict,
		})
		.await?;

	Ok(Json(response))
}

async fn laws(State(state): State<AppState>) -> Result<Json<Vec<LawOut>>, ApiError> {
	let laws = state.service.list_laws().await?;

	Ok(Json(laws))
}

async fn article_detail(
	State(state): State<AppState>,
	Path((law_code, article_no)): Path<(String, i32)>,
	Query(params): Query<SubNoParam>,
) -> Result<Json<ArticleDetail>, ApiError> {
	let article = state.service.article_detail(&law_code, article_no, params.sub_no).await?;

	Ok(Json(article))
}

async fn article_detail_with_sub(
	State(state): State<AppState>,
	Path((law_code, article_no, article_sub_no)): Path<(String, i32, i32)>,
) -> Result<Json<ArticleDetail>, ApiError> {
	let article = state.service.article_detail(&law_code, article_no, article_sub_no).await?;

	Ok(Json(article))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code.to_string(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let message = err.to_string();
		let (status, error_code) = match err {
			ServiceError::InvalidQuery { .. } => (StatusCode::BAD_REQUEST, "invalid_query"),
			ServiceError::InvalidScope { .. } => (StatusCode::BAD_REQUEST, "invalid_scope"),
			ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
			ServiceError::MalformedHit { .. } => (StatusCode::BAD_GATEWAY, "malformed_hit"),
			ServiceError::IndexNotFound { .. } => (StatusCode::BAD_GATEWAY, "index_not_found"),
			ServiceError::EngineTimeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "engine_timeout"),
			ServiceError::EngineUnavailable { .. } =>
				(StatusCode::BAD_GATEWAY, "engine_unavailable"),
			ServiceError::AllIndicesUnavailable =>
				(StatusCode::SERVICE_UNAVAILABLE, "all_indices_unavailable"),
			ServiceError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
		};

		Self { status, error_code, message }
	}
}
