//! Meilisearch HTTP transport: per-index search, host health, and the document
//! upsert used by the offline indexer. Retry policy lives here and nowhere
//! else: a bounded number of attempts on transient transport failures, with
//! linear backoff between attempts.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

const RETRY_BACKOFF: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
	pub q: String,
	pub limit: u32,
	pub offset: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filter: Option<String>,
	pub show_ranking_score: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
	#[serde(default)]
	pub hits: Vec<Value>,
	#[serde(default)]
	pub estimated_total_hits: Option<u64>,
}

pub async fn search(
	cfg: &jomun_config::Engine,
	index: &str,
	payload: &SearchPayload,
) -> Result<SearchResults> {
	let client = build_client(cfg.timeout_ms, index)?;
	let url = format!("{}/indexes/{index}/search", cfg.host);
	let mut attempt = 0;

	loop {
		match attempt_search(&client, cfg, &url, index, payload).await {
			Ok(results) => return Ok(results),
			Err(err) if err.is_transient() && attempt < cfg.max_retries => {
				attempt += 1;

				tokio::time::sleep(RETRY_BACKOFF * attempt).await;
			},
			Err(err) => return Err(err),
		}
	}
}

pub async fn health(cfg: &jomun_config::Engine) -> Result<()> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.health_timeout_ms))
		.build()
		.map_err(|err| Error::Unhealthy { message: err.to_string() })?;
	let response = client
		.get(format!("{}/health", cfg.host))
		.send()
		.await
		.map_err(|err| Error::Unhealthy { message: err.to_string() })?;

	if response.status() != StatusCode::OK {
		return Err(Error::Unhealthy { message: format!("HTTP {}", response.status().as_u16()) });
	}

	Ok(())
}

/// Upsert a batch of documents. Meilisearch keys them on the index's primary
/// key, so re-running a batch is safe; no retry loop on top.
pub async fn add_documents(
	cfg: &jomun_config::Engine,
	index: &str,
	documents: &[Value],
) -> Result<()> {
	let client = build_client(cfg.timeout_ms, index)?;
	let url = format!("{}/indexes/{index}/documents", cfg.host);
	let response = with_auth(client.post(url), cfg)
		.json(documents)
		.send()
		.await
		.map_err(|err| classify_transport_error(index, err))?;
	let status = response.status();

	if !status.is_success() {
		return Err(engine_error(index, status, response).await);
	}

	Ok(())
}

async fn attempt_search(
	client: &Client,
	cfg: &jomun_config::Engine,
	url: &str,
	index: &str,
	payload: &SearchPayload,
) -> Result<SearchResults> {
	let response = with_auth(client.post(url), cfg)
		.json(payload)
		.send()
		.await
		.map_err(|err| classify_transport_error(index, err))?;
	let status = response.status();

	if status == StatusCode::OK {
		return response
			.json()
			.await
			.map_err(|err| Error::InvalidResponse { message: err.to_string() });
	}
	if status.is_server_error() {
		return Err(Error::Unavailable {
			index: index.to_string(),
			message: format!("HTTP {}", status.as_u16()),
		});
	}

	Err(engine_error(index, status, response).await)
}

fn build_client(timeout_ms: u64, index: &str) -> Result<Client> {
	Client::builder().timeout(Duration::from_millis(timeout_ms)).build().map_err(|err| {
		Error::Unavailable { index: index.to_string(), message: err.to_string() }
	})
}

fn with_auth(request: RequestBuilder, cfg: &jomun_config::Engine) -> RequestBuilder {
	match cfg.api_key.as_deref() {
		Some(key) => request.bearer_auth(key),
		None => request,
	}
}

fn classify_transport_error(index: &str, err: reqwest::Error) -> Error {
	if err.is_timeout() {
		Error::Timeout { index: index.to_string() }
	} else {
		Error::Unavailable { index: index.to_string(), message: err.to_string() }
	}
}

/// Non-2xx, non-5xx responses. Meilisearch reports a machine-readable `code`;
/// a missing index is the one configuration error worth its own variant.
async fn engine_error(index: &str, status: StatusCode, response: Response) -> Error {
	let body: Value = response.json().await.unwrap_or(Value::Null);
	let code = body.get("code").and_then(Value::as_str).unwrap_or_default();

	if code == "index_not_found" {
		return Error::IndexNotFound { index: index.to_string() };
	}

	let message = body
		.get("message")
		.and_then(Value::as_str)
		.map(str::to_string)
		.unwrap_or_else(|| body.to_string());

	Error::Engine { index: index.to_string(), status: status.as_u16(), message }
}
