use axum::{
	Router,
	extract::{Path, State},
	http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
	response::{IntoResponse, Response},
	routing::get,
};

use memo_service::{ApiRequest, ApiResponse, PATH_PARAM_ID};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/notes", get(list).post(create))
		.route("/notes/{id}", get(fetch).put(update).delete(delete))
		.route("/clicks", get(clicks).post(click))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create(State(state): State<AppState>, headers: HeaderMap, body: String) -> GatewayReply {
	let req = envelope(&state, &headers).with_body(body);

	GatewayReply(state.service.handle_create(&req).await)
}

async fn list(State(state): State<AppState>, headers: HeaderMap) -> GatewayReply {
	let req = envelope(&state, &headers);

	GatewayReply(state.service.handle_list(&req).await)
}

async fn fetch(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(id): Path<String>,
) -> GatewayReply {
	let req = envelope(&state, &headers).with_path_parameter(PATH_PARAM_ID, id);

	GatewayReply(state.service.handle_get(&req).await)
}

async fn update(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(id): Path<String>,
	body: String,
) -> GatewayReply {
	let req = envelope(&state, &headers).with_path_parameter(PATH_PARAM_ID, id).with_body(body);

	GatewayReply(state.service.handle_update(&req).await)
}

async fn delete(
	State(state): State<AppState>,
	headers: HeaderMap,
	Path(id): Path<String>,
) -> GatewayReply {
	let req = envelope(&state, &headers).with_path_parameter(PATH_PARAM_ID, id);

	GatewayReply(state.service.handle_delete(&req).await)
}

async fn clicks(State(state): State<AppState>) -> GatewayReply {
	GatewayReply(state.service.handle_clicks().await)
}

async fn click(State(state): State<AppState>) -> GatewayReply {
	GatewayReply(state.service.handle_click().await)
}

/// Builds the handler envelope. The identity header is trusted as-is: whatever sits in front
/// of this server is expected to have verified it.
fn envelope(state: &AppState, headers: &HeaderMap) -> ApiRequest {
	let identity = headers.get(&state.identity_header).and_then(|value| value.to_str().ok());

	match identity {
		Some(identity_id) => ApiRequest::new().authenticated_as(identity_id),
		None => ApiRequest::new(),
	}
}

/// Renders an [`ApiResponse`] exactly as the handler shaped it.
pub struct GatewayReply(pub ApiResponse);
impl IntoResponse for GatewayReply {
	fn into_response(self) -> Response {
		let ApiResponse { status_code, body, headers } = self.0;
		let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let has_body = !body.is_empty();
		let mut response = (status, body).into_response();
		let response_headers = response.headers_mut();

		response_headers.remove(header::CONTENT_TYPE);

		if has_body {
			response_headers
				.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
		}

		for (name, value) in headers {
			match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
				(Ok(name), Ok(value)) => {
					response_headers.insert(name, value);
				},
				_ => tracing::warn!(header = %name, "Dropped a response header that is not valid HTTP."),
			}
		}

		response
	}
}
