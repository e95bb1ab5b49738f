use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

pub const FORBIDDEN_BODY: &str = "{\"error\": \"Forbidden\"}";
pub const INTERNAL_ERROR_BODY: &str = "{\"error\": \"Internal Server Error\"}";
pub const NOT_FOUND_BODY: &str = "{\"error\": \"Not Found\"}";
pub const BAD_REQUEST_BODY: &str = "{\"error\": \"Bad Request\"}";

/// How failures other than a missing identity map onto status codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusCodes {
	/// Every failure except a missing identity is a 500.
	#[default]
	Uniform,
	/// Missing notes are 404 and undecodable input is 400.
	Distinct,
}
impl FromStr for StatusCodes {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim() {
			"uniform" => Ok(Self::Uniform),
			"distinct" => Ok(Self::Distinct),
			other => Err(format!("Unknown status code mode {other:?}.")),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
	pub status_code: u16,
	pub body: String,
	pub headers: BTreeMap<String, String>,
}
impl ApiResponse {
	fn new(status_code: u16, body: impl Into<String>) -> Self {
		Self { status_code, body: body.into(), headers: common_headers() }
	}
}

pub fn ok(body: impl Into<String>) -> ApiResponse {
	ApiResponse::new(200, body)
}

pub fn forbidden() -> ApiResponse {
	tracing::debug!("Request rejected without a verified identity.");

	ApiResponse::new(403, FORBIDDEN_BODY)
}

/// Logs `err` with its full source chain; none of it reaches the response body.
pub fn internal_error(err: &Error) -> ApiResponse {
	tracing::error!(error = %err, trace = ?err, "Internal Server Error");

	ApiResponse::new(500, INTERNAL_ERROR_BODY)
}

pub fn from_error(err: &Error, mode: StatusCodes) -> ApiResponse {
	match (err, mode) {
		(Error::Unauthorized, _) => forbidden(),
		(Error::NotFound { .. }, StatusCodes::Distinct) => {
			tracing::warn!(error = %err, "Not Found");

			ApiResponse::new(404, NOT_FOUND_BODY)
		},
		(Error::InvalidInput { .. }, StatusCodes::Distinct) => {
			tracing::warn!(error = %err, "Bad Request");

			ApiResponse::new(400, BAD_REQUEST_BODY)
		},
		_ => internal_error(err),
	}
}

fn common_headers() -> BTreeMap<String, String> {
	BTreeMap::from([
		(HEADER_ALLOW_ORIGIN.to_string(), "*".to_string()),
		(HEADER_ALLOW_CREDENTIALS.to_string(), "true".to_string()),
	])
}
