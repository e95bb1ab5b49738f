//! The inbound request envelope.
//!
//! Field names follow the HTTP API gateway event format, so a raw gateway event
//! deserializes straight into [`ApiRequest`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const PATH_PARAM_ID: &str = "id";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
	#[serde(default)]
	pub path_parameters: Option<HashMap<String, String>>,
	#[serde(default)]
	pub body: Option<String>,
	#[serde(default)]
	pub request_context: RequestContext,
}
impl ApiRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_path_parameter(
		mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.path_parameters.get_or_insert_with(HashMap::new).insert(name.into(), value.into());

		self
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Attaches the identity proof an upstream authenticator produced for `identity_id`.
	pub fn authenticated_as(mut self, identity_id: impl Into<String>) -> Self {
		self.request_context.authorizer = Some(Authorizer {
			iam: Some(IamAuthorizer {
				cognito_identity: Some(CognitoIdentity { identity_id: identity_id.into() }),
			}),
		});

		self
	}

	pub fn path_parameter(&self, name: &str) -> Option<&str> {
		self.path_parameters.as_ref().and_then(|params| params.get(name)).map(String::as_str)
	}
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequestContext {
	#[serde(default)]
	pub authorizer: Option<Authorizer>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Authorizer {
	#[serde(default)]
	pub iam: Option<IamAuthorizer>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IamAuthorizer {
	#[serde(default)]
	pub cognito_identity: Option<CognitoIdentity>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitoIdentity {
	#[serde(default)]
	pub identity_id: String,
}
