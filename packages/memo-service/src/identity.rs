use crate::{Error, Result, request::ApiRequest};

/// Who a request acts for, as established by the upstream authenticator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
	Unauthenticated,
	AuthenticatedAs(String),
}
impl Identity {
	/// An identity proof only counts when it carries a non-blank identity id.
	pub fn resolve(req: &ApiRequest) -> Self {
		let identity_id = req
			.request_context
			.authorizer
			.as_ref()
			.and_then(|authorizer| authorizer.iam.as_ref())
			.and_then(|iam| iam.cognito_identity.as_ref())
			.map(|cognito| cognito.identity_id.trim())
			.filter(|identity_id| !identity_id.is_empty());

		match identity_id {
			Some(identity_id) => Self::AuthenticatedAs(identity_id.to_string()),
			None => Self::Unauthenticated,
		}
	}

	pub fn is_authorized(&self) -> bool {
		matches!(self, Self::AuthenticatedAs(_))
	}

	pub fn tenant_id(&self) -> Option<&str> {
		match self {
			Self::AuthenticatedAs(tenant_id) => Some(tenant_id),
			Self::Unauthenticated => None,
		}
	}

	pub fn require(self) -> Result<String> {
		match self {
			Self::AuthenticatedAs(tenant_id) => Ok(tenant_id),
			Self::Unauthenticated => Err(Error::Unauthorized),
		}
	}
}

pub fn is_authorized(req: &ApiRequest) -> bool {
	Identity::resolve(req).is_authorized()
}

pub fn tenant_id(req: &ApiRequest) -> Option<String> {
	Identity::resolve(req).require().ok()
}
