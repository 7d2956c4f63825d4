//! Identity-provider client for profile retrieval.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! provider's OpenID Connect userinfo endpoint.
//! Server-side (SSR): stub returning an error, since the identity session
//! only exists in the browser.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::Profile;
#[cfg(feature = "hydrate")]
use crate::net::types::RawProfile;

fn userinfo_endpoint(base: &str, realm: &str) -> String {
    format!("{base}/realms/{realm}/protocol/openid-connect/userinfo")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

/// Errors surfaced by profile retrieval.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider responded, but the payload lacked a required field.
    #[error("malformed profile: missing field `{missing}`")]
    MalformedProfile {
        /// Name of the first missing field.
        missing: &'static str,
    },
    /// Transport or HTTP-level failure.
    #[error("{0}")]
    Fetch(String),
}

/// Asynchronous profile-retrieval capability.
///
/// The display component takes this as its one injected dependency, so tests
/// can drive it with canned outcomes instead of a live provider.
#[allow(async_fn_in_trait)]
pub trait IdentityClient {
    /// Fetch the signed-in user's profile. Resolves exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Fetch`] when the request cannot be made or
    /// the provider responds with a non-OK status, and
    /// [`IdentityError::MalformedProfile`] when the payload is missing a
    /// required field.
    async fn load_user_profile(&self) -> Result<Profile, IdentityError>;
}

/// `IdentityClient` backed by the provider's userinfo endpoint.
#[derive(Clone, Debug)]
pub struct HttpIdentityClient {
    endpoint: String,
}

impl HttpIdentityClient {
    /// Client for `{base}/realms/{realm}/protocol/openid-connect/userinfo`.
    pub fn new(base: &str, realm: &str) -> Self {
        Self {
            endpoint: userinfo_endpoint(base, realm),
        }
    }

    /// Userinfo URL this client requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpIdentityClient {
    /// Same-origin provider under `/auth`, `demo` realm.
    fn default() -> Self {
        Self::new("/auth", "demo")
    }
}

impl IdentityClient for HttpIdentityClient {
    async fn load_user_profile(&self) -> Result<Profile, IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| IdentityError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(IdentityError::Fetch(profile_request_failed_message(
                    resp.status(),
                )));
            }
            let raw: RawProfile = resp
                .json()
                .await
                .map_err(|e| IdentityError::Fetch(e.to_string()))?;
            Profile::try_from(raw).map_err(|missing| IdentityError::MalformedProfile { missing })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(IdentityError::Fetch("not available on server".to_owned()))
        }
    }
}
