//! Wire DTOs for the identity-provider boundary.
//!
//! DESIGN
//! ======
//! The provider's userinfo payload is deserialized into an unvalidated raw
//! shape first; `Profile` can only be produced by explicit validation, so a
//! missing field surfaces as a typed error instead of an empty display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Userinfo payload as it arrives off the wire, before validation.
///
/// Providers differ on the username claim name; `preferred_username` is the
/// OpenID Connect spelling.
#[derive(Clone, Debug, Deserialize)]
pub struct RawProfile {
    /// Login name of the authenticated user.
    #[serde(alias = "preferred_username")]
    pub username: Option<String>,
    /// Email address on record with the provider.
    pub email: Option<String>,
    /// Subject identifier, the provider's stable user id.
    pub sub: Option<String>,
}

/// Validated profile of the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Login name of the authenticated user.
    pub username: String,
    /// Email address on record with the provider.
    pub email: String,
    /// Subject identifier, the provider's stable user id.
    pub sub: String,
}

impl TryFrom<RawProfile> for Profile {
    /// Name of the first missing required field.
    type Error = &'static str;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let username = raw.username.ok_or("username")?;
        let email = raw.email.ok_or("email")?;
        let sub = raw.sub.ok_or("sub")?;
        Ok(Self { username, email, sub })
    }
}
