//! Display state for the signed-in user's profile.
//!
//! DESIGN
//! ======
//! One fetch feeds one state container. Transitions are
//! `Pending -> Loaded` on success and `Pending -> Failed` once the failure
//! has been reported; both end states are terminal, so late or duplicate
//! completions are dropped rather than re-applied.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::Profile;

/// Lifecycle of the profile display for one component instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileState {
    /// Fetch outstanding (or never completing); nothing to display.
    #[default]
    Pending,
    /// Fields copied out of a successful fetch.
    Loaded(Profile),
    /// Fetch failed and the user has been notified.
    Failed,
}

impl ProfileState {
    /// Whether a completion has already been applied.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProfileState::Pending)
    }

    /// Apply a successful fetch. Returns `false` once terminal.
    pub fn load(&mut self, profile: Profile) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = ProfileState::Loaded(profile);
        true
    }

    /// Record a failed fetch. Returns `false` once terminal.
    pub fn fail(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = ProfileState::Failed;
        true
    }

    /// Username to display; empty until loaded.
    pub fn username(&self) -> &str {
        match self {
            ProfileState::Loaded(p) => &p.username,
            _ => "",
        }
    }

    /// Email to display; empty until loaded.
    pub fn email(&self) -> &str {
        match self {
            ProfileState::Loaded(p) => &p.email,
            _ => "",
        }
    }

    /// Subject id of the loaded profile; empty until loaded. Stored for
    /// identity-aware callers, not rendered.
    pub fn user_id(&self) -> &str {
        match self {
            ProfileState::Loaded(p) => &p.sub,
            _ => "",
        }
    }
}
