//! Signed-in user card showing username and email.
//!
//! ERROR HANDLING
//! ==============
//! The fetch outcome is folded into `ProfileState` exactly once; failures
//! surface to the user as a single fixed-message dialog and nothing else.

#[cfg(test)]
#[path = "user_info_test.rs"]
mod user_info_test;

use leptos::prelude::*;

use crate::net::identity::IdentityClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::identity::IdentityError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Profile;
use crate::state::profile::ProfileState;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::notify::Notify;

/// Fixed message shown when the profile fetch fails.
pub const PROFILE_FETCH_FAILED_MESSAGE: &str = "Failed to load user profile";

fn username_line(state: &ProfileState) -> String {
    format!("Username: {}", state.username())
}

fn email_line(state: &ProfileState) -> String {
    format!("Email: {}", state.email())
}

/// Fold a completed fetch into the display state.
///
/// Failures are reported through `notify` exactly once; completions that
/// arrive once the state is already terminal are dropped. Returns whether
/// the state changed.
#[cfg(any(test, feature = "hydrate"))]
fn apply_fetch_outcome<N: Notify>(
    state: &mut ProfileState,
    notify: &N,
    outcome: Result<Profile, IdentityError>,
) -> bool {
    match outcome {
        Ok(profile) => state.load(profile),
        Err(_) => {
            let applied = state.fail();
            if applied {
                notify.notify(PROFILE_FETCH_FAILED_MESSAGE);
            }
            applied
        }
    }
}

/// Card displaying the current user's username and email.
///
/// Starts exactly one profile fetch when constructed; re-renders read the
/// stored state and never refetch. The fields stay blank until the fetch
/// resolves, and indefinitely if it never does.
#[component]
pub fn UserInfo<C>(client: C) -> impl IntoView
where
    C: IdentityClient + 'static,
{
    let profile = RwSignal::new(ProfileState::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = client.load_user_profile().await;
            if let Err(err) = &outcome {
                log::warn!("profile fetch failed: {err}");
            }
            // A completion landing after the view is disposed is dropped.
            let _ = profile.try_update(|state| {
                apply_fetch_outcome(state, &crate::util::notify::BrowserAlert, outcome)
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }

    view! {
        <div class="user-info">
            <p class="user-info__row">{move || profile.with(username_line)}</p>
            <p class="user-info__row">{move || profile.with(email_line)}</p>
        </div>
    }
}
