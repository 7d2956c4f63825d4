//! Account page hosting the signed-in user card.

use leptos::prelude::*;

use crate::components::user_info::UserInfo;
use crate::net::identity::HttpIdentityClient;

/// Account page showing the current user's profile fields.
///
/// Assumes the browser already holds a provider session; when it does not,
/// the fetch fails and the card reports it.
#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <div class="account-page">
            <h1>"Account"</h1>
            <UserInfo client=HttpIdentityClient::default()/>
        </div>
    }
}
