//! Public landing page with a link into the account view.

use leptos::prelude::*;

/// Landing page shown to visitors before they open their account view.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome-page">
            <h1>"User Info"</h1>
            <p>"Your identity provider account at a glance."</p>
            <a href="/account" class="welcome-button">
                "My account"
            </a>
        </div>
    }
}
