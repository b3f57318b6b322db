//! Top navigation bar for signed-in screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Resource;
use crate::routes::{HOME_PATH, SIGN_IN_PATH};
use crate::state::auth::AuthContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let display_name = {
        let auth = auth.clone();
        move || auth.user().map(|u| u.display_name()).unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.logout();
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a href=HOME_PATH class="nav-bar__brand">"Admin Console"</a>
            <nav class="nav-bar__links">
                {Resource::ALL
                    .into_iter()
                    .map(|resource| view! { <a href=resource.route()>{resource.label()}</a> })
                    .collect_view()}
            </nav>
            <span class="nav-bar__user">{display_name}</span>
            <button class="nav-bar__logout" type="button" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
