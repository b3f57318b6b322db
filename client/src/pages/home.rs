//! Protected landing page listing the managed content areas.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::Resource;
use crate::state::auth::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let greeting = move || {
        auth.user()
            .map(|u| format!("Welcome, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    view! {
        <NavBar/>
        <main class="home">
            <h1>{greeting}</h1>
            <ul class="home__tiles">
                {Resource::ALL
                    .into_iter()
                    .map(|resource| {
                        view! {
                            <li class="home__tile">
                                <a href=resource.route()>{resource.label()}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}
