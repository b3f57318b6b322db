//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::{API_BASE_URL_META, ApiConfig};
use crate::net::gateway::ApiGateway;
use crate::pages::{
    home::HomePage, password_reset::PasswordResetPage, resource::ResourcePage, signin::SignInPage,
    signup::SignUpPage,
};
use crate::routes::{PASSWORD_RESET_SEGMENT, SIGN_IN_SEGMENT, SIGN_UP_SEGMENT};
use crate::state::auth::AuthContext;
use crate::util::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base_url` is published as a meta tag so the hydrated client talks to
/// the backend the server was configured with.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_URL_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single [`AuthContext`] and the [`ApiGateway`] bound to it,
/// provides both, and mounts every route behind [`RouteGuard`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(SessionStore::default());
    let gateway = ApiGateway::browser(ApiConfig::resolve(), auth.clone());
    provide_context(auth.clone());
    provide_context(gateway);

    // Effects only run in the browser, so SSR output stays in the waiting state
    // and hydration reads localStorage exactly once.
    Effect::new(move || auth.resolve());

    view! {
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| view! { <RouteGuard>"Page not found."</RouteGuard> }>
                <Route path=StaticSegment(SIGN_IN_SEGMENT) view=|| view! { <RouteGuard><SignInPage/></RouteGuard> }/>
                <Route path=StaticSegment(SIGN_UP_SEGMENT) view=|| view! { <RouteGuard><SignUpPage/></RouteGuard> }/>
                <Route
                    path=StaticSegment(PASSWORD_RESET_SEGMENT)
                    view=|| view! { <RouteGuard><PasswordResetPage/></RouteGuard> }
                />
                <Route path=StaticSegment("") view=|| view! { <RouteGuard><HomePage/></RouteGuard> }/>
                <Route path=ParamSegment("resource") view=|| view! { <RouteGuard><ResourcePage/></RouteGuard> }/>
            </Routes>
        </Router>
    }
}
