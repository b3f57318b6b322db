//! Route access guard wrapping the routed outlet.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthContext;
use crate::util::auth::{GuardDecision, guard_decision, install_route_guard};

/// Renders `children` only when the current path is allowed for the current
/// auth state; otherwise shows a placeholder while the redirect happens.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    install_route_guard(auth.clone(), move || pathname.get(), navigate);

    let allowed = move || guard_decision(&auth.state(), &pathname.get()) == GuardDecision::Render;

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="guard-pending" aria-busy="true">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
