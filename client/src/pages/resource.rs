//! Paginated listing for one content collection (`/{resource}`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Data comes from the request gateway, so an expired token never renders
//! here: the gateway has already cleared the session and left the page.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::gateway::ApiGateway;
use crate::net::types::{Listing, Resource};

/// Whether a page after `page` is likely to exist.
///
/// The page size is the backend's `per_page` when reported, otherwise the
/// length of the first page. A page shorter than that is the last one.
pub(crate) fn has_next_page(listing: &Listing, page: u32, first_page_len: Option<u64>) -> bool {
    let shown = listing.data.len() as u64;
    if shown == 0 {
        return false;
    }
    let page_size = listing.per_page.or(first_page_len).unwrap_or(shown).max(shown);
    if shown < page_size {
        return false;
    }
    match listing.total {
        Some(total) => u64::from(page.saturating_sub(1)) * page_size + shown < total,
        None => true,
    }
}

pub(crate) fn summary_line(listing: &Listing) -> String {
    match (listing.data.len(), listing.total) {
        (0, _) => "No items yet.".to_owned(),
        (shown, Some(total)) => format!("Showing {shown} of {total} items"),
        (shown, None) => format!("Showing {shown} items"),
    }
}

#[component]
pub fn ResourcePage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let params = use_params_map();
    let page = RwSignal::new(1_u32);
    let first_page_len = RwSignal::new(None::<u64>);

    let resource = move || params.with(|p| p.get("resource").and_then(|slug| Resource::from_slug(&slug)));

    Effect::new(move |prev: Option<Option<Resource>>| {
        let current = resource();
        if prev.is_some_and(|p| p != current) {
            page.set(1);
            first_page_len.set(None);
        }
        current
    });

    let listing = LocalResource::new(move || {
        let gateway = gateway.clone();
        let target = resource();
        let page = page.get();
        async move {
            match target {
                Some(r) => Some(api::list_resource(&gateway, r, page).await),
                None => None,
            }
        }
    });

    Effect::new(move || {
        if let Some(Some(Ok(list))) = listing.get() {
            if page.get_untracked() == 1 {
                first_page_len.set(Some(list.data.len() as u64));
            }
        }
    });

    let title = move || resource().map_or("Not found", Resource::label);

    let body = move || match listing.get() {
        None => view! { <p class="resource__status">"Loading..."</p> }.into_any(),
        Some(None) => view! { <p class="resource__status">"Page not found."</p> }.into_any(),
        Some(Some(Err(e))) => render_error(&e).into_any(),
        Some(Some(Ok(list))) => render_listing(list, page, first_page_len.get_untracked()).into_any(),
    };

    view! {
        <NavBar/>
        <main class="resource">
            <h1>{title}</h1>
            {body}
        </main>
    }
}

fn render_error(error: &ApiError) -> impl IntoView {
    // Auth failures have already triggered a full redirect.
    let message = (!error.is_auth_failure()).then(|| error.user_message());
    view! { <p class="resource__error">{message}</p> }
}

fn render_listing(list: Listing, page: RwSignal<u32>, first_page_len: Option<u64>) -> impl IntoView {
    let summary = summary_line(&list);
    let next_enabled = has_next_page(&list, page.get_untracked(), first_page_len);
    let items = list
        .data
        .iter()
        .map(|item| view! { <li class="resource__item">{Listing::item_title(item)}</li> })
        .collect_view();

    view! {
        <p class="resource__summary">{summary}</p>
        <ul class="resource__items">{items}</ul>
        <div class="resource__pager">
            <button
                type="button"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span>{move || format!("Page {}", page.get())}</span>
            <button type="button" disabled=!next_enabled on:click=move |_| page.update(|p| *p += 1)>
                "Next"
            </button>
        </div>
    }
}
