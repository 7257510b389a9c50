//! Fallback page for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <section class="page page-not-found">
            <h1>"Page Not Found"</h1>
            <p>"Nothing is routed at this address."</p>
        </section>
    }
}
