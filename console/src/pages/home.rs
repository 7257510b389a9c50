//! Landing page.

use leptos::prelude::*;
use leptos_routemap::prelude::expect_router;

#[component]
pub fn HomeView() -> impl IntoView {
    let router = expect_router();
    let open_dashboard = move |_| {
        if let Err(err) = router.navigate_by_name("dashboard") {
            log::warn!("navigation failed: {err}");
        }
    };
    view! {
        <section class="page page-home">
            <h1>"SQL Chat Console"</h1>
            <p>"Ask questions in natural language and get SQL-backed answers."</p>
            <button class="home-cta" on:click=open_dashboard>"Open Dashboard"</button>
        </section>
    }
}
