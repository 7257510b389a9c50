//! About page; its view definition is produced on first visit.

use leptos::prelude::*;
use leptos_routemap::prelude::{view_ctor, LoadError, ViewCtor};

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <section class="page page-about">
            <h1>"About"</h1>
            <p>"A natural-language console over your SQL warehouse."</p>
            <p>"Questions are translated to SQL, executed, and summarized."</p>
        </section>
    }
}

/// Deferred loader for [`AboutView`]: runs once, on the first navigation to
/// `/about`.
pub async fn load() -> Result<ViewCtor, LoadError> {
    Ok(view_ctor(AboutView))
}
