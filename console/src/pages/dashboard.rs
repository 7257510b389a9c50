//! Dashboard page: query history and saved answers.

use leptos::prelude::*;

#[component]
pub fn DashboardView() -> impl IntoView {
    view! {
        <section class="page page-dashboard">
            <h1>"Dashboard"</h1>
            <div class="dashboard-panels">
                <article class="dashboard-panel">
                    <h2>"Recent Questions"</h2>
                    <p>"Your latest natural-language queries appear here."</p>
                </article>
                <article class="dashboard-panel">
                    <h2>"Saved Answers"</h2>
                    <p>"Pinned results and the SQL that produced them."</p>
                </article>
                <article class="dashboard-panel">
                    <h2>"Connections"</h2>
                    <p>"Databases this console can ask questions against."</p>
                </article>
            </div>
        </section>
    }
}
