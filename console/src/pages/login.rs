//! Login page: local form state and shape validation. The credential check
//! itself belongs to the backend API, not the routing layer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_routemap::prelude::NavigateExt;

use crate::AppRoute;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Trims and shape-checks the login form input.
pub(crate) fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginView() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_credentials(&email.get(), &password.get()) {
            Ok(_) => navigate.navigate_to(AppRoute::Dashboard),
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <section class="page page-login">
            <h1>"Sign In"</h1>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit">"Sign In"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
