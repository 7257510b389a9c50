use leptos::prelude::*;
use sqlchat_console::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(|| view! { <App /> });
}
