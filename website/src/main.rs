use codewave_website::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("error initializing logger: {}", e).into());
    }
    mount_to_body(App);
}
