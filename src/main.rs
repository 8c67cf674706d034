#[cfg(target_arch = "wasm32")]
fn main() {
    use gittrend::app::App;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The dashboard only runs in the browser; build with trunk.
}
