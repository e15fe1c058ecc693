//! Browser entry point: install logging and mount the app.

fn main() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;

        console_error_panic_hook::set_once();
        let config = tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(tracing::Level::DEBUG)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);

        tracing::info!("starting jobwatch console");
        leptos::mount::mount_to_body(|| view! { <client::app::App/> });
    }
}
