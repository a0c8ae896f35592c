use std::panic;

use leptos::logging::log;

/// Sets up a custom panic hook that adds context for Leptos owner disposal
/// panics, which on this site come almost exclusively from timer callbacks
/// outliving their component.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A carousel or slideshow interval fired after its component unmounted");
            log!("[PANIC] 2. An effect or signal update is running after the component is gone");
        }
    }));
}

/// Call once from the hydrate/csr entry point.
pub fn init() {
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
}
