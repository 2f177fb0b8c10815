#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod dom;
pub mod legal;
pub mod styles;

pub use components::footer::Footer;
pub use components::text_link::{TextLink, TextLinkProps};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = dom::mount_footer(config::DEFAULT_FOOTER_ROOT) {
        log::error!("footer not mounted: {err}");
        dom::console_error(&err.to_string());
    }
}
