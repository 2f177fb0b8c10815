use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::components::footer::Footer;
use crate::config::footer_root_id;

/// Reasons the footer could not be attached to the host document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}` to mount into")]
    MissingRoot(String),
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`MountError::NoWindow`] outside of a browser context.
pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

/// Retrieve the document of the current window.
///
/// # Errors
/// Returns an error when the window or its document cannot be accessed.
pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// Look up the element the footer renders into.
///
/// # Errors
/// Returns [`MountError::MissingRoot`] when no element carries `root_id`.
pub fn mount_root(root_id: &str) -> Result<Element, MountError> {
    document()?
        .get_element_by_id(root_id)
        .ok_or_else(|| MountError::MissingRoot(root_id.to_string()))
}

/// Render [`Footer`] into the element with id `root_id`.
///
/// A leading `#` is accepted; a blank id targets [`crate::config::DEFAULT_FOOTER_ROOT`].
///
/// # Errors
/// Returns an error if the browser document or the root element is missing.
pub fn mount_footer(root_id: &str) -> Result<(), MountError> {
    let root_id = footer_root_id(root_id);
    let root = mount_root(root_id)?;
    yew::Renderer::<Footer>::with_root(root).render();
    log::debug!("footer mounted into #{root_id}");
    Ok(())
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}
