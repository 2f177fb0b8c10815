#![cfg(target_arch = "wasm32")]

use dash_web::dom::{self, MountError};
use dash_web::legal::DISCLAIMER;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_root(id: &str) -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id(id) {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

#[wasm_bindgen_test]
async fn footer_mounts_into_configured_root() {
    let root = ensure_root("footer-mount-test");
    dom::mount_footer("footer-mount-test").expect("mount footer");
    // Rendering is scheduled; yield once so the scheduler can flush.
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;
    let footer = root
        .query_selector("footer")
        .expect("query footer")
        .expect("footer rendered");
    assert_eq!(footer.text_content().unwrap_or_default(), DISCLAIMER);
}

#[wasm_bindgen_test]
fn selector_style_root_id_is_accepted() {
    ensure_root("footer-selector-test");
    dom::mount_footer("#footer-selector-test").expect("mount footer by selector");
}

#[wasm_bindgen_test]
fn missing_root_is_reported() {
    let err = dom::mount_footer("no-such-root").expect_err("root is absent");
    assert_eq!(err, MountError::MissingRoot("no-such-root".to_string()));
}
