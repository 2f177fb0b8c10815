use crate::legal::DISCLAIMER;
use crate::styles::FOOTER_CLASSES;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={FOOTER_CLASSES}>
            <p>{ DISCLAIMER }</p>
        </footer>
    }
}
