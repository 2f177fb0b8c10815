use crate::styles::{NEW_CONTEXT_REL, NEW_CONTEXT_TARGET, TEXT_LINK_CLASS};
use yew::prelude::*;

/// Props for [`TextLink`].
///
/// `website` is forwarded to `href` untouched; no URL validation happens here.
#[derive(Properties, PartialEq, Clone)]
pub struct TextLinkProps {
    pub website: AttrValue,
    pub children: AttrValue,
}

/// Inline external link that opens in a new browsing context.
#[function_component(TextLink)]
pub fn text_link(props: &TextLinkProps) -> Html {
    html! {
        <a
            class={TEXT_LINK_CLASS}
            target={NEW_CONTEXT_TARGET}
            rel={NEW_CONTEXT_REL}
            href={props.website.clone()}
        >
            { props.children.clone() }
        </a>
    }
}
