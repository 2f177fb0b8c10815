//! Utility class tokens resolved by the external CSS framework.

/// Spacing, font size and colour utilities applied to the page footer.
pub const FOOTER_CLASSES: &str = "my-8 text-sm text-zinc-600";

/// Colour utility applied to inline text links.
pub const TEXT_LINK_CLASS: &str = "text-blue-500";

/// Anchor target that opens a new browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Keeps the opened context from reaching back to `window.opener`.
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

#[cfg(test)]
mod tests {
    use super::{FOOTER_CLASSES, TEXT_LINK_CLASS};

    #[test]
    fn footer_classes_are_space_separated_tokens() {
        let tokens: Vec<&str> = FOOTER_CLASSES.split_whitespace().collect();
        assert_eq!(tokens, ["my-8", "text-sm", "text-zinc-600"]);
    }

    #[test]
    fn text_link_class_is_single_token() {
        assert_eq!(TEXT_LINK_CLASS.split_whitespace().count(), 1);
    }
}
