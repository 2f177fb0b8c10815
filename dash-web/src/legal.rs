//! Fixed legal copy shown in the page footer.

/// Trademark and affiliation notice rendered verbatim by [`crate::Footer`].
pub const DISCLAIMER: &str = "This project/website is unofficial and is not associated in any way with the Formula 1 companies. F1, FORMULA ONE, FORMULA 1, FIA FORMULA ONE WORLD CHAMPIONSHIP, GRAND PRIX and related marks are trade marks of Formula One Licensing B.V";
