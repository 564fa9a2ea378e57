//! Licensing metadata derived from free-text product names.
//!
//! All lookups walk fixed, ordered token lists and stop at the first match;
//! list order is precedence.

use std::sync::LazyLock;

use regex::Regex;

static SCALED_PRODUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"V[0-9]|[SA]6").expect("static pattern"));

/// Hardware tokens with a per-unit support SKU, ordered by precedence.
const HARDWARE_TOKENS: [&str; 7] = ["CC4", "A4", "RS4", "S4", "A6", "RS6", "S6"];

/// Virtual (software) tokens. `CC4` is repeated here but is always caught
/// by [`HARDWARE_TOKENS`] first.
const VIRTUAL_TOKENS: [&str; 5] = ["V24", "V16", "V8", "V4", "CC4"];

/// Series prefixes checked as `"{token} Series"`.
const SERIES_TOKENS: [&str; 3] = ["A", "RS", "S"];

/// How many nodes (controllers plus gateways) a product is expected to have.
///
/// Capacity-scaled products (`V<digit>`, `S6`, `A6`) get one node per full
/// thousand of `sul`, plus one; everything else is a single node.
pub fn expected_nodes(product: &str, sul: i64) -> i64 {
    if SCALED_PRODUCT.is_match(product) {
        return sul.div_euclid(1000) + 1;
    }
    1
}

/// Support part number (SKU) for a product name, or an empty string when
/// none applies. Demo products never carry one.
pub fn support_part_number(product: &str) -> String {
    if product.contains("Demo") {
        return String::new();
    }

    if let Some(token) = first_contained(product, &HARDWARE_TOKENS) {
        if product.contains(&format!("2{token}")) {
            return format!("RXG 2{token} ECOSA");
        }
        return format!("RXG {token} EOSA");
    }

    if let Some(token) = first_contained(product, &VIRTUAL_TOKENS) {
        return format!("RXG {token} SWOSA");
    }

    if product.contains("V Series") {
        return "RXG VS SWOSA".to_string();
    }

    if let Some(token) = SERIES_TOKENS
        .iter()
        .find(|token| product.contains(&format!("{token} Series")))
    {
        return format!("RXG {token} SWOSA");
    }

    if product.contains("CC Series") {
        return "RXG CC4 SWOSA".to_string();
    }

    String::new()
}

fn first_contained<'a>(product: &str, tokens: &[&'a str]) -> Option<&'a str> {
    tokens.iter().copied().find(|token| product.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_nodes_matrix() {
        assert_eq!(expected_nodes("S6-Pro", 2500), 3);
        assert_eq!(expected_nodes("A6", 999), 1);
        assert_eq!(expected_nodes("rXg V8 Virtual", 1000), 2);
        assert_eq!(expected_nodes("Basic", 2500), 1);
        assert_eq!(expected_nodes("V Series", 5000), 1);
        assert_eq!(expected_nodes("S6", -1), 0);
    }

    #[test]
    fn demo_short_circuits() {
        assert_eq!(support_part_number("XYZ Demo A4"), "");
    }

    #[test]
    fn hardware_tokens() {
        assert_eq!(support_part_number("rXg 2CC4 cluster"), "RXG 2CC4 ECOSA");
        assert_eq!(support_part_number("rXg CC4 cluster"), "RXG CC4 EOSA");
        assert_eq!(support_part_number("rXg RS4"), "RXG RS4 EOSA");
        // A4 precedes A6
        assert_eq!(support_part_number("A6 and A4"), "RXG A4 EOSA");
        assert_eq!(support_part_number("2S6"), "RXG 2S6 ECOSA");
    }

    #[test]
    fn software_and_series_fallbacks() {
        assert_eq!(support_part_number("rXg V16"), "RXG V16 SWOSA");
        assert_eq!(support_part_number("rXg V Series"), "RXG VS SWOSA");
        assert_eq!(support_part_number("rXg RS Series"), "RXG RS SWOSA");
        assert_eq!(support_part_number("rXg CC Series"), "RXG CC4 SWOSA");
        assert_eq!(support_part_number("something else"), "");
    }
}
