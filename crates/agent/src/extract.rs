use std::sync::OnceLock;

use regex::Regex;

static SKU_PATTERN: OnceLock<Regex> = OnceLock::new();
static QTY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn sku_pattern() -> &'static Regex {
    SKU_PATTERN.get_or_init(|| Regex::new(r"(?i)\b(SKU\d+)\b").expect("static pattern"))
}

fn qty_pattern() -> &'static Regex {
    QTY_PATTERN.get_or_init(|| Regex::new(r"\b(\d+)\b").expect("static pattern"))
}

/// First SKU token in the text, uppercased.
pub fn extract_sku(text: &str) -> Option<String> {
    sku_pattern()
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// First standalone number in the text, ignoring digits that belong to SKU
/// tokens.
pub fn extract_quantity(text: &str) -> Option<u32> {
    let without_skus = sku_pattern().replace_all(text, " ");
    qty_pattern()
        .captures(&without_skus)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}
