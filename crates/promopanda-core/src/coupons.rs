//! Coupon records as the receiving API stores them.
//!
//! Field names on the wire are the Spanish names the API persists
//! (`codigo`, `tienda`, ...). Records carry no identity beyond `code`, and a
//! single batch may legitimately contain the same code twice.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_CODE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9]").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponRecord {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descuento")]
    pub discount_text: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// `true` only when `discount_text` was read off the live page.
    #[serde(rename = "verificado")]
    pub verified: bool,
}

impl CouponRecord {
    /// The code in the form used for comparisons; see [`normalize_code`].
    #[must_use]
    pub fn normalized_code(&self) -> String {
        normalize_code(&self.code)
    }
}

/// Uppercases `code` and drops everything outside `A-Z0-9`.
///
/// `"welcome-paris 10"` becomes `"WELCOMEPARIS10"`. Non-ASCII letters are
/// dropped after uppercasing, so `"año"` becomes `"AO"`.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    NON_CODE_CHARS_RE
        .replace_all(&code.to_uppercase(), "")
        .into_owned()
}

/// Fixed set of hand-picked technology coupons used to populate the price
/// comparator, one per known retailer.
#[must_use]
pub fn comparator_seed_coupons() -> Vec<CouponRecord> {
    let seed = |code: &str, store: &str, discount: &str, description: &str| CouponRecord {
        code: code.to_string(),
        store: store.to_string(),
        category: "tecnologia".to_string(),
        discount_text: discount.to_string(),
        description: description.to_string(),
        verified: true,
    };

    vec![
        seed(
            "TECH20",
            "falabella",
            "20% en productos seleccionados",
            "El mejor descuento de tecnologia",
        ),
        seed(
            "RIPLEY15",
            "ripley",
            "15% OFF en toda la tienda",
            "Descuento general de temporada",
        ),
        seed(
            "PARIS10",
            "paris",
            "10% adicional con tarjeta",
            "Descuento en tecnología",
        ),
    ]
}
