//! Discount-text extraction from retailer markup.
//!
//! A text node counts as an offer when it contains `%` plus either an
//! uppercase `OFF` or a `dcto` marker in any case. The first
//! [`ExtractOptions::max_candidates`] matches are kept in document order,
//! and any of those that are not shorter than
//! [`ExtractOptions::max_fragment_len`] characters are discarded as
//! paragraph noise.
//!
//! Codes are random and never collision-checked, so two records from the same
//! run can share a code.

use promopanda_core::{CouponRecord, ScrapeTarget};
use rand::Rng;
use scraper::{Html, Node};

/// Discount text of the record emitted when a page yields nothing usable.
pub const FALLBACK_DISCOUNT: &str = "10% Primera Compra";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Cap on matching text nodes considered per page, applied before the
    /// length filter.
    pub max_candidates: usize,
    /// Fragments with this many characters or more are dropped.
    pub max_fragment_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_candidates: 5,
            max_fragment_len: 20,
        }
    }
}

/// Returns the discount fragments of `html` that survive the cap and the
/// length filter, trimmed, in document order.
#[must_use]
pub fn find_discount_fragments(html: &str, options: &ExtractOptions) -> Vec<String> {
    let document = Html::parse_document(html);

    text_nodes(&document)
        .filter(|text| looks_like_discount(text))
        .take(options.max_candidates)
        .filter(|fragment| {
            let accepted = fragment.chars().count() < options.max_fragment_len;
            if !accepted {
                tracing::debug!(fragment, "dropping discount fragment — too long");
            }
            accepted
        })
        .map(str::to_owned)
        .collect()
}

/// Builds coupon records for `target` from the discount text found in `html`.
///
/// Every record built from page text is marked verified. When no fragment
/// survives, the result is exactly one unverified [`fallback_coupon`].
pub fn extract_coupons<R: Rng>(
    html: &str,
    target: &ScrapeTarget,
    options: &ExtractOptions,
    rng: &mut R,
) -> Vec<CouponRecord> {
    let fragments = find_discount_fragments(html, options);

    if fragments.is_empty() {
        tracing::debug!(
            store = %target.store,
            category = %target.category,
            "no discount text found — emitting fallback coupon"
        );
        return vec![fallback_coupon(target)];
    }

    fragments
        .into_iter()
        .map(|fragment| CouponRecord {
            code: synthesize_code(&target.store, rng),
            store: target.store.clone(),
            category: target.category.clone(),
            discount_text: fragment,
            description: format!(
                "Código raspado para {} de la web de {}.",
                target.category, target.store
            ),
            verified: true,
        })
        .collect()
}

/// `{first three letters of store, uppercased}{10..=99}PROMO`, e.g. `PAR42PROMO`.
pub fn synthesize_code<R: Rng>(store: &str, rng: &mut R) -> String {
    let prefix: String = store
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let suffix: u8 = rng.random_range(10..=99);
    format!("{prefix}{suffix}PROMO")
}

/// Generic first-purchase coupon used when a page shows no discount text.
#[must_use]
pub fn fallback_coupon(target: &ScrapeTarget) -> CouponRecord {
    CouponRecord {
        code: format!("WELCOME{}", target.store.to_uppercase()),
        store: target.store.clone(),
        category: target.category.clone(),
        discount_text: FALLBACK_DISCOUNT.to_string(),
        description: format!(
            "Descuento de bienvenida para nuevos clientes de {}.",
            target.store
        ),
        verified: false,
    }
}

fn looks_like_discount(text: &str) -> bool {
    if !text.contains('%') {
        return false;
    }
    text.contains("OFF") || text.to_lowercase().contains("dcto")
}

/// Trimmed, non-empty text nodes in document order, excluding `<script>` and
/// `<style>` bodies.
fn text_nodes<'a>(document: &'a Html) -> impl Iterator<Item = &'a str> + 'a {
    document.tree.root().descendants().filter_map(|node| {
        let Node::Text(text) = node.value() else {
            return None;
        };

        let inside_code = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| matches!(el.name(), "script" | "style"));
        if inside_code {
            return None;
        }

        let trimmed = text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
