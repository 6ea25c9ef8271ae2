//! Title filter used by catalog search.

use crate::catalog::Product;

/// Literal, case-sensitive substring match against product titles.
///
/// An empty term matches every product. The term is used as typed, with no
/// trimming and no pattern syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleFilter<'a> {
    term: &'a str,
}

impl<'a> TitleFilter<'a> {
    /// Create a filter for `term`.
    pub fn new(term: &'a str) -> Self {
        Self { term }
    }

    /// Whether this filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Check a single product.
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.title.contains(self.term)
    }

    /// Matching products, in catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
