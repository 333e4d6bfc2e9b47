//! # Cart arithmetic and in-flight tracking
//!
//! The cart list itself is a read-through cache owned by the backend; this
//! module holds the pure pieces around it: the derived totals and the
//! [`PendingSet`] of product ids with a quantity change in flight.
//!
//! Totals are folds over the current list, recomputed on every render. No
//! caching, no incremental maintenance: the list is small and replaced
//! wholesale after every mutation anyway.

use std::collections::HashSet;

use crate::models::CartLine;

/// Order total in whole rupees: Σ price × quantity.
pub fn cart_total(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.product.price * line.quantity)
        .sum()
}

/// Number of units across all lines: Σ quantity.
pub fn cart_total_items(lines: &[CartLine]) -> i64 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Product ids with a quantity change awaiting a server response.
///
/// An id is inserted before the request starts and removed on completion
/// regardless of outcome; its only consumer is the UI, which disables the
/// line's controls while the id is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingSet {
    ids: HashSet<i64>,
}

impl PendingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a product as having an update in flight.
    /// Returns false if it was already pending.
    pub fn insert(&mut self, product_id: i64) -> bool {
        self.ids.insert(product_id)
    }

    /// Clear a product's in-flight mark.
    /// Returns false if it was not pending, so overlapping completions
    /// remove the entry exactly once between them.
    pub fn remove(&mut self, product_id: i64) -> bool {
        self.ids.remove(&product_id)
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn line(id: i64, price: i64, quantity: i64) -> CartLine {
        CartLine {
            id,
            product_id: id,
            user_id: 1,
            quantity,
            product: Product {
                id,
                title: "item".to_string(),
                description: String::new(),
                price,
                quantity: 100,
                category: String::new(),
                image_url: String::new(),
            },
        }
    }

    #[test]
    fn totals_fold_over_the_lines() {
        let cart = vec![line(1, 100, 2), line(2, 50, 1)];
        assert_eq!(cart_total(&cart), 250);
        assert_eq!(cart_total_items(&cart), 3);
    }

    #[test]
    fn totals_of_an_empty_cart_are_zero() {
        assert_eq!(cart_total(&[]), 0);
        assert_eq!(cart_total_items(&[]), 0);
    }

    #[test]
    fn pending_entries_are_removed_exactly_once() {
        let mut pending = PendingSet::new();

        // Two overlapping updates for product 7: the first begin inserts,
        // the second sees it already pending.
        assert!(pending.insert(7));
        assert!(!pending.insert(7));
        assert!(pending.contains(7));

        // Both completions run their cleanup; only one finds the entry,
        // and nothing is left stuck afterwards.
        assert!(pending.remove(7));
        assert!(!pending.remove(7));
        assert!(!pending.contains(7));
        assert!(pending.is_empty());
    }

    #[test]
    fn pending_ids_are_independent() {
        let mut pending = PendingSet::new();
        pending.insert(1);
        pending.insert(2);

        pending.remove(1);
        assert!(!pending.contains(1));
        assert!(pending.contains(2));
    }
}
