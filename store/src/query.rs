//! # Catalog query model
//!
//! [`CatalogQuery`] is the filter state behind the product listing: search
//! text, category, price range, and sort. Every field change is one state
//! transition that the catalog view answers with exactly one new fetch; the
//! response wholly replaces the displayed list.
//!
//! Invariant: `min_price <= max_price`, both within `[0, PRICE_CEILING]`.
//! [`set_price_range`](CatalogQuery::set_price_range) maintains it by
//! clamping and reordering, so filter controls can hand over raw slider
//! values.

use serde::{Deserialize, Serialize};

/// Upper bound of the price filter, in whole rupees.
pub const PRICE_CEILING: i64 = 180_000;

/// Field the product list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Price,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Price => "price",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "price" => SortKey::Price,
            _ => SortKey::Title,
        }
    }
}

/// Direction of the ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Filter and sort state sent to the product listing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: String,
    pub category: String,
    pub min_price: i64,
    pub max_price: i64,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            min_price: 0,
            max_price: PRICE_CEILING,
            sort_by: SortKey::Title,
            order: SortOrder::Asc,
        }
    }
}

impl CatalogQuery {
    /// Reset every filter to its default in a single transition.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    /// Set the price range from raw control values, clamping to
    /// `[0, PRICE_CEILING]` and reordering an inverted pair.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        let min = min.clamp(0, PRICE_CEILING);
        let max = max.clamp(0, PRICE_CEILING);
        if min <= max {
            self.min_price = min;
            self.max_price = max;
        } else {
            self.min_price = max;
            self.max_price = min;
        }
    }

    /// How many filters deviate from the defaults. `min_price = 0` is never
    /// active (zero is the default floor), and `max_price` only counts once
    /// it is pulled below the ceiling, so a pristine query reports none.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            !self.category.is_empty(),
            self.min_price != 0,
            self.max_price != PRICE_CEILING,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// The six query parameters the listing endpoint expects, always all
    /// present.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search.clone()),
            ("category", self.category.clone()),
            ("minPrice", self.min_price.to_string()),
            ("maxPrice", self.max_price.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_filter_state() {
        let query = CatalogQuery::default();
        assert_eq!(query.search, "");
        assert_eq!(query.category, "");
        assert_eq!(query.min_price, 0);
        assert_eq!(query.max_price, PRICE_CEILING);
        assert_eq!(query.sort_by, SortKey::Title);
        assert_eq!(query.order, SortOrder::Asc);
    }

    #[test]
    fn pristine_query_has_no_active_filters() {
        let query = CatalogQuery::default();
        assert_eq!(query.active_filter_count(), 0);
        assert!(!query.has_active_filters());
    }

    #[test]
    fn min_price_zero_is_never_an_active_filter() {
        let query = CatalogQuery {
            min_price: 0,
            max_price: 20_000,
            ..CatalogQuery::default()
        };
        // Only the lowered ceiling counts; the zero floor does not.
        assert_eq!(query.active_filter_count(), 1);
    }

    #[test]
    fn clear_filters_resets_everything_and_deactivates() {
        let mut query = CatalogQuery {
            search: "keyboard".to_string(),
            category: "accessories".to_string(),
            min_price: 5_000,
            max_price: 20_000,
            sort_by: SortKey::Price,
            order: SortOrder::Desc,
        };
        assert!(query.has_active_filters());

        query.clear_filters();
        assert_eq!(query, CatalogQuery::default());
        assert!(!query.has_active_filters());
    }

    #[test]
    fn price_range_is_clamped_and_ordered() {
        let mut query = CatalogQuery::default();

        query.set_price_range(50_000, 10_000);
        assert_eq!((query.min_price, query.max_price), (10_000, 50_000));

        query.set_price_range(-5, PRICE_CEILING + 1);
        assert_eq!((query.min_price, query.max_price), (0, PRICE_CEILING));
    }

    #[test]
    fn params_cover_all_six_fields() {
        let query = CatalogQuery {
            search: "mouse".to_string(),
            sort_by: SortKey::Price,
            order: SortOrder::Desc,
            ..CatalogQuery::default()
        };
        let params = query.to_params();
        assert_eq!(params.len(), 6);
        assert!(params.contains(&("search", "mouse".to_string())));
        assert!(params.contains(&("minPrice", "0".to_string())));
        assert!(params.contains(&("maxPrice", "180000".to_string())));
        assert!(params.contains(&("sortBy", "price".to_string())));
        assert!(params.contains(&("order", "desc".to_string())));
    }

    #[test]
    fn sort_wire_names_round_trip() {
        assert_eq!(SortKey::from_str(SortKey::Price.as_str()), SortKey::Price);
        assert_eq!(SortKey::from_str("unknown"), SortKey::Title);
        assert_eq!(
            SortOrder::from_str(SortOrder::Desc.as_str()),
            SortOrder::Desc
        );
        assert_eq!(SortOrder::from_str(""), SortOrder::Asc);
    }
}
