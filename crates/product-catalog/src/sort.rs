//! Display ordering of the product list.
//!
//! Sorting never touches store order: [`sort_products`] returns a sorted view of borrowed
//! products.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

/// The key the product list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Name,
    Count,
    Weight,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Count => "count",
            SortOrder::Weight => "weight",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortOrder::Name),
            "count" => Ok(SortOrder::Count),
            "weight" => Ok(SortOrder::Weight),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}

/// Returns `products` ordered by `order`. Equal elements keep their input order.
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, order));
    sorted
}

/// Compares two products by `order`.
///
/// Ties on name or weight are broken by count.
pub fn compare(a: &Product, b: &Product, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Name => compare_names(&a.name, &b.name).then(a.count.cmp(&b.count)),
        SortOrder::Count => a.count.cmp(&b.count),
        SortOrder::Weight => leading_integer(&a.weight)
            .cmp(&leading_integer(&b.weight))
            .then(a.count.cmp(&b.count)),
    }
}

// Case-insensitive first, so "apple" sorts next to "Apple" rather than after "Zebra".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reads the integer at the start of a weight such as `" 250g"` or `"-3 lb"`.
///
/// Leading whitespace is skipped, a sign is optional, and everything after the digits is
/// ignored. Returns `None` when no digit follows. `None` orders before every number.
pub fn leading_integer(weight: &str) -> Option<i64> {
    let rest = weight.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
