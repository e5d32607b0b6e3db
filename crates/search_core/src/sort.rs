use std::cmp::Ordering;

use crate::ResultRecord;

/// Order two optional prices: numeric ascending, unpriced last and equal to each other.
pub fn compare_prices(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Stable ascending sort by numeric price; records without a finite price
/// trail in their original relative order.
pub fn sort_by_price(records: &mut [ResultRecord]) {
    records.sort_by(|a, b| compare_prices(a.numeric_price(), b.numeric_price()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpriced_compare_equal() {
        assert_eq!(compare_prices(None, None), Ordering::Equal);
        assert_eq!(compare_prices(None, Some(1.0)), Ordering::Greater);
        assert_eq!(compare_prices(Some(1.0), None), Ordering::Less);
        assert_eq!(compare_prices(Some(2.0), Some(1.0)), Ordering::Greater);
    }
}
