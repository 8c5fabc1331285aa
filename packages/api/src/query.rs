//! Local derived views: substring filters, numeric ranges and sorting over the
//! in-memory list a view last fetched. Nothing here touches the network.

use std::cmp::Ordering;
use std::fmt;

/// Direction of a column sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `<select>` value. Empty means "unsorted".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn matches_text(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Inclusive range check with optional bounds.
pub fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Parse an optional numeric bound from a text input.
pub fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Stable sort by `key`. `None` leaves the fetched order untouched.
pub fn sort_by<T, K, F>(items: &mut [T], order: Option<SortOrder>, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if let Some(order) = order {
        items.sort_by(|a, b| {
            order.apply(key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_text_is_case_insensitive() {
        assert!(matches_text("Village A Road", "village a"));
        assert!(matches_text("anything", "  "));
        assert!(!matches_text("Village B", "Village A"));
    }

    #[test]
    fn test_within_open_bounds() {
        assert!(within(5.0, None, None));
        assert!(within(5.0, Some(5.0), None));
        assert!(!within(5.0, Some(6.0), None));
        assert!(within(5.0, None, Some(5.0)));
        assert!(!within(5.0, Some(1.0), Some(4.0)));
    }

    #[test]
    fn test_sort_by_order() {
        let mut values = vec![3, 1, 2];
        sort_by(&mut values, None, |v| *v);
        assert_eq!(values, vec![3, 1, 2]);
        sort_by(&mut values, Some(SortOrder::Asc), |v| *v);
        assert_eq!(values, vec![1, 2, 3]);
        sort_by(&mut values, Some(SortOrder::Desc), |v| *v);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse(""), None);
        assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
    }
}
