//! Sort order checks with the shorthand/longhand exemption.

use serde::{Deserialize, Serialize};

/// Shorthand style properties. A shorthand and any property starting with its
/// name (`margin`/`marginLeft`) are never ordered against each other.
pub const SHORTHAND_PROPERTIES: &[&str] = &["margin", "padding", "border", "flex"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Whether `current` may follow `previous`.
    pub fn is_valid(&self, previous: &str, current: &str) -> bool {
        match self {
            Self::Asc => previous <= current,
            Self::Desc => previous >= current,
        }
    }
}

fn is_longhand_of(shorthand: &str, name: &str) -> bool {
    name.len() > shorthand.len() && name.starts_with(shorthand)
}

/// One name is a shorthand and the other one of its longhands.
pub fn is_either_shorthand(a: &str, b: &str) -> bool {
    SHORTHAND_PROPERTIES
        .iter()
        .any(|s| (a == *s && is_longhand_of(s, b)) || (b == *s && is_longhand_of(s, a)))
}

/// Index of the first entry out of order relative to its predecessor.
/// With `shorthand_aware`, shorthand/longhand neighbours are skipped.
pub fn first_violation(names: &[String], order: SortOrder, shorthand_aware: bool) -> Option<usize> {
    (1..names.len()).find(|&i| {
        let (previous, current) = (&names[i - 1], &names[i]);
        if shorthand_aware && is_either_shorthand(previous, current) {
            return false;
        }
        !order.is_valid(previous, current)
    })
}

/// Permutation putting `names` in `order`: `result[k]` is the original index of
/// the entry that belongs at position `k`. Equal names keep their relative order.
///
/// With `shorthand_aware`, a shorthand that has longhands in the run is taken
/// out of the sort and placed right before its longhands if it preceded them
/// originally, or right after them otherwise.
pub fn sorted_order(names: &[String], order: SortOrder, shorthand_aware: bool) -> Vec<usize> {
    let anchored: Vec<usize> = if shorthand_aware {
        (0..names.len())
            .filter(|&i| {
                SHORTHAND_PROPERTIES.contains(&names[i].as_str())
                    && names.iter().any(|other| is_longhand_of(&names[i], other))
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut result: Vec<usize> = (0..names.len()).filter(|i| !anchored.contains(i)).collect();
    result.sort_by(|&a, &b| match order {
        SortOrder::Asc => names[a].cmp(&names[b]),
        SortOrder::Desc => names[b].cmp(&names[a]),
    });

    for &shorthand in &anchored {
        let name = names[shorthand].as_str();
        let first_longhand = (0..names.len()).find(|&j| is_longhand_of(name, &names[j]));
        let precedes = first_longhand.is_some_and(|j| shorthand < j);
        let position = if precedes {
            result.iter().position(|&k| is_longhand_of(name, &names[k]))
        } else {
            result
                .iter()
                .rposition(|&k| names[k].starts_with(name))
                .map(|p| p + 1)
        };
        result.insert(position.unwrap_or(result.len()), shorthand);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn apply(names: &[String], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| names[i].clone()).collect()
    }

    #[test]
    fn shorthand_pairs_are_exempt_both_ways() {
        assert!(is_either_shorthand("margin", "marginLeft"));
        assert!(is_either_shorthand("paddingTop", "padding"));
        assert!(!is_either_shorthand("marginTop", "marginLeft"));
        assert!(!is_either_shorthand("margin", "backgroundColor"));
    }

    #[test]
    fn exempt_pairs_still_order_against_other_keys() {
        let names = owned(&["marginLeft", "margin", "backgroundColor"]);
        assert_eq!(first_violation(&names, SortOrder::Asc, true), Some(2));
        let names = owned(&["backgroundColor", "marginLeft", "margin"]);
        assert_eq!(first_violation(&names, SortOrder::Asc, true), None);
    }

    #[test]
    fn sorted_order_keeps_shorthand_next_to_longhands() {
        let names = owned(&["paddingTop", "zIndex", "padding", "alignItems"]);
        let sorted = apply(&names, &sorted_order(&names, SortOrder::Asc, true));
        assert_eq!(sorted, owned(&["alignItems", "paddingTop", "padding", "zIndex"]));
        assert_eq!(first_violation(&sorted, SortOrder::Asc, true), None);
    }

    #[test]
    fn desc_sort_is_stable_for_equal_names() {
        let names = owned(&["a", "b", "a"]);
        assert_eq!(sorted_order(&names, SortOrder::Desc, false), vec![1, 0, 2]);
    }
}
