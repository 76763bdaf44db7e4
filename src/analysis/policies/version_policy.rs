use std::cmp::Ordering;

/// VersionPolicy orders Maven version strings
///
/// A version is split into items at `.`, `-`, `_` and at every switch
/// between digits and letters. Numeric items compare as numbers. Qualifiers
/// rank `alpha < beta < milestone < rc < snapshot < release < sp`, unknown
/// qualifiers sort after `sp` alphabetically. A missing item reads as `0`
/// against a number and as a release against a qualifier, so `1.0 == 1.0.0`
/// and `1.0-rc1 < 1.0`.
pub struct VersionPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Number(u64),
    Qualifier(String),
}

impl VersionPolicy {
    pub fn compare(left: &str, right: &str) -> Ordering {
        let left = Self::items(left);
        let right = Self::items(right);

        for index in 0..left.len().max(right.len()) {
            let ordering = match (left.get(index), right.get(index)) {
                (Some(l), Some(r)) => Self::compare_items(l, r),
                (Some(l), None) => Self::compare_items(l, &Self::padding_for(l)),
                (None, Some(r)) => Self::compare_items(&Self::padding_for(r), r),
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Highest version of the given candidates
    pub fn latest<'a>(versions: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        versions
            .into_iter()
            .max_by(|left, right| Self::compare(left, right))
    }

    fn items(version: &str) -> Vec<Item> {
        let mut items = Vec::new();
        let mut current = String::new();
        let mut current_is_digit = false;

        for ch in version.trim().chars() {
            if matches!(ch, '.' | '-' | '_') {
                Self::flush(&mut current, &mut items);
                continue;
            }
            let is_digit = ch.is_ascii_digit();
            if !current.is_empty() && is_digit != current_is_digit {
                Self::flush(&mut current, &mut items);
            }
            current_is_digit = is_digit;
            current.push(ch.to_ascii_lowercase());
        }
        Self::flush(&mut current, &mut items);
        items
    }

    fn flush(current: &mut String, items: &mut Vec<Item>) {
        if current.is_empty() {
            return;
        }
        let item = match current.parse::<u64>() {
            Ok(number) => Item::Number(number),
            Err(_) if current.bytes().all(|b| b.is_ascii_digit()) => Item::Number(u64::MAX),
            Err(_) => Item::Qualifier(std::mem::take(current)),
        };
        current.clear();
        items.push(item);
    }

    fn padding_for(item: &Item) -> Item {
        match item {
            Item::Number(_) => Item::Number(0),
            Item::Qualifier(_) => Item::Qualifier(String::new()),
        }
    }

    fn compare_items(left: &Item, right: &Item) -> Ordering {
        match (left, right) {
            (Item::Number(l), Item::Number(r)) => l.cmp(r),
            (Item::Number(_), Item::Qualifier(_)) => Ordering::Greater,
            (Item::Qualifier(_), Item::Number(_)) => Ordering::Less,
            (Item::Qualifier(l), Item::Qualifier(r)) => Self::qualifier_rank(l)
                .cmp(&Self::qualifier_rank(r))
                .then_with(|| l.cmp(r)),
        }
    }

    fn qualifier_rank(qualifier: &str) -> u8 {
        match qualifier {
            "alpha" | "a" => 0,
            "beta" | "b" => 1,
            "milestone" | "m" => 2,
            "rc" | "cr" => 3,
            "snapshot" => 4,
            "" | "ga" | "final" | "release" => 5,
            "sp" => 6,
            _ => 7,
        }
    }
}
