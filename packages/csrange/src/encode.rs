use std::fmt;

use itertools::Itertools;

use crate::Item;
use crate::canonical::canonicalize;

/// Generates the shortest [comma separated range list][crate] that represents the given items.
///
/// The input may be in any order and may contain duplicates. Consecutive items are coalesced
/// into `first-last` ranges and the resulting tokens are emitted in ascending order, so the
/// output can be parsed back by [`decode()`][crate::decode]. An empty input produces an empty
/// string.
#[must_use]
pub fn encode(items: impl IntoIterator<Item = Item>) -> String {
    runs(canonicalize(items)).join(",")
}

/// Groups ascending, duplicate-free items into maximal runs of consecutive values.
fn runs(sorted: Vec<Item>) -> impl Iterator<Item = Run> {
    sorted
        .into_iter()
        .map(Run::single)
        .coalesce(Run::try_extend)
}

/// An inclusive range of consecutive items, `first <= last`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Run {
    first: Item,
    last: Item,
}

impl Run {
    const fn single(item: Item) -> Self {
        Self {
            first: item,
            last: item,
        }
    }

    /// Merges `next` into this run if it starts right after this run ends, otherwise hands both
    /// back unchanged.
    fn try_extend(self, next: Self) -> Result<Self, (Self, Self)> {
        // At Item::MAX there is no successor, so nothing can follow.
        if self.last.checked_add(1) == Some(next.first) {
            Ok(Self {
                first: self.first,
                last: next.last,
            })
        } else {
            Err((self, next))
        }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}
