use itertools::Itertools;

use crate::Item;

/// Returns the items in ascending order with duplicates removed.
///
/// Sorting first means duplicates are adjacent, so a single linear pass removes them.
pub(crate) fn canonicalize(items: impl IntoIterator<Item = Item>) -> Vec<Item> {
    items.into_iter().sorted_unstable().dedup().collect()
}
