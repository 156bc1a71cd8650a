use crate::{Item, decode, encode};

/// Selects how [`SplitPolicy::split()`] distributes items between buckets.
///
/// Both policies share the same guarantees:
///
/// * Splitting into zero buckets returns an empty list of buckets.
/// * Splitting into one bucket returns the whole input as that bucket.
/// * Otherwise exactly `n` buckets are returned, some of which may be empty, and every input item
///   lands in exactly one bucket.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SplitPolicy {
    /// Deals the items out round-robin: the item at position `p` goes to bucket `p % n`.
    ///
    /// This gives the most even bucket sizes but the buckets rarely contain consecutive items,
    /// so their encoded form tends to be long.
    #[default]
    Interleaved,

    /// Slices the input into consecutive blocks of `ceil(len / n)` items, the last block
    /// possibly shorter.
    ///
    /// Sorted input yields buckets of consecutive items, which encode to short range lists.
    Contiguous,
}

impl SplitPolicy {
    /// Divides `items` into `n` buckets according to this policy.
    ///
    /// Input order is preserved within each bucket. The input does not need to be sorted.
    #[must_use]
    pub fn split(self, n: usize, items: &[Item]) -> Vec<Vec<Item>> {
        match n {
            0 => Vec::new(),
            1 => vec![items.to_vec()],
            _ => match self {
                Self::Interleaved => interleave(n, items),
                Self::Contiguous => slice_contiguous(n, items),
            },
        }
    }

    /// Decodes a [comma separated range list][crate], divides it into `n` buckets according to
    /// this policy and encodes each bucket back into a comma separated range list.
    ///
    /// Fails if the input cannot be decoded, in which case no buckets are produced.
    pub fn split_str(self, n: usize, text: &str) -> crate::Result<Vec<String>> {
        let items = decode(text)?;

        Ok(self
            .split(n, &items)
            .into_iter()
            .map(encode)
            .collect())
    }
}

/// Divides `items` into `n` buckets round-robin.
///
/// See [`SplitPolicy::Interleaved`].
#[must_use]
pub fn split_interleaved(n: usize, items: &[Item]) -> Vec<Vec<Item>> {
    SplitPolicy::Interleaved.split(n, items)
}

/// Divides `items` into `n` buckets of consecutive input positions.
///
/// See [`SplitPolicy::Contiguous`].
#[must_use]
pub fn split_contiguous(n: usize, items: &[Item]) -> Vec<Vec<Item>> {
    SplitPolicy::Contiguous.split(n, items)
}

/// Splits a [comma separated range list][crate] into `n` range lists round-robin.
///
/// See [`SplitPolicy::split_str()`].
pub fn split_interleaved_str(n: usize, text: &str) -> crate::Result<Vec<String>> {
    SplitPolicy::Interleaved.split_str(n, text)
}

/// Splits a [comma separated range list][crate] into `n` range lists of consecutive items.
///
/// See [`SplitPolicy::split_str()`].
pub fn split_contiguous_str(n: usize, text: &str) -> crate::Result<Vec<String>> {
    SplitPolicy::Contiguous.split_str(n, text)
}

// `n` must be non-zero.
fn interleave(n: usize, items: &[Item]) -> Vec<Vec<Item>> {
    (0..n)
        .map(|offset| items.iter().skip(offset).step_by(n).copied().collect())
        .collect()
}

// `n` must be non-zero.
fn slice_contiguous(n: usize, items: &[Item]) -> Vec<Vec<Item>> {
    let block_size = items.len().div_ceil(n);

    let mut buckets: Vec<Vec<Item>> = if block_size == 0 {
        Vec::new()
    } else {
        items.chunks(block_size).map(<[Item]>::to_vec).collect()
    };

    // There are never more blocks than buckets but there may be fewer.
    buckets.resize_with(n, Vec::new);

    buckets
}
