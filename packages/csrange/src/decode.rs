use itertools::Itertools;

use crate::canonical::canonicalize;
use crate::{Error, Item, RangeBound};

/// Decodes a [comma separated range list][crate] and returns the numeric items in ascending
/// order, removing duplicates.
///
/// Leading and trailing commas are ignored. Any other empty token, including the one produced by
/// an empty input string, is an error: an empty string does not decode to an empty set.
///
/// Decoding stops at the first invalid token and no partial result is returned.
///
/// # Resource usage
///
/// Ranges are expanded eagerly, so the cost of a range token is proportional to its width and
/// not to its length in text. `0-1000000000` allocates a billion items.
///
/// See [package-level documentation][crate] for details.
pub fn decode(text: &str) -> crate::Result<Vec<Item>> {
    let tokens = text.trim_matches(',').split(',');

    let item_ranges: crate::Result<Vec<Vec<Item>>> = tokens.map(decode_token).collect();

    item_ranges.map(|x| canonicalize(x.into_iter().flatten()))
}

/// Returns the number of distinct items in a [comma separated range list][crate].
///
/// Fails under the same conditions as [`decode()`].
pub fn count(text: &str) -> crate::Result<usize> {
    decode(text).map(|items| items.len())
}

fn decode_token(token: &str) -> crate::Result<Vec<Item>> {
    if token.contains('-') {
        decode_range(token)
    } else {
        decode_single(token).map(|item| vec![item])
    }
}

fn decode_range(token: &str) -> crate::Result<Vec<Item>> {
    let Some((first, last)) = token.split('-').collect_tuple() else {
        return Err(Error::MalformedToken {
            token: token.to_string(),
            problem: "range must consist of exactly two values separated by a dash".to_string(),
        });
    };

    let first = parse_bound(token, first, RangeBound::First)?;
    let last = parse_bound(token, last, RangeBound::Last)?;

    if first > last {
        return Err(Error::InvertedRange {
            token: token.to_string(),
            first,
            last,
        });
    }

    Ok((first..=last).collect())
}

fn parse_bound(token: &str, value: &str, bound: RangeBound) -> crate::Result<Item> {
    value
        .parse::<Item>()
        .map_err(|source| Error::NonIntegerBound {
            token: token.to_string(),
            bound,
            source,
        })
}

fn decode_single(token: &str) -> crate::Result<Item> {
    token.parse::<Item>().map_err(|inner| Error::MalformedToken {
        token: token.to_string(),
        problem: format!("value is not an integer ({inner})"),
    })
}
