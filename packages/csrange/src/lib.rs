#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for decoding, encoding and partitioning comma separated range lists, a compact
//! textual form for large sparse sets of non-negative integers such as ports, IDs or offsets.
//!
//! Example range list: `1,4-39,199,200-201,400`
//!
//! # Format
//!
//! The value is a comma-separated list of one or more tokens, where each token is either:
//!
//! * a single integer (e.g. `1`)
//! * an inclusive range of integers (e.g. `2-4`, equivalent to `2,3,4`)
//!
//! Leading and trailing commas are ignored. Whitespace or other extra characters are not allowed.
//! Ranges must not be inverted (`4-2` is an error) and negative numbers are not supported.
//!
//! The items in the list are of type [`Item`] (`u64`). A decoded list is always sorted in
//! ascending order with duplicates removed.
//!
//! # Example
//!
//! Basic conversion from/to strings:
//!
//! ```
//! let ports = csrange::decode("1,4-6,8").unwrap();
//! assert_eq!(ports, vec![1, 4, 5, 6, 8]);
//!
//! println!("Ports: {ports:?}");
//! println!("As range list: {}", csrange::encode(ports));
//! ```
//!
//! The encoder accepts items in any order and produces the shortest possible list:
//!
//! ```
//! assert_eq!(csrange::encode([8, 6, 5, 4, 1, 6]), "1,4-6,8");
//! ```
//!
//! # Splitting
//!
//! A set of items can be divided into work units, either round-robin or in contiguous blocks.
//! Contiguous blocks keep consecutive items together, so each bucket re-encodes compactly:
//!
//! ```
//! use csrange::SplitPolicy;
//!
//! let buckets = SplitPolicy::Contiguous.split_str(3, "1-7").unwrap();
//! assert_eq!(buckets, vec!["1-3", "4-6", "7"]);
//!
//! let buckets = SplitPolicy::Interleaved.split_str(3, "1-7").unwrap();
//! assert_eq!(buckets, vec!["1,4,7", "2,5", "3,6"]);
//! ```

mod canonical;
mod decode;
mod encode;
mod error;
mod partition;

pub use decode::*;
pub use encode::*;
pub use error::*;
pub use partition::*;

/// The type of the integers in a comma separated range list.
pub type Item = u64;
