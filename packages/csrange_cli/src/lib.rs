#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A command line tool to expand, compact and split comma separated integer range lists.
//!
//! This crate provides the core logic of the tool, exposed via the [`run`] function.
//! The binary entry point is in `main.rs`.

mod types;

use std::io::{self, Read, Write};

use csrange::Item;
use itertools::Itertools;
pub use types::*;

/// Reads the whole of `reader` as text.
///
/// This blocks until `reader` reports end of input. Read failures, including input that is not
/// valid UTF-8, are returned instead of being treated as missing input.
#[doc(hidden)]
pub fn read_piped_input(reader: impl Read) -> Result<String, RunError> {
    io::read_to_string(reader).map_err(RunError::Input)
}

/// Selects the range list to process from piped standard input and the command line argument.
///
/// Non-empty standard input takes precedence over the argument. Surrounding whitespace is
/// removed from standard input, as piped text usually ends with a newline.
#[doc(hidden)]
pub fn resolve_input(piped: Option<&str>, argument: Option<&str>) -> Result<String, RunError> {
    piped
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .or_else(|| argument.filter(|text| !text.is_empty()))
        .map(str::to_string)
        .ok_or(RunError::MissingInput)
}

/// Core logic of the tool, extracted for testability.
///
/// Decodes the range list, optionally splits it into buckets and writes each selected bucket to
/// `out` on its own line, followed by the count line if requested. Nothing is written if the
/// input cannot be decoded or the bucket selection is invalid.
#[doc(hidden)]
pub fn run(input: &RunInput, out: &mut impl Write) -> Result<(), RunError> {
    let items = csrange::decode(&input.csr)?;

    let bucket_count = input.split.unwrap_or(1);
    let mut buckets = input.policy.split(bucket_count, &items);

    if let Some(bucket) = input.bucket {
        let selected = bucket
            .checked_sub(1)
            .filter(|index| *index < buckets.len())
            .ok_or(RunError::BucketOutOfRange {
                bucket,
                buckets: bucket_count,
            })?;

        buckets = vec![buckets.swap_remove(selected)];
    }

    for bucket in &buckets {
        writeln!(out, "{}", format_bucket(bucket, input.integers))?;
    }

    if input.count {
        let total: usize = buckets.iter().map(Vec::len).sum();
        writeln!(out)?;
        writeln!(out, "count: {total}")?;
    }

    Ok(())
}

fn format_bucket(bucket: &[Item], integers: bool) -> String {
    if integers {
        bucket.iter().join(",")
    } else {
        csrange::encode(bucket.iter().copied())
    }
}
