// Input and error types shared between `run()` and the `csrange` binary, which fills in
// `RunInput` from its flags and turns `RunError` into a message on stderr.

use std::io;

use csrange::SplitPolicy;
use thiserror::Error;

/// Input parameters for the `run` function.
///
/// This is the parsed input that the core logic operates on, with the range list already
/// resolved from either standard input or the command line.
#[doc(hidden)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is a hidden struct for internal/test use only"
)]
pub struct RunInput {
    /// The range list to process.
    pub csr: String,
    /// Print the individual integers instead of a compact range list.
    pub integers: bool,
    /// Append a line with the number of integers printed.
    pub count: bool,
    /// Number of buckets to divide the integers into. `None` means no splitting.
    pub split: Option<usize>,
    /// How to distribute integers between buckets.
    pub policy: SplitPolicy,
    /// Print only this bucket (1-based).
    pub bucket: Option<usize>,
}

/// Errors that can occur when running the tool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    /// No range list was given on the command line or via standard input.
    #[error("please provide a comma separated range list via argument or standard input")]
    MissingInput,

    /// Piped standard input could not be read, for example because it is not valid UTF-8.
    #[error("failed to read standard input: {0}")]
    Input(#[source] io::Error),

    /// The range list could not be decoded.
    #[error("parsing error: {0}")]
    Decode(#[from] csrange::Error),

    /// The selected bucket does not exist.
    #[error("bucket {bucket} is out of range, there are {buckets} buckets numbered from 1")]
    BucketOutOfRange {
        /// The requested bucket (1-based).
        bucket: usize,
        /// The number of buckets the integers were split into.
        buckets: usize,
    },

    /// The result could not be written out.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
