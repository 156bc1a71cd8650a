#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the csrange tool.
//!
//! Only the process-bound parts live here: flag parsing, reading piped stdin and mapping the
//! outcome to an `ExitCode`. Those are exercised by the integration tests that spawn the binary,
//! so this module is excluded from coverage and mutation testing.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use argh::FromArgs;
use csrange::SplitPolicy;
use csrange_cli::{RunError, RunInput, read_piped_input, resolve_input, run};

const PROGRAM_NAME: &str = "csrange";

/// Expand, compact and split comma separated integer range lists such as "1,4-39,199,200-201".
#[derive(FromArgs)]
struct Args {
    /// print the individual integers instead of a compact range list
    #[argh(switch, short = 'i')]
    integers: bool,

    /// append a line with the number of integers printed
    #[argh(switch, short = 'c')]
    count: bool,

    /// divide the integers into this many buckets, printing each bucket on its own line
    #[argh(option, short = 's')]
    split: Option<usize>,

    /// keep consecutive integers together when splitting instead of dealing them out round-robin
    #[argh(switch)]
    contiguous: bool,

    /// print only this bucket, numbered from 1
    #[argh(option, short = 'b')]
    bucket: Option<usize>,

    /// the range list; ignored if a range list is piped to standard input
    #[argh(positional)]
    csr: Option<String>,
}

// Covered by the subprocess tests in tests/integration_tests.rs.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let piped = match piped_input() {
        Ok(piped) => piped,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let csr = match resolve_input(piped.as_deref(), args.csr.as_deref()) {
        Ok(csr) => csr,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let input = RunInput {
        csr,
        integers: args.integers,
        count: args.count,
        split: args.split,
        policy: if args.contiguous {
            SplitPolicy::Contiguous
        } else {
            SplitPolicy::Interleaved
        },
        bucket: args.bucket,
    };

    match run(&input, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ RunError::Decode(_)) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reads standard input unless it is an interactive terminal.
///
/// Any non-terminal stdin is read to the end, not only pipes: a redirected file, a socket or a
/// pipe whose writer never closes it all count. Reading blocks until end of input, so a stdin
/// that never signals EOF makes the tool hang. Redirect stdin from `/dev/null` to pass the range
/// list as an argument in such environments.
#[cfg_attr(test, mutants::skip)]
fn piped_input() -> Result<Option<String>, RunError> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        return Ok(None);
    }

    read_piped_input(stdin).map(Some)
}

/// The help text argh would print for `--help`.
#[cfg_attr(test, mutants::skip)]
fn usage() -> String {
    match Args::from_args(&[PROGRAM_NAME], &["--help"]) {
        Ok(_) => String::new(),
        Err(early_exit) => early_exit.output,
    }
}
