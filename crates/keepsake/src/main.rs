//! # Keepsake CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination. Everything
//! from the `keepsakeapp` facade inward is UI agnostic; this crate owns all
//! user-facing concerns: argument parsing, configuration discovery, dispatch,
//! rendering, and exit codes.
//!
//! ## Sessions
//!
//! There is no persistence layer. Each invocation seeds a fresh in-memory
//! store from the embedded sample archive, applies the requested filters and
//! actions, and prints the resulting view. That makes the binary a live,
//! self-contained demo of the library's behavior.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
