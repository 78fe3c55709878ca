//! BundleBench binary entry point.
//!
//! Exit status is 0 only for a fully successful run; every detected failure
//! terminates with a non-zero status and a diagnostic naming the failing
//! command or variant.

fn main() {
    if let Err(error) = bundlebench_cli::run() {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}
