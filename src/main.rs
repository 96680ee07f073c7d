//! dragnet CLI binary
//!
//! Minimal entrypoint; all logic lives in the library and cli::run().

fn main() {
    if let Err(err) = dragnet::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
