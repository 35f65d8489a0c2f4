//! Entry point for the `smartload` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    if let Err(err) = smartload_cli::run() {
        eprintln!("smartload: {err}");
        std::process::exit(1);
    }
}
