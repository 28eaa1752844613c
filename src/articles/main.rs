mod cli;

fn main() {
    // The exit status is always 0; failures are reported on stderr only.
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
    }
}
