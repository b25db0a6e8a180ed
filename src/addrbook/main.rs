mod cli;

fn main() {
    // Session problems are reported as they happen; the exit status stays 0.
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
    }
}
