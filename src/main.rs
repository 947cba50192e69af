fn main() {
    if let Err(e) = etoken_builder::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
