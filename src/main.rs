fn main() {
    if let Err(e) = textsift::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
