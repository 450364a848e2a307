fn main() {
    if let Err(e) = neon_nexus_lib::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
