fn main() {
    if let Err(err) = hello::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
