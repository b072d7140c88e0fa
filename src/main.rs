fn main() {
    sitebind::app::cli::run();
}
