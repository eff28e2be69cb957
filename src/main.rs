fn main() {
    svcgen::app::cli::run();
}
