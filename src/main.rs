fn main() {
    gensync::app::cli::run();
}
