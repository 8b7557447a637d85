fn main() {
    rquests::cli::run();
}
