fn main() {
    kollege_frontend::run();
}
