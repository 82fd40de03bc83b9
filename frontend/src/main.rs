fn main() {
    threebus_frontend::start();
}
