fn main() {
    missile_pool::game::run();
}
