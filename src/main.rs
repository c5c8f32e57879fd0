fn main() {
    bevy_weapon::game::run();
}
