use gl_practice_star::Variant;

fn main() {
    env_logger::init();
    gl_practice_star::run(&Variant::STAR)
}
