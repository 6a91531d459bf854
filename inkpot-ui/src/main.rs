//! Inkpot front-end entry point

fn main() {
    inkpot_ui::start();
}
