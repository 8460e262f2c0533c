use std::env;

fn main() {
    // AVR link configuration; host builds (unit tests) need none of it.
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega328p");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
