//! Build script for blocktime-firmware
//!
//! memory.x is generated by embassy-stm32's `memory-x` feature; this only
//! adds the linker scripts cortex-m-rt and defmt need.

fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}
