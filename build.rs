use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds run the dry-run binary and the tests, no linker scripts
    let target = env::var("TARGET").unwrap_or_default();
    if !is_firmware_target(&target) {
        return;
    }

    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    println!("cargo:rustc-link-arg-bins=-Tmemory.x");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

// Nios V cores, e.g. riscv32imc-unknown-none-elf or riscv32ima-unknown-none-elf
fn is_firmware_target(target: &str) -> bool {
    target.starts_with("riscv32") && target.ends_with("-unknown-none-elf")
}
