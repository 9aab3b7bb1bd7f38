fn main() {
    println!("cargo:rerun-if-changed=opengl32.def");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let pointer_width = std::env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    if target_os != "windows" || pointer_width != "32" {
        return;
    }

    // Keeps the stdcall exports undecorated on 32-bit targets.
    let def = format!("{}/opengl32.def", std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    match std::env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default().as_str() {
        "msvc" => println!("cargo:rustc-cdylib-link-arg=/DEF:{}", def),
        "gnu" => println!("cargo:rustc-cdylib-link-arg={}", def),
        _ => {}
    }
}
