use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=LIBSR_LIB_DIR");
    println!("cargo:rerun-if-env-changed=LIBSR_STATIC");

    if env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    // libtool drops the built library under build/src/.libs by default
    if let Some(dir) = env::var_os("LIBSR_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }

    let kind = if env::var_os("LIBSR_STATIC").is_some() {
        "static"
    } else {
        "dylib"
    };
    println!("cargo:rustc-link-lib={kind}=sr");
    if kind == "static" {
        // paleo uses libm for its geometry
        println!("cargo:rustc-link-lib=m");
    }
}
