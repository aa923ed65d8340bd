use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/bindings.rs");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    match cbindgen::Builder::new()
        .with_src(crate_dir.join("src").join("bindings.rs"))
        .with_language(cbindgen::Language::C)
        .with_include_guard("SU2GRID_H")
        .with_sys_include("stdint.h")
        .with_sys_include("stddef.h")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(out_dir.join("su2grid.h"));
        }
        Err(e) => println!("cargo:warning=Could not generate C header: {e}"),
    }
}
