use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir)
        .join("../../V3dFFI.h")
        .display()
        .to_string();

    // C enumerators share one global scope; emit V3dConstant_X, V3dErrorCode_Ok, ...
    let mut config = cbindgen::Config::default();
    config.enumeration.prefix_with_name = true;

    // Generate C bindings using cbindgen; `V3d` itself lives in v3d-core
    cbindgen::Builder::new()
        .with_config(config)
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("V3D_FFI_H")
        .with_parse_deps(true)
        .with_parse_include(&["v3d-core"])
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_file);

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=../core/src/core_types/vec3.rs");
}
