use std::env;
use std::fs;
use std::path::Path;

// Copy the runtime files next to the built executable so Config::load and
// ServiceCatalog::load find them from the exe directory.
const RUNTIME_FILES: [&str; 2] = ["config.toml", "services.json"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    for file in RUNTIME_FILES {
        println!("cargo:rerun-if-changed={}", file);
        let source = Path::new(file);
        if source.exists() {
            fs::copy(source, target_dir.join(file)).unwrap();
        }
    }
}
