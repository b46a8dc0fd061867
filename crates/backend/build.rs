use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../menus");

    // OUT_DIR is typically target/debug/build/backend-xxx/out,
    // the binary lands in target/debug or target/release
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Sample menu documents next to the binary, so `menus` resolves there
    let source_menus = workspace_root.join("menus");
    if source_menus.is_dir() {
        let dest_menus = target_dir.join("menus");
        fs::create_dir_all(&dest_menus)
            .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest_menus, e));
        for entry in fs::read_dir(&source_menus).expect("Failed to read menus directory") {
            let path = entry.expect("Failed to read menus entry").path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name() {
                fs::copy(&path, dest_menus.join(name))
                    .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
            }
        }
    }
}
