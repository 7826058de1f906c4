// Copies the static site (page, styles, and the wasm-pack output in
// `static/pkg` when present) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {e}");
        return;
    }

    let options = CopyOptions {
        overwrite: true,
        content_only: true,
        ..CopyOptions::new()
    };
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ failed: {e}");
    }
}
