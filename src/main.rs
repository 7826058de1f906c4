//! Host-side helper: `cargo run` builds the wasm package into `static/pkg` and
//! serves `static/` on a local port.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: &str = "8000";

fn main() {
    let port = env::args().nth(1).unwrap_or_else(|| DEFAULT_PORT.to_string());

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may serve stale artifacts.");
        }
    }

    println!("Serving the page at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = server {
        eprintln!("failed to start http server: {e}");
        std::process::exit(1);
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
