//! Host-side helper: `cargo run` builds the wasm package into `static/pkg`
//! and serves `static/` on `DEMOS_PORT` (default 8000).

use std::env;
use std::process::{self, Command};

use gl_demos::logging::{init_logging, LoggingConfig};
use gl_demos::DemoKind;

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("DEMOS_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("DEMOS_PORT=`{raw}` is not a port, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() {
    let level = env::var("RUST_LOG").ok();
    init_logging(LoggingConfig::from_filter(level.as_deref()));

    log::info!("building wasm package …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            log::error!("wasm-pack finished with errors");
            process::exit(1);
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH; serving whatever is already in static/pkg");
        }
    }

    let port = port();
    for kind in DemoKind::ALL {
        log::info!("http://127.0.0.1:{port}/{kind}.html");
    }

    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status();
    match status {
        Ok(st) if st.success() => {}
        Ok(st) => log::error!("http server exited with {st}"),
        Err(err) => {
            log::error!("could not start python3 http.server: {err}");
            process::exit(1);
        }
    }
}
