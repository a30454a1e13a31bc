//! Embeds the public notes API location into the bundle.
//!
//! `NOTEGRID_API_BASE_URL` comes from the environment or the workspace `.env`
//! and is written to `OUT_DIR/web-bootstrap.json` for `bootstrap_config.rs`.

use std::path::Path;
use std::{env, fs};

const API_BASE_URL_VAR: &str = "NOTEGRID_API_BASE_URL";

fn main() {
    println!("cargo:rerun-if-env-changed={API_BASE_URL_VAR}");

    let Some(out_dir) = env::var_os("OUT_DIR") else {
        println!("cargo:warning=OUT_DIR is not set; web bootstrap config not written");
        return;
    };

    let dotenv = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.env");
    if dotenv.is_file() {
        println!("cargo:rerun-if-changed={}", dotenv.display());
        dotenvy::from_path(&dotenv).ok();
    }

    let api_base_url = env::var(API_BASE_URL_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let bootstrap = serde_json::json!({ "api_base_url": api_base_url });

    let target = Path::new(&out_dir).join("web-bootstrap.json");
    if let Err(error) = fs::write(&target, bootstrap.to_string()) {
        println!("cargo:warning=failed to write {}: {error}", target.display());
    }
}
