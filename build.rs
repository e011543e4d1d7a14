//! Build script for the Playlist Dashboard.
//!
//! Places the `.env.example` template next to the `.env` file that
//! `config::load_env` reads, so the variables the gateway needs are
//! documented where they are configured:
//! - Linux: `~/.local/share/playlist-dashboard/.env.example`
//! - macOS: `~/Library/Application Support/playlist-dashboard/.env.example`
//! - Windows: `%LOCALAPPDATA%/playlist-dashboard/.env.example`

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", TEMPLATE);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(TEMPLATE);
    if !template.is_file() {
        println!("cargo:warning={} not found at {}", TEMPLATE, template.display());
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playlist-dashboard");

    // Sandboxed builds may not be able to write there; the template is optional.
    if let Err(e) = fs::create_dir_all(&out_dir) {
        println!("cargo:warning=cannot create {}: {}", out_dir.display(), e);
        return Ok(());
    }

    let target = out_dir.join(TEMPLATE);
    let contents = fs::read_to_string(&template)?;
    if fs::read_to_string(&target).ok().as_deref() != Some(contents.as_str()) {
        if let Err(e) = fs::write(&target, contents) {
            println!("cargo:warning=cannot write {}: {}", target.display(), e);
        }
    }

    Ok(())
}
