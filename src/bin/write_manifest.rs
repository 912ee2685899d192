//! Manifest utility for Autoquote model artifacts.
//!
//! Hashes the model files in a directory and writes `manifest.json` next to
//! them, so the application can detect a swapped or truncated model.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin write_manifest -- <model_dir | model.json> [--file <name>]...
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use autoquote::adapters::manifest::{ModelManifest, MODEL_FILE};
use autoquote::adapters::XgboostModel;
use autoquote::ports::PriceModel;

fn usage() -> String {
    "Usage: write_manifest <model_dir> [--file <name>]...".to_string()
}

fn parse_args() -> Result<(PathBuf, Vec<String>)> {
    let mut args = env::args().skip(1);
    let mut model_dir: Option<PathBuf> = None;
    let mut files: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                let v = args.next().ok_or_else(|| anyhow::anyhow!(usage()))?;
                files.push(v);
            }
            "-h" | "--help" => bail!(usage()),
            _ => {
                if model_dir.is_some() {
                    bail!(usage());
                }
                model_dir = Some(PathBuf::from(arg));
            }
        }
    }

    let model_dir = model_dir.ok_or_else(|| anyhow::anyhow!(usage()))?;
    Ok((model_dir, files))
}

fn main() -> Result<()> {
    let (model_path, mut files) = parse_args()?;

    let model_dir = if model_path.is_file() {
        model_path
            .parent()
            .context("Model path has no parent directory")?
            .to_path_buf()
    } else {
        model_path
    };

    if !files.iter().any(|f| f == MODEL_FILE) {
        files.insert(0, MODEL_FILE.to_string());
    }

    // Refuse to bind an artifact the application could not load.
    let model = XgboostModel::load(&model_dir.join(MODEL_FILE), false)
        .with_context(|| format!("{MODEL_FILE} in {model_dir:?} is not a loadable model"))?;

    let refs: Vec<&str> = files.iter().map(String::as_str).collect();
    let manifest = ModelManifest::for_files(&model_dir, &refs)?;
    let path = manifest.write(&model_dir)?;

    println!("Wrote manifest: {path:?}");
    for (rel, digest) in &manifest.files {
        println!("  {rel}  sha256={digest}");
    }
    println!(
        "Model: {} tree(s), {} feature(s), objective {}",
        model.num_trees(),
        model.num_features(),
        model.objective()
    );

    Ok(())
}
