use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};

use crate::download::{build_client, fetch_bytes};
use crate::filename::derived_filename;
use crate::urls::read_url_list;

/// Runs one batch: URL list in, one file per successful download out,
/// one status line per URL on stdout.
pub struct BatchDownloader {
    url_file: PathBuf,
    output_dir: PathBuf,
}

impl BatchDownloader {
    pub fn new(url_file: PathBuf, output_dir: PathBuf) -> Self {
        Self { url_file, output_dir }
    }

    /// Processes every URL in input order, sequentially. Per-item failures
    /// are printed and skipped; only setup errors (output directory, URL
    /// list, client) abort the run.
    pub fn run(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", self.output_dir))?;

        let urls = read_url_list(&self.url_file)?;
        let client = build_client()?;

        for url in &urls {
            let local_path = self.output_dir.join(derived_filename(url));

            match download_one(&client, url, &local_path) {
                Ok(()) => {
                    log::info!("Downloaded {} to {:?}", url, local_path);
                    println!("Downloaded: {} -> {}", url, local_path.display());
                }
                Err(e) => {
                    log::warn!("Download failed for {}: {:#}", url, e);
                    println!("Failed: {} ({:#})", url, e);
                }
            }
        }

        Ok(())
    }
}

/// Fetches the body first, then writes it, so a failed request never
/// creates or truncates the target file.
fn download_one(client: &Client, url: &str, local_path: &Path) -> Result<()> {
    let bytes = fetch_bytes(client, url)?;

    fs::write(local_path, &bytes)
        .with_context(|| format!("Failed to write {:?}", local_path))?;

    Ok(())
}
