use anyhow::Result;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;
use std::path::PathBuf;

use imgfetch::BatchDownloader;

const URL_LIST_FILE: &str = "image_urls.txt";
const OUTPUT_DIR: &str = "public/images";

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("imgfetch")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "imgfetch_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(LevelFilter::Info, config, fs::File::create(log_file)?)?;

    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    info!("imgfetch starting");
    info!("URL list: {}", URL_LIST_FILE);
    info!("Output directory: {}", OUTPUT_DIR);

    let downloader = BatchDownloader::new(
        PathBuf::from(URL_LIST_FILE),
        PathBuf::from(OUTPUT_DIR),
    );

    match downloader.run() {
        Ok(()) => {
            info!("Batch finished");
            Ok(())
        }
        Err(e) => {
            error!("Batch aborted: {:#}", e);
            Err(e)
        }
    }
}
