pub mod batch;
pub mod download;
pub mod filename;
pub mod urls;

pub use batch::BatchDownloader;
