use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the newline-delimited URL list, trimming whitespace and dropping
/// blank lines. Input order is preserved. A missing or unreadable file is
/// fatal to the run.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list {:?}", path))?;

    let urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::info!("Loaded {} URLs from {:?}", urls.len(), path);
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_list(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let file = write_list("https://a.example/1.png\n\n   \n  https://b.example/2.png  \n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["https://a.example/1.png", "https://b.example/2.png"]);
    }

    #[test]
    fn preserves_input_order() {
        let file = write_list("https://x/3\nhttps://x/1\nhttps://x/2\n");
        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["https://x/3", "https://x/1", "https://x/2"]);
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let file = write_list("");
        assert!(read_url_list(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_url_list(Path::new("/nonexistent/image_urls.txt")).is_err());
    }
}
