/// Derives a local filename from a URL: the substring after the last `/`,
/// with any `?`-delimited query suffix discarded.
///
/// Purely textual, no URL parsing. A URL ending in `/` yields an empty
/// name; the caller's file write then fails and is reported per-item.
/// Two URLs with the same last segment collide silently (last write wins).
pub fn derived_filename(url: &str) -> &str {
    let tail = url.rsplit('/').next().unwrap_or(url);
    tail.split('?').next().unwrap_or(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_query_suffix() {
        assert_eq!(
            derived_filename("https://example.com/a/b/pic.jpg?size=large"),
            "pic.jpg"
        );
    }

    #[test]
    fn no_query() {
        assert_eq!(derived_filename("https://example.com/file"), "file");
        assert_eq!(derived_filename("https://example.com/a/b/photo.png"), "photo.png");
    }

    #[test]
    fn trailing_slash_yields_empty_name() {
        assert_eq!(derived_filename("https://example.com/a/"), "");
    }

    #[test]
    fn query_only_tail() {
        assert_eq!(derived_filename("https://example.com/img?x=1&y=2"), "img");
    }
}
