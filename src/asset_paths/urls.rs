/// Join a walked asset path onto the URL prefix it is served from.
///
/// Each segment of `relative_path` is percent-encoded, so names containing `#`, `?` or spaces
/// still produce valid `href`/`src` attributes. Backslashes are treated as separators only on
/// Windows; elsewhere they are part of the file name. The prefix is used as configured.
pub fn make_static_url(prefix: &str, relative_path: &str) -> String {
    let encoded: Vec<_> = relative_path
        .split(is_path_separator)
        .filter(|segment| !segment.is_empty())
        .map(urlencoding::encode)
        .collect();

    format!("{}/{}", prefix.trim_end_matches('/'), encoded.join("/"))
}

#[cfg(windows)]
fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

#[cfg(not(windows))]
fn is_path_separator(c: char) -> bool {
    c == '/'
}

/// Last non-empty segment of a configured directory, used as its URL component.
///
/// `public/css` is served as `css`, `public/lib/` as `lib`.
pub fn url_segment(dir: &str) -> &str {
    let is_separator = |c: char| c == '/' || c == '\\';
    dir.trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{make_static_url, url_segment};

    #[test]
    fn joins_prefix_and_relative_paths() {
        assert_eq!(
            make_static_url("/static/css", "subdir/a.css"),
            "/static/css/subdir/a.css"
        );
    }

    #[test]
    fn collapses_duplicate_separators() {
        assert_eq!(make_static_url("/static/js/", "/app.js"), "/static/js/app.js");
    }

    #[cfg(windows)]
    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        assert_eq!(
            make_static_url("/static/css", "subdir\\b.css"),
            "/static/css/subdir/b.css"
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn keeps_backslashes_inside_unix_file_names() {
        assert_eq!(
            make_static_url("/static/css", "subdir\\b.css"),
            "/static/css/subdir%5Cb.css"
        );
    }

    #[test]
    fn percent_encodes_each_segment() {
        assert_eq!(
            make_static_url("/static/css", "my theme/a#b?.css"),
            "/static/css/my%20theme/a%23b%3F.css"
        );
        assert_eq!(
            make_static_url("/static/lib", "jquery-ui/jquery.min.js"),
            "/static/lib/jquery-ui/jquery.min.js"
        );
    }

    #[test]
    fn extracts_last_directory_segment() {
        assert_eq!(url_segment("public/css"), "css");
        assert_eq!(url_segment("public/lib/"), "lib");
        assert_eq!(url_segment("js"), "js");
        assert_eq!(url_segment(""), "");
    }
}
