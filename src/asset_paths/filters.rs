/// Determine whether a directory entry should be left out of an asset walk.
///
/// Dotfiles (editor swap files, `.gitkeep`, `.DS_Store`) are never served to the browser,
/// so they are skipped the same way a shell `*` pattern would skip them.
pub fn is_hidden_entry(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::is_hidden_entry;

    #[test]
    fn hides_dotfiles() {
        assert!(is_hidden_entry(".gitkeep"));
        assert!(is_hidden_entry(".DS_Store"));
    }

    #[test]
    fn keeps_regular_names() {
        assert!(!is_hidden_entry("common.css"));
        assert!(!is_hidden_entry("jquery.min.js"));
    }
}
