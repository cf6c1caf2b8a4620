//! Render `<link>` and `<script>` tags for a page's assets.

use htmlescape::encode_minimal;

use crate::models::PageAssets;

/// Stylesheet link tag for `href`.
pub fn stylesheet_tag(href: &str) -> String {
    format!(
        r#"<link rel="stylesheet" href="{}">"#,
        encode_minimal(href)
    )
}

/// Script tag loading `src`.
pub fn script_tag(src: &str) -> String {
    format!(r#"<script src="{}"></script>"#, encode_minimal(src))
}

/// Render every asset tag of a page, one per line.
///
/// Library stylesheets come before the application's own so local rules override them;
/// scripts follow the same order so application code can use the libraries.
pub fn render_head(assets: &PageAssets) -> String {
    let stylesheets = assets
        .dependency_stylesheets
        .iter()
        .chain(&assets.stylesheets)
        .map(|href| stylesheet_tag(href));
    let scripts = assets
        .dependency_scripts
        .iter()
        .chain(&assets.scripts)
        .map(|src| script_tag(src));

    let mut html = String::new();
    for tag in stylesheets.chain(scripts) {
        html.push_str(&tag);
        html.push('\n');
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_attribute_values() {
        let tag = stylesheet_tag(r#"/static/css/odd"name.css"#);
        assert!(!tag.contains(r#"odd"name"#));
        assert!(tag.starts_with(r#"<link rel="stylesheet" href="/static/css/odd"#));
    }

    #[test]
    fn renders_libraries_before_application_assets() {
        let assets = PageAssets {
            dependency_stylesheets: vec!["/static/lib/bootstrap/bootstrap.css".into()],
            dependency_scripts: vec!["/static/lib/jquery/jquery.js".into()],
            stylesheets: vec!["/static/css/site.css".into()],
            scripts: vec!["/static/js/app.js".into()],
        };

        let html = render_head(&assets);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines, vec![
            r#"<link rel="stylesheet" href="/static/lib/bootstrap/bootstrap.css">"#,
            r#"<link rel="stylesheet" href="/static/css/site.css">"#,
            r#"<script src="/static/lib/jquery/jquery.js"></script>"#,
            r#"<script src="/static/js/app.js"></script>"#,
        ]);
    }

    #[test]
    fn renders_nothing_without_assets() {
        assert!(render_head(&PageAssets::default()).is_empty());
    }
}
