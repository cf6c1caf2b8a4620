//! Helpers for discovering static assets and turning them into site URLs.
//!
//! The walker produces paths relative to a static directory, the filters decide which
//! directory entries take part in a walk, and the URL helpers join walked paths onto the
//! prefix a browser requests them from. Each piece is tested on its own.

mod filters;
mod urls;
mod walk;

pub use filters::is_hidden_entry;
pub use urls::{make_static_url, url_segment};
pub use walk::{DEFAULT_MAX_DEPTH, WalkOptions, walk_asset_paths, walk_asset_paths_with};
