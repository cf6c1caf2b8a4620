//! Recursive discovery of the files below a static asset directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use same_file::Handle;

use crate::asset_paths::filters::is_hidden_entry;
use crate::error::AssetError;

/// Deepest directory nesting a walk descends into before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tuning knobs for [`walk_asset_paths_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum number of directory levels below the base directory.
    pub max_depth: usize,
    /// Sort the collected paths lexicographically instead of keeping listing order.
    pub sorted: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            sorted: false,
        }
    }
}

/// Collect every file below `base`, relative to `base`, using the default options.
///
/// See [`walk_asset_paths_with`].
pub fn walk_asset_paths(base: &Path) -> Result<Vec<String>, AssetError> {
    walk_asset_paths_with(base, WalkOptions::default())
}

/// Collect every file below `base` as a forward-slash path relative to `base`.
///
/// A directory's own files are listed first, followed by the results of each of its
/// subdirectories in listing order. Only regular files are returned. Symlinked directories
/// are followed, except when they lead back to one of their own ancestors.
///
/// A missing base directory produces an empty list. Any directory that cannot be read fails
/// the whole walk.
pub fn walk_asset_paths_with(base: &Path, options: WalkOptions) -> Result<Vec<String>, AssetError> {
    if !base.is_dir() {
        tracing::debug!(path = %base.display(), "asset directory missing, nothing to walk");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut pending = vec![PendingDir {
        path: base.to_path_buf(),
        prefix: String::new(),
        depth: 0,
        ancestors: None,
    }];

    while let Some(dir) = pending.pop() {
        let handle = Handle::from_path(&dir.path).map_err(|err| AssetError::io(&dir.path, err))?;
        if dir
            .ancestors
            .as_deref()
            .is_some_and(|ancestors| ancestors.contains(&handle))
        {
            tracing::warn!(
                path = %dir.path.display(),
                "skipping directory that links back to one of its parents"
            );
            continue;
        }
        if dir.depth > options.max_depth {
            return Err(AssetError::DepthExceeded {
                path: dir.path,
                limit: options.max_depth,
            });
        }
        let ancestors = Rc::new(Ancestor {
            handle,
            parent: dir.ancestors,
        });

        let mut subdirs = Vec::new();
        for entry in fs::read_dir(&dir.path).map_err(|err| AssetError::io(&dir.path, err))? {
            let entry = entry.map_err(|err| AssetError::io(&dir.path, err))?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if is_hidden_entry(&name) {
                continue;
            }

            let path = entry.path();
            // Follows symlinks; a link that cannot be resolved is neither a file nor a directory.
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) if entry.file_type().is_ok_and(|ft| ft.is_symlink()) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %err,
                        "skipping unresolvable symlink"
                    );
                    continue;
                }
                Err(err) => return Err(AssetError::io(&path, err)),
            };

            if metadata.is_file() {
                files.push(format!("{}{}", dir.prefix, name));
            } else if metadata.is_dir() {
                subdirs.push((path, format!("{}{}/", dir.prefix, name)));
            }
        }

        let depth = dir.depth + 1;
        // Reversed so the first listed subdirectory is popped next.
        for (path, prefix) in subdirs.into_iter().rev() {
            pending.push(PendingDir {
                path,
                prefix,
                depth,
                ancestors: Some(Rc::clone(&ancestors)),
            });
        }
    }

    if options.sorted {
        files.sort();
    }

    tracing::debug!(path = %base.display(), count = files.len(), "walked asset directory");
    Ok(files)
}

struct PendingDir {
    path: PathBuf,
    prefix: String,
    depth: usize,
    ancestors: Option<Rc<Ancestor>>,
}

/// Open handles of the directories between the base and the directory being listed.
struct Ancestor {
    handle: Handle,
    parent: Option<Rc<Ancestor>>,
}

impl Ancestor {
    fn contains(&self, handle: &Handle) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.handle == *handle {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }
}
