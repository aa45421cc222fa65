//! File discovery and traversal with gitignore support
//!
//! Walks the requested paths with the ignore crate, applies the configured
//! include/exclude globs and keeps Lua sources only. Lua files are recognized
//! through ripgrep's `lua` file type definition.

use crate::types::GlobPattern;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::types::{Types, TypesBuilder};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Path does not exist: {0}")]
    MissingPath(PathBuf),
}

/// Recognizes Lua source files by extension
pub struct LuaFileMatcher {
    types: Option<Types>,
}

impl LuaFileMatcher {
    /// Builds the matcher from the ignore crate's default type table
    ///
    /// Falls back to a plain `.lua` extension check if the table cannot be built.
    pub fn new() -> Self {
        let mut builder = TypesBuilder::new();
        builder.add_defaults();
        builder.select("lua");

        let types = match builder.build() {
            Ok(types) => Some(types),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build lua file type matcher");
                None
            }
        };

        Self { types }
    }

    pub fn is_lua(&self, path: &Path) -> bool {
        match &self.types {
            Some(types) => types.matched(path, false).is_whitelist(),
            None => path.extension().is_some_and(|ext| ext == "lua"),
        }
    }
}

impl Default for LuaFileMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LuaFileMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LuaFileMatcher")
            .field("types", &self.types.as_ref().map(|_| "<Types>"))
            .finish()
    }
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File did not pass the include/exclude patterns
    ExcludedByPattern,
    /// File is not a Lua source
    NotLua,
}

/// Result of file walking - either a file to analyze or a skipped file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    File(PathBuf),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Iterator factory over discovered Lua files
pub struct FileWalker {
    root: PathBuf,
    walker: ignore::Walk,
    include_set: Option<GlobSet>,
    exclude_set: GlobSet,
    matcher: LuaFileMatcher,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Directory (or single file) to walk
    /// * `include` - Include patterns (empty means include all)
    /// * `exclude` - Exclude patterns (applied after include)
    ///
    /// Patterns are tried against each path as written (without `./`) and
    /// against the path relative to `root`; a match on either counts.
    pub fn new(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, FileWalkerError> {
        if !root.exists() {
            return Err(FileWalkerError::MissingPath(root.to_path_buf()));
        }

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .build();

        let include_set = if include.is_empty() {
            None
        } else {
            Some(Self::build_globset(include)?)
        };

        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));
        let exclude_set = Self::build_globset(&exclude_patterns)?;

        Ok(Self {
            root: root.to_path_buf(),
            walker,
            include_set,
            exclude_set,
            matcher: LuaFileMatcher::new(),
        })
    }

    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_str()).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the tree and yields the Lua files to analyze
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        self.walk_with_skip_info().filter_map(|result| match result {
            Ok(WalkResult::File(path)) => Some(Ok(path)),
            Ok(WalkResult::Skipped { path, reason }) => {
                tracing::trace!(path = %path.display(), ?reason, "skipped");
                None
            }
            Err(e) => Some(Err(e)),
        })
    }

    /// Walks the tree and reports skipped files too
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let root = self.root;
        let include_set = self.include_set;
        let exclude_set = self.exclude_set;
        let matcher = self.matcher;

        self.walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return None;
            }

            let path = entry.path();
            let normalized: PathBuf = path
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            let relative = path
                .strip_prefix(&root)
                .ok()
                .filter(|p| !p.as_os_str().is_empty());
            let matched_by = |set: &GlobSet| {
                set.is_match(&normalized) || relative.is_some_and(|r| set.is_match(r))
            };
            let skipped = |reason| {
                Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason,
                }))
            };

            if let Some(ref include_set) = include_set
                && !matched_by(include_set)
            {
                return skipped(SkipReason::ExcludedByPattern);
            }

            if matched_by(&exclude_set) {
                return skipped(SkipReason::ExcludedByPattern);
            }

            if !matcher.is_lua(path) {
                return skipped(SkipReason::NotLua);
            }

            Some(Ok(WalkResult::File(path.to_path_buf())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_patterns() -> Vec<GlobPattern> {
        Vec::new()
    }

    #[test]
    fn test_lua_matcher() {
        let matcher = LuaFileMatcher::new();
        assert!(matcher.is_lua(Path::new("init.lua")));
        assert!(matcher.is_lua(Path::new("src/game/player.lua")));
        assert!(!matcher.is_lua(Path::new("main.rs")));
        assert!(!matcher.is_lua(Path::new("README")));
    }

    #[test]
    fn test_build_globset_invalid() {
        let result = FileWalker::build_globset(&[GlobPattern::new("[invalid")]);
        assert!(matches!(
            result,
            Err(FileWalkerError::InvalidGlob { pattern, .. }) if pattern == "[invalid"
        ));
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileWalker::new(&dir.path().join("absent"), &no_patterns(), &no_patterns());
        assert!(matches!(result, Err(FileWalkerError::MissingPath(_))));
    }

    #[test]
    fn test_walk_keeps_only_lua() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.lua"), "local a = 1").unwrap();
        fs::write(dir.path().join("notes.txt"), "text").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib").join("b.lua"), "return {}").unwrap();

        let walker = FileWalker::new(dir.path(), &no_patterns(), &no_patterns()).unwrap();
        let mut files: Vec<PathBuf> = walker.walk().map(|r| r.unwrap()).collect();
        files.sort();

        assert_eq!(
            files,
            vec![dir.path().join("a.lua"), dir.path().join("lib").join("b.lua")]
        );
    }

    #[test]
    fn test_walk_respects_exclude() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor").join("dep.lua"), "x = 1").unwrap();
        fs::write(dir.path().join("main.lua"), "x = 1").unwrap();

        let exclude = vec![GlobPattern::new("**/vendor/**")];
        let walker = FileWalker::new(dir.path(), &no_patterns(), &exclude).unwrap();
        let results: Vec<WalkResult> = walker
            .walk_with_skip_info()
            .map(|r| r.unwrap())
            .collect();

        assert!(results.contains(&WalkResult::File(dir.path().join("main.lua"))));
        assert!(results.contains(&WalkResult::Skipped {
            path: dir.path().join("vendor").join("dep.lua"),
            reason: SkipReason::ExcludedByPattern,
        }));
    }

    #[test]
    fn test_include_relative_to_walk_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src").join("a.lua"), "x = 1").unwrap();
        fs::write(dir.path().join("top.lua"), "x = 1").unwrap();

        let include = vec![GlobPattern::new("src/**/*.lua")];
        let walker = FileWalker::new(dir.path(), &include, &no_patterns()).unwrap();
        let files: Vec<PathBuf> = walker.walk().map(|r| r.unwrap()).collect();
        assert_eq!(files, vec![dir.path().join("src").join("a.lua")]);
    }

    #[test]
    fn test_exclude_relative_to_walk_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("gen")).unwrap();
        fs::write(dir.path().join("gen").join("out.lua"), "x = 1").unwrap();
        fs::write(dir.path().join("main.lua"), "x = 1").unwrap();

        let exclude = vec![GlobPattern::new("gen/*.lua")];
        let walker = FileWalker::new(dir.path(), &no_patterns(), &exclude).unwrap();
        let files: Vec<PathBuf> = walker.walk().map(|r| r.unwrap()).collect();
        assert_eq!(files, vec![dir.path().join("main.lua")]);
    }

    #[test]
    fn test_walk_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.lua");
        fs::write(&file, "print(1)").unwrap();

        let walker = FileWalker::new(&file, &no_patterns(), &no_patterns()).unwrap();
        let files: Vec<PathBuf> = walker.walk().map(|r| r.unwrap()).collect();
        assert_eq!(files, vec![file]);
    }
}
