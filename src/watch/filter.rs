//! Glob filtering of watched paths.

use crate::error::{WatchError, WatchResult};
use crate::utils::{normalize_path, resolve_path};
use globset::{Glob, GlobMatcher};
use std::env;
use std::path::{Path, PathBuf};

/// An include/exclude glob specification. A plain string is shorthand for a
/// single include glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchSpec {
    Glob(String),
    Filtered {
        include: Vec<String>,
        exclude: Vec<String>,
    },
}

impl WatchSpec {
    /// Builds an include/exclude specification.
    pub fn filtered<I, E, S, T>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        WatchSpec::Filtered {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Compiles the globs once for repeated matching.
    pub fn compile(&self) -> WatchResult<PathFilter> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        match self {
            WatchSpec::Glob(glob) => Ok(PathFilter {
                include: vec![Matcher::compile(glob)?],
                exclude: Vec::new(),
                cwd,
            }),
            WatchSpec::Filtered { include, exclude } => Ok(PathFilter {
                include: include.iter().map(|glob| Matcher::compile(glob)).collect::<WatchResult<_>>()?,
                exclude: exclude.iter().map(|glob| Matcher::compile(glob)).collect::<WatchResult<_>>()?,
                cwd,
            }),
        }
    }
}

impl From<&str> for WatchSpec {
    fn from(glob: &str) -> Self {
        WatchSpec::Glob(glob.to_string())
    }
}

impl From<String> for WatchSpec {
    fn from(glob: String) -> Self {
        WatchSpec::Glob(glob)
    }
}

enum Matcher {
    /// An absolute glob is an exact resolved-path comparison.
    Exact(PathBuf),

    /// A relative glob is matched against the normalized relative path.
    Pattern(GlobMatcher),
}

impl Matcher {
    fn compile(glob: &str) -> WatchResult<Self> {
        let glob = glob.strip_prefix("./").unwrap_or(glob);

        if Path::new(glob).is_absolute() {
            return Ok(Matcher::Exact(PathBuf::from(glob)));
        }

        let compiled = Glob::new(glob).map_err(|error| WatchError::Pattern {
            pattern: glob.to_string(),
            error: error.to_string(),
        })?;

        Ok(Matcher::Pattern(compiled.compile_matcher()))
    }

    fn matches(&self, path: &Path, cwd: &Path) -> bool {
        match self {
            Matcher::Exact(target) => resolve_path(path, cwd) == *target,
            Matcher::Pattern(matcher) => matcher.is_match(normalize_path(path, cwd)),
        }
    }
}

/// A compiled include/exclude filter.
///
/// A path passes when it matches at least one include glob and none of the
/// exclude globs. Paths are normalized before comparison so absolute and
/// relative spellings of one file compare equal.
pub struct PathFilter {
    include: Vec<Matcher>,
    exclude: Vec<Matcher>,
    cwd: PathBuf,
}

impl PathFilter {
    /// Does the path pass the filter?
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();

        if !self.include.iter().any(|matcher| matcher.matches(path, &self.cwd)) {
            return false;
        }

        !self.exclude.iter().any(|matcher| matcher.matches(path, &self.cwd))
    }

    /// Keeps only the paths passing the filter, normalized cwd-relative.
    pub fn filter(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|path| self.matches(path))
            .map(|path| normalize_path(path, &self.cwd))
            .collect()
    }
}

/// Enumerates the files under the working directory matching the spec.
///
/// Used to seed a watch subscription with the already-present matching
/// files before any change arrives.
pub fn files_matching(spec: &WatchSpec) -> WatchResult<Vec<PathBuf>> {
    let filter = spec.compile()?;

    let walk = glob::glob("**/*").map_err(|error| WatchError::Pattern {
        pattern: "**/*".to_string(),
        error: error.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in walk.flatten() {
        if entry.is_file() && filter.matches(&entry) {
            files.push(normalize_path(&entry, &filter.cwd));
        }
    }

    Ok(files)
}
