use crate::model::error::system::SystemError;
use std::fmt;
use std::path::{Path, PathBuf};

pub const ROOT: &str = ".";

/// Forward-slash separated path relative to a storage root. `.` is the root
/// itself; there is never a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Parse a caller supplied path. Empty and `./` segments collapse, absolute
    /// paths and `..` are rejected.
    pub fn parse(raw: &str) -> Result<Self, SystemError> {
        if raw.starts_with('/') {
            return Err(SystemError::invalid_start_path(raw));
        }

        let mut segments = Vec::new();
        for segment in raw.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(SystemError::invalid_start_path(raw)),
                segment => segments.push(segment),
            }
        }

        if segments.is_empty() {
            Ok(Self::root())
        } else {
            Ok(Self(segments.join("/")))
        }
    }

    /// Normal form of a derived path. Empty and `.` segments drop out and `..`
    /// removes the segment before it, never climbing above the root.
    pub fn collapse(raw: &str) -> Self {
        let mut segments = Vec::new();
        for segment in raw.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    segments.pop();
                }
                segment => segments.push(segment),
            }
        }

        if segments.is_empty() {
            Self::root()
        } else {
            Self(segments.join("/"))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Child `name` of this path; the root has no `./` prefix.
    pub fn join(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }

    pub fn file_name(&self) -> &str {
        self.split_parent().1
    }

    /// Directory portion and final segment. A bare name lives in `.`.
    pub fn split_parent(&self) -> (&str, &str) {
        match self.0.rsplit_once('/') {
            Some((directory, name)) => (directory, name),
            None => (ROOT, &self.0),
        }
    }

    /// Resolve against a filesystem root.
    pub fn under(&self, root: &Path) -> PathBuf {
        if self.is_root() {
            root.to_path_buf()
        } else {
            root.join(&self.0)
        }
    }
}

impl Default for RelativePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
