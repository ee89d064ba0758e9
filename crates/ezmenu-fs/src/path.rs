//! Slash-normalized paths
//!
//! Configuration values such as `output_dir` are written by hand on
//! different platforms; they are kept with `/` separators and only turned
//! into a native [`PathBuf`] when a file is touched.

use std::fmt;
use std::path::{Path, PathBuf};

/// A path with `/` separators and no repeated separators.
///
/// A leading `//` (a network share) is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Like [`NormalizedPath::new`], with a leading `~/` replaced by the
    /// user's home directory.
    pub fn expand_home(path: impl AsRef<Path>) -> Self {
        let path = Self::new(path);
        let home = path.inner.strip_prefix("~/").zip(dirs::home_dir());
        match home {
            Some((rest, home)) => Self::new(home).join(rest),
            None => path,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append `segment`; an empty segment leaves the path unchanged.
    pub fn join(&self, segment: &str) -> Self {
        match (self.inner.is_empty() || self.inner.ends_with('/'), segment.is_empty()) {
            (_, true) => self.clone(),
            (true, false) => Self::new(format!("{}{}", self.inner, segment)),
            (false, false) => Self::new(format!("{}/{}", self.inner, segment)),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// The part of the file name after its last dot; dot files have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(dot) => Some(&name[dot + 1..]),
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_network_path(&self) -> bool {
        is_network(&self.inner)
    }
}

fn is_network(path: &str) -> bool {
    path.starts_with("//") && !path.starts_with("///")
}

fn clean(path: &str) -> String {
    let (prefix, rest) = if is_network(path) {
        path.split_at(2)
    } else {
        ("", path)
    };
    let mut out = String::with_capacity(path.len());
    out.push_str(prefix);
    for c in rest.chars() {
        if c == '/' && out.ends_with('/') && out.len() > prefix.len() {
            continue;
        }
        out.push(c);
    }
    out
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_and_duplicate_separators_are_normalized() {
        assert_eq!(NormalizedPath::new(r"out\\js\menu.json").as_str(), "out/js/menu.json");
        assert_eq!(NormalizedPath::new("a//b///c").as_str(), "a/b/c");
    }

    #[test]
    fn network_prefix_is_preserved() {
        let path = NormalizedPath::new(r"\\server\share\setlist.json");
        assert!(path.is_network_path());
        assert_eq!(path.as_str(), "//server/share/setlist.json");
    }

    #[test]
    fn join_and_extension() {
        let dir = NormalizedPath::new("../src/js/loggedin/");
        let file = dir.join("setlist.json");
        assert_eq!(file.as_str(), "../src/js/loggedin/setlist.json");
        assert_eq!(file.file_name(), Some("setlist.json"));
        assert_eq!(file.extension(), Some("json"));
        assert_eq!(NormalizedPath::new("~/.ezmenu").extension(), None);
    }

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        let path = NormalizedPath::expand_home("/usr/local/ezproxy/config/eResources.txt");
        assert_eq!(path.as_str(), "/usr/local/ezproxy/config/eResources.txt");
    }
}
