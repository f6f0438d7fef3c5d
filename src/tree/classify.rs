use std::collections::HashSet;

/// Extension-less names that still denote files.
pub const DEFAULT_FILE_NAMES: &[&str] = &["license"];

/// Decides whether a bare name from a tree diagram is a directory or a file.
///
/// Anything with a dot is a file; anything else is a directory unless it is
/// one of the known extension-less file names (compared case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    file_names: HashSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAMES.iter().copied())
    }
}

impl Classifier {
    /// Build a classifier from an explicit set of extension-less file names.
    pub fn new<I, S>(file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Classifier {
            file_names: file_names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Extend the set with more names.
    pub fn with_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.file_names
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    pub fn is_dir(&self, name: &str) -> bool {
        !name.contains('.') && !self.file_names.contains(&name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_names_are_files() {
        let c = Classifier::default();
        for name in ["main.rs", ".env", "archive.tar.gz", "v1.2"] {
            assert!(!c.is_dir(name), "{name} should be a file");
        }
    }

    #[test]
    fn license_is_a_file_in_any_case() {
        let c = Classifier::default();
        assert!(!c.is_dir("LICENSE"));
        assert!(!c.is_dir("license"));
        assert!(!c.is_dir("License"));
    }

    #[test]
    fn plain_names_are_directories() {
        let c = Classifier::default();
        assert!(c.is_dir("src"));
        assert!(c.is_dir("Makefile"));
    }

    #[test]
    fn extra_names_extend_defaults() {
        let c = Classifier::default().with_file_names(["Makefile", "Dockerfile"]);
        assert!(!c.is_dir("makefile"));
        assert!(!c.is_dir("DOCKERFILE"));
        assert!(!c.is_dir("LICENSE"));
        assert!(c.is_dir("docs"));
    }

    #[test]
    fn empty_set_only_uses_dots() {
        let c = Classifier::new(Vec::<String>::new());
        assert!(c.is_dir("LICENSE"));
        assert!(!c.is_dir("README.md"));
    }
}
