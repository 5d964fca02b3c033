//! Environment snapshot injected into the pass

use indexmap::IndexMap;

/// A read-only key/value view of the environment.
///
/// The pass never reads ambient process state directly: the snapshot is
/// injected, which keeps each visit a pure function and makes the pass
/// independently testable. [`EnvSnapshot::from_process`] captures the real
/// process environment as observed at the moment it is called.
///
/// An empty string value is a set variable; only a missing key resolves to
/// the undefined sentinel.
///
/// # Example
///
/// ```
/// use envfold::EnvSnapshot;
///
/// let snapshot = EnvSnapshot::empty()
///     .with("FOO", "bar")
///     .with("EMPTY", "");
///
/// assert_eq!(snapshot.get("FOO"), Some("bar"));
/// assert_eq!(snapshot.get("EMPTY"), Some(""));
/// assert_eq!(snapshot.get("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: IndexMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Look up a variable. `None` means unset, not empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable in the snapshot.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
