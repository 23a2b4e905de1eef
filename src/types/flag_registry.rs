use std::collections::HashMap;

/// The set of selectable flag names, in registration order.
///
/// Supplied by whoever owns the flag catalogue. A builder consults it to
/// recognise Complex expressions on load and to report unknown flags; it
/// never blocks an append.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    indices: HashMap<String, usize>,
    names: Vec<String>,
}

impl FlagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flag name, returning its index. If the name is already
    /// registered, returns the existing index.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.indices.insert(name.to_owned(), idx);
        self.names.push(name.to_owned());
        idx
    }

    /// Look up the index for a flag name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// The number of registered flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over flag names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FlagRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = FlagRegistry::new();
        for name in iter {
            registry.register(name.as_ref());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_get() {
        let mut reg = FlagRegistry::new();
        let idx = reg.register("is_specialty");
        assert_eq!(idx, 0);
        assert_eq!(reg.get("is_specialty"), Some(0));
        assert!(reg.contains("is_specialty"));
    }

    #[test]
    fn duplicate_register_returns_same_index() {
        let mut reg = FlagRegistry::new();
        let idx1 = reg.register("is_generic");
        let idx2 = reg.register("is_generic");
        assert_eq!(idx1, idx2);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn iter_keeps_registration_order() {
        let reg: FlagRegistry = ["b", "a", "c", "a"].into_iter().collect();
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn get_missing_returns_none() {
        let reg = FlagRegistry::new();
        assert_eq!(reg.get("nonexistent"), None);
        assert!(reg.is_empty());
    }
}
