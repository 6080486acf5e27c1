use std::collections::HashMap;

/// Parameters extracted from a matched path, keyed by the name declared in
/// the route pattern. Created by the dispatcher at match time, one per
/// request, and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet(HashMap<String, String>);

impl ParamSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Looks up a parameter the caller knows must exist. Asking for a name
    /// the matched pattern never declared is a logic error in the caller, so
    /// this aborts the request-handling unit instead of returning an error
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if `name` was not extracted from the matched path.
    pub fn must(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("parameter {name:?} was not declared by the matched route"),
        }
    }

    /// An independent copy of the full parameter map, safe to mutate.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ParamSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
