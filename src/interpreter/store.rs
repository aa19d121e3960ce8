use std::collections::HashMap;

/// The state of one variable as seen by a lookup.
///
/// Only assigned names are stored, so a name found in the store is always
/// initialized. Looking up any other name yields the default binding, whose
/// value is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Binding {
    /// The value of the last successful assignment.
    pub value:       i64,
    /// Whether any assignment to the name has completed.
    pub initialized: bool,
}

/// Maps variable names to their values.
///
/// Values are enumerated in the order in which each name was first
/// assigned. Re-assigning a name overwrites its value in place and keeps its
/// position.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    values: Vec<(String, i64)>,
    index:  HashMap<String, usize>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or overwrites the value of `name`, making it initialized.
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(&slot) = self.index.get(name) {
            self.values[slot].1 = value;
        } else {
            self.index.insert(name.to_string(), self.values.len());
            self.values.push((name.to_string(), value));
        }
    }

    /// Looks up `name`. A missing name yields an uninitialized binding.
    ///
    /// # Example
    /// ```
    /// use assignlang::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// assert!(!store.get("x").initialized);
    ///
    /// store.set("x", -4);
    /// let binding = store.get("x");
    /// assert!(binding.initialized);
    /// assert_eq!(binding.value, -4);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Binding {
        self.index
            .get(name)
            .map_or_else(Binding::default, |&slot| Binding { value:       self.values[slot].1,
                                                             initialized: true, })
    }

    /// Iterates over initialized variables as `(name, value)` pairs in
    /// first-assignment order.
    ///
    /// # Example
    /// ```
    /// use assignlang::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// store.set("b", 1);
    /// store.set("a", 2);
    /// store.set("b", 3);
    ///
    /// let pairs: Vec<_> = store.enumerate().collect();
    /// assert_eq!(pairs, vec![("b", 3), ("a", 2)]);
    /// ```
    pub fn enumerate(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
