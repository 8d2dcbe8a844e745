use std::collections::HashMap;

/// Bindings every fresh table starts with. Names are case-sensitive.
pub const DEFAULT_BINDINGS: [(char, f64); 8] = [
    ('x', 10.0),
    ('y', 7.0),
    ('z', 3.0),
    ('p', 6.0),
    ('X', 20.0),
    ('Y', 15.0),
    ('Z', 12.0),
    ('P', 24.0),
];

/// Maps single-letter variable names to values. Unbound names read as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    values: HashMap<char, f64>,
}

impl SymbolTable {
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, name: char) -> f64 {
        self.values.get(&name).copied().unwrap_or(0.0)
    }

    pub fn is_defined(&self, name: char) -> bool {
        self.values.contains_key(&name)
    }

    /// Inserts or overwrites a binding.
    pub fn define(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    /// Bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> {
        let mut bindings: Vec<_> = self.values.iter().map(|(k, v)| (*k, *v)).collect();
        bindings.sort_by_key(|(name, _)| *name);
        bindings.into_iter()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            values: DEFAULT_BINDINGS.into_iter().collect(),
        }
    }
}
