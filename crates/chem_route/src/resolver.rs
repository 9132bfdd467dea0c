use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::model::RouteKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    UnsupportedCombination {
        table: &'static str,
        selection: String,
    },
    EmptyScenario,
    TooManyRoutes {
        count: usize,
    },
    DuplicateRoute {
        kind: RouteKind,
    },
    ConflictingRoutes {
        first: RouteKind,
        second: RouteKind,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::UnsupportedCombination { table, selection } => {
                write!(f, "unsupported combination in {table}: {selection}")
            }
            ScenarioError::EmptyScenario => write!(f, "scenario has no routes"),
            ScenarioError::TooManyRoutes { count } => {
                write!(f, "scenario has {count} routes, at most 2 allowed")
            }
            ScenarioError::DuplicateRoute { kind } => {
                write!(f, "scenario lists route {kind} more than once")
            }
            ScenarioError::ConflictingRoutes { first, second } => {
                write!(f, "routes {first} and {second} cannot share a scenario")
            }
        }
    }
}

impl Error for ScenarioError {}

/// Maps a selection to its precomputed result.
pub trait ScenarioResolver {
    type Key;
    type Output;

    fn resolve(&self, key: &Self::Key) -> Result<&Self::Output, ScenarioError>;
}

/// Immutable lookup table. Each screen owns its own instance; tables are
/// never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioTable<K, V> {
    name: &'static str,
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> ScenarioTable<K, V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: BTreeMap::new(),
        }
    }

    pub fn with_entry(mut self, key: K, value: V) -> Self {
        self.entries.insert(key, value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Ord + fmt::Display, V> ScenarioResolver for ScenarioTable<K, V> {
    type Key = K;
    type Output = V;

    fn resolve(&self, key: &K) -> Result<&V, ScenarioError> {
        self.entries
            .get(key)
            .ok_or_else(|| ScenarioError::UnsupportedCombination {
                table: self.name,
                selection: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_entry_for_known_key() {
        let table = ScenarioTable::new("numbers")
            .with_entry(1u8, "one")
            .with_entry(2u8, "two");
        assert_eq!(table.resolve(&2), Ok(&"two"));
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn resolve_fails_fast_for_unknown_key() {
        let table = ScenarioTable::new("numbers").with_entry(1u8, "one");
        let err = table.resolve(&9).expect_err("should fail");
        assert_eq!(
            err,
            ScenarioError::UnsupportedCombination {
                table: "numbers",
                selection: "9".to_string(),
            }
        );
        assert!(err.to_string().contains("unsupported combination in numbers"));
    }
}
