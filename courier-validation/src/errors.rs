// Violation records and the ordered collection that accumulates them

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single recorded constraint failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Human-readable description of the broken rule
    pub message: String,

    /// Optional structured context (e.g. actual length, limit)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl Violation {
    /// Create a new violation with no context
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Attach a context entry
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Violation {}

/// Ordered, append-only list of violations.
///
/// Insertion order is preserved and duplicates are kept. Nothing is ever
/// removed; merging another list copies its records, so the source stays
/// queryable on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation message
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(Violation::new(message));
    }

    /// Record a violation message with structured context
    pub fn push_with_context<K, V>(
        &mut self,
        message: impl Into<String>,
        context: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: ToString,
    {
        let violation = context
            .into_iter()
            .fold(Violation::new(message), |v, (k, val)| v.with_context(k, val));
        self.items.push(violation);
    }

    /// Record an already-built violation
    pub fn add(&mut self, violation: Violation) {
        self.items.push(violation);
    }

    /// Record the error side of a rule check, if any
    pub fn check(&mut self, result: Result<(), Violation>) -> &mut Self {
        if let Err(violation) = result {
            self.items.push(violation);
        }
        self
    }

    /// Copy every record of another collection onto the end of this one
    pub fn extend_from(&mut self, other: &Violations) {
        self.items.extend(other.items.iter().cloned());
    }

    /// Copy the violations of another accumulator-bearing entity
    pub fn merge<N: crate::Notifiable + ?Sized>(&mut self, other: &N) {
        self.extend_from(other.violations());
    }

    /// Copy the violations of every entity in a collection, in order
    pub fn merge_all<'a, N, I>(&mut self, others: I)
    where
        N: crate::Notifiable + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for other in others {
            self.merge(other);
        }
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded violations
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.items.iter()
    }

    /// Messages in insertion order
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|v| v.message.clone()).collect()
    }

    /// Messages joined with a separator
    pub fn joined(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "violations": self.items.iter().map(|v| {
                serde_json::json!({
                    "message": v.message,
                    "context": v.context,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.items {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(items: Vec<Violation>) -> Self {
        Self { items }
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
