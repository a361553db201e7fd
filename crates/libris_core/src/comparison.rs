//! Search results compared across strategies.

use crate::record::Record;
use crate::types::{Field, Strategy};
use std::sync::Arc;
use std::time::Duration;

/// The result of one strategy together with how long it took.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    /// Strategy that produced the value.
    pub strategy: Strategy,
    /// Elapsed monotonic time around the strategy's lookup only.
    pub elapsed: Duration,
    /// What the strategy returned.
    pub value: T,
}

impl<T> Timed<T> {
    /// Runs `f` and records its elapsed time.
    pub fn measure(strategy: Strategy, f: impl FnOnce() -> T) -> Self {
        let start = std::time::Instant::now();
        let value = f();
        Self {
            strategy,
            elapsed: start.elapsed(),
            value,
        }
    }
}

/// Tree and hash answers for a single-valued key search.
#[derive(Debug, Clone)]
pub struct KeyComparison {
    /// Field that was searched (title or ISBN).
    pub field: Field,
    /// Binary search tree answer.
    pub tree: Timed<Option<Arc<Record>>>,
    /// Hash table answer.
    pub hash: Timed<Option<Arc<Record>>>,
}

impl KeyComparison {
    /// Returns true if both strategies agree on found/not-found.
    pub fn agrees(&self) -> bool {
        self.tree.value.is_some() == self.hash.value.is_some()
    }
}

/// Grouped and linear answers for an author search.
#[derive(Debug, Clone)]
pub struct AuthorComparison {
    /// Grouped index answer.
    pub grouped: Timed<Vec<Arc<Record>>>,
    /// Linear scan answer.
    pub linear: Timed<Vec<Arc<Record>>>,
}

impl AuthorComparison {
    /// Returns true if both strategies returned the same stored records.
    ///
    /// Both sides follow master-list order, so positional identity is the
    /// same as set equality here.
    pub fn agrees(&self) -> bool {
        self.grouped.value.len() == self.linear.value.len()
            && self
                .grouped
                .value
                .iter()
                .zip(&self.linear.value)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

/// Outcome of a catalog search across its strategies.
#[derive(Debug, Clone)]
pub enum SearchComparison {
    /// Title or ISBN search: tree versus hash.
    Key(KeyComparison),
    /// Author search: grouped index versus linear scan.
    Author(AuthorComparison),
}

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySummary {
    /// Strategy that ran.
    pub strategy: Strategy,
    /// How long it took.
    pub elapsed: Duration,
    /// Number of records it returned.
    pub hits: usize,
}

impl<T> From<&Timed<Option<T>>> for StrategySummary {
    fn from(t: &Timed<Option<T>>) -> Self {
        Self {
            strategy: t.strategy,
            elapsed: t.elapsed,
            hits: usize::from(t.value.is_some()),
        }
    }
}

impl<T> From<&Timed<Vec<T>>> for StrategySummary {
    fn from(t: &Timed<Vec<T>>) -> Self {
        Self {
            strategy: t.strategy,
            elapsed: t.elapsed,
            hits: t.value.len(),
        }
    }
}

impl SearchComparison {
    /// Returns the field that was searched.
    pub fn field(&self) -> Field {
        match self {
            SearchComparison::Key(k) => k.field,
            SearchComparison::Author(_) => Field::Author,
        }
    }

    /// Returns true if the first strategy found anything.
    pub fn found(&self) -> bool {
        match self {
            SearchComparison::Key(k) => k.tree.value.is_some(),
            SearchComparison::Author(a) => !a.grouped.value.is_empty(),
        }
    }

    /// Returns true if every strategy produced the same answer.
    pub fn agrees(&self) -> bool {
        match self {
            SearchComparison::Key(k) => k.agrees(),
            SearchComparison::Author(a) => a.agrees(),
        }
    }

    /// Returns one summary per strategy, in execution order.
    pub fn summaries(&self) -> Vec<StrategySummary> {
        match self {
            SearchComparison::Key(k) => vec![(&k.tree).into(), (&k.hash).into()],
            SearchComparison::Author(a) => vec![(&a.grouped).into(), (&a.linear).into()],
        }
    }

    /// Describes a disagreement between strategies, if any.
    pub(crate) fn disagreement(&self) -> Option<String> {
        if self.agrees() {
            return None;
        }
        Some(match self {
            SearchComparison::Key(k) => format!(
                "tree {} but hash {}",
                found_word(k.tree.value.is_some()),
                found_word(k.hash.value.is_some())
            ),
            SearchComparison::Author(a) => format!(
                "grouped index returned {} records, linear scan returned {}",
                a.grouped.value.len(),
                a.linear.value.len()
            ),
        })
    }

    /// Returns the key comparison, if this was a title or ISBN search.
    pub fn as_key(&self) -> Option<&KeyComparison> {
        match self {
            SearchComparison::Key(k) => Some(k),
            SearchComparison::Author(_) => None,
        }
    }

    /// Returns the author comparison, if this was an author search.
    pub fn as_author(&self) -> Option<&AuthorComparison> {
        match self {
            SearchComparison::Author(a) => Some(a),
            SearchComparison::Key(_) => None,
        }
    }
}

fn found_word(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "missed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed<T>(strategy: Strategy, value: T) -> Timed<T> {
        Timed {
            strategy,
            elapsed: Duration::from_micros(5),
            value,
        }
    }

    fn rec() -> Arc<Record> {
        Arc::new(Record::new("Oromay", "Bealu Girma", "9789101", "p"))
    }

    #[test]
    fn key_agreement() {
        let r = rec();
        let agree = SearchComparison::Key(KeyComparison {
            field: Field::Isbn,
            tree: timed(Strategy::Tree, Some(Arc::clone(&r))),
            hash: timed(Strategy::Hash, Some(r)),
        });
        assert!(agree.agrees());
        assert!(agree.found());
        assert!(agree.disagreement().is_none());

        let split = SearchComparison::Key(KeyComparison {
            field: Field::Isbn,
            tree: timed(Strategy::Tree, Some(rec())),
            hash: timed(Strategy::Hash, None),
        });
        assert!(!split.agrees());
        assert_eq!(split.disagreement().unwrap(), "tree found but hash missed");
    }

    #[test]
    fn author_agreement_uses_identity() {
        let r = rec();
        let same = AuthorComparison {
            grouped: timed(Strategy::Grouped, vec![Arc::clone(&r)]),
            linear: timed(Strategy::Linear, vec![r]),
        };
        assert!(same.agrees());

        let other = AuthorComparison {
            grouped: timed(Strategy::Grouped, vec![rec()]),
            linear: timed(Strategy::Linear, vec![rec()]),
        };
        assert!(!other.agrees());
    }

    #[test]
    fn summaries_follow_execution_order() {
        let cmp = SearchComparison::Author(AuthorComparison {
            grouped: timed(Strategy::Grouped, vec![rec(), rec()]),
            linear: timed(Strategy::Linear, vec![]),
        });
        let rows = cmp.summaries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].strategy, Strategy::Grouped);
        assert_eq!(rows[0].hits, 2);
        assert_eq!(rows[1].strategy, Strategy::Linear);
        assert_eq!(rows[1].hits, 0);
        assert_eq!(cmp.field(), Field::Author);
    }

    #[test]
    fn measure_captures_value() {
        let t = Timed::measure(Strategy::Linear, || 41 + 1);
        assert_eq!(t.value, 42);
        assert_eq!(t.strategy, Strategy::Linear);
    }
}
