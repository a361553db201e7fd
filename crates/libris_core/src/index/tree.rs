//! Binary search tree index.

use crate::index::traits::{Index, IndexSpec};
use crate::record::Record;
use crate::types::Strategy;
use std::cmp::Ordering;
use std::sync::Arc;

struct Node {
    key: String,
    record: Arc<Record>,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(key: String, record: Arc<Record>) -> Box<Self> {
        Box::new(Self {
            key,
            record,
            left: None,
            right: None,
        })
    }
}

/// Unbalanced binary search tree for ordered, comparison-based lookup.
///
/// Keys in a node's left subtree compare less than the node's key; keys in
/// its right subtree compare greater than or equal. The shape depends only
/// on insertion order: the tree is never rebalanced, so sorted input yields
/// a chain of height `n` and lookups degrade to O(n). That degradation is
/// what the strategy comparison is meant to show.
///
/// Duplicate keys are accepted and descend to the right, so a search returns
/// the earliest inserted record for a key.
///
/// # Example
///
/// ```rust,ignore
/// let mut index = TreeIndex::new(IndexSpec::for_field(Field::Title));
/// index.insert(Arc::new(record));
///
/// let hit = index.search("FIKIR Eske Mekabir");
/// ```
pub struct TreeIndex {
    /// Index specification.
    spec: IndexSpec,
    /// Root of the tree.
    root: Option<Box<Node>>,
    /// Total entry count.
    count: usize,
}

impl TreeIndex {
    /// Creates a new, empty tree index.
    pub fn new(spec: IndexSpec) -> Self {
        Self {
            spec,
            root: None,
            count: 0,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        max
    }

    /// Returns all entries in key order.
    ///
    /// Duplicates appear in insertion order.
    pub fn scan_ordered(&self) -> Vec<(String, Arc<Record>)> {
        let mut result = Vec::with_capacity(self.count);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            result.push((node.key.clone(), Arc::clone(&node.record)));
            cur = node.right.as_deref();
        }
        result
    }

    /// Returns the minimum key.
    pub fn min_key(&self) -> Option<&str> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.key)
    }

    /// Returns the maximum key.
    pub fn max_key(&self) -> Option<&str> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.key)
    }
}

impl Index for TreeIndex {
    fn spec(&self) -> &IndexSpec {
        &self.spec
    }

    fn strategy(&self) -> Strategy {
        Strategy::Tree
    }

    fn insert(&mut self, record: Arc<Record>) {
        let key = self.spec.key_of(&record);
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(key, record));
        self.count += 1;
    }

    fn search(&self, query: &str) -> Option<Arc<Record>> {
        let query = self.spec.normalize_query(query);
        let query: &str = &query;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match query.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(Arc::clone(&node.record)),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn len(&self) -> usize {
        self.count
    }
}

// Dropping a degenerate tree recursively would use one stack frame per level.
impl Drop for TreeIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    fn book(title: &str, isbn: &str) -> Arc<Record> {
        Arc::new(Record::new(title, "Author", isbn, "path"))
    }

    fn title_index() -> TreeIndex {
        TreeIndex::new(IndexSpec::for_field(Field::Title))
    }

    #[test]
    fn insert_and_search() {
        let mut index = title_index();
        for title in ["Dertogada", "Fikir Eske Mekabir", "Oromay", "Aleweledem"] {
            index.insert(book(title, "1"));
        }

        let found = index.search("Oromay").unwrap();
        assert_eq!(found.title(), "Oromay");
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn search_missing() {
        let mut index = title_index();
        index.insert(book("Oromay", "1"));

        assert!(index.search("Kadmas Bashager").is_none());
        assert!(title_index().search("anything").is_none());
    }

    #[test]
    fn title_search_ignores_case() {
        let mut index = title_index();
        index.insert(book("Fikir Eske Mekabir", "1"));

        assert!(index.search("fikir eske mekabir").is_some());
        assert!(index.search("FIKIR ESKE MEKABIR").is_some());
    }

    #[test]
    fn isbn_search_is_exact() {
        let mut index = TreeIndex::new(IndexSpec::for_field(Field::Isbn));
        index.insert(book("Oromay", "978X"));

        assert!(index.search("978X").is_some());
        assert!(index.search("978x").is_none());
    }

    #[test]
    fn duplicates_chain_right_and_first_wins() {
        let mut index = TreeIndex::new(IndexSpec::for_field(Field::Isbn));
        let first = Arc::new(Record::new("First", "A", "555", "a"));
        let second = Arc::new(Record::new("Second", "B", "555", "b"));
        index.insert(Arc::clone(&first));
        index.insert(Arc::clone(&second));

        assert_eq!(index.height(), 2);
        let root = index.root.as_deref().unwrap();
        assert!(root.left.is_none());
        assert!(root.right.is_some());

        for _ in 0..3 {
            let hit = index.search("555").unwrap();
            assert!(Arc::ptr_eq(&hit, &first));
        }
    }

    #[test]
    fn sorted_insertion_degenerates() {
        let mut index = TreeIndex::new(IndexSpec::for_field(Field::Isbn));
        for i in 0..64 {
            index.insert(book("t", &format!("{i:04}")));
        }
        assert_eq!(index.height(), 64);
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        const DEPTH: usize = 100_000;

        // Link the chain bottom-up; inserting sorted keys would walk it each time.
        let mut root: Option<Box<Node>> = None;
        for i in (0..DEPTH).rev() {
            let key = format!("{i:06}");
            let mut node = Node::leaf(key.clone(), book("t", &key));
            node.right = root.take();
            root = Some(node);
        }
        let mut index = TreeIndex::new(IndexSpec::for_field(Field::Isbn));
        index.root = root;
        index.count = DEPTH;

        assert_eq!(index.height(), DEPTH);
        assert_eq!(index.min_key(), Some("000000"));
        assert!(index.search("099999").is_some());
        drop(index);
    }

    #[test]
    fn scan_ordered_and_bounds() {
        let mut index = title_index();
        for title in ["m", "c", "x", "a", "e"] {
            index.insert(book(title, "1"));
        }

        let keys: Vec<_> = index.scan_ordered().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c", "e", "m", "x"]);
        assert_eq!(index.min_key(), Some("a"));
        assert_eq!(index.max_key(), Some("x"));
    }

    #[test]
    fn empty_tree() {
        let index = title_index();
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert_eq!(index.min_key(), None);
        assert!(index.scan_ordered().is_empty());
    }
}
