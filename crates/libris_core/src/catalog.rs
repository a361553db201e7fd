//! Catalog facade.

use crate::comparison::{AuthorComparison, KeyComparison, SearchComparison, Timed};
use crate::config::CatalogConfig;
use crate::error::{CoreError, CoreResult};
use crate::index::{GroupedIndex, HashIndex, Index, IndexSpec, KeyRule, TreeIndex};
use crate::query_log::{QueryLog, QueryLogEntry};
use crate::record::{sample_records, Record};
use crate::stats::CatalogStats;
use crate::types::{Field, RecordId, Requester, Strategy};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// The record store and its indexes.
///
/// `Catalog` is the single entry point for the store. It provides:
/// - Insertion that fans out to every index
/// - Search by field, timed across competing strategies
/// - The query log and statistics
///
/// Each record is stored once, in insertion order, and shared by five
/// indexes: title tree, ISBN tree, title hash, ISBN hash and the author
/// grouping. After every [`add_record`](Self::add_record) all of them hold
/// the same record set.
///
/// # Example
///
/// ```rust,ignore
/// use libris_core::{Catalog, Field, Requester};
///
/// let mut catalog = Catalog::with_samples();
/// catalog.add_record("Oromay", "Bealu Girma", "9780100", "books/oromay.pdf");
///
/// let me = Requester::new("u1", "Test");
/// let result = catalog.search(Field::Author, "bealu girma", &me)?;
/// for row in result.summaries() {
///     println!("{}: {} hits in {:?}", row.strategy, row.hits, row.elapsed);
/// }
/// ```
pub struct Catalog {
    /// Configuration.
    config: CatalogConfig,
    /// Master list, insertion order.
    records: Vec<Arc<Record>>,
    /// Title tree.
    title_tree: TreeIndex,
    /// ISBN tree.
    isbn_tree: TreeIndex,
    /// Title hash table.
    title_hash: HashIndex,
    /// ISBN hash table.
    isbn_hash: HashIndex,
    /// Author grouping.
    authors: GroupedIndex,
    /// Search history.
    log: QueryLog,
    /// Counters.
    stats: CatalogStats,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("config", &self.config)
            .field("records", &self.records.len())
            .field("authors", &self.authors.key_count())
            .field("log", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Creates a catalog with the default configuration, seeded with
    /// `seed_records` in order.
    pub fn new(seed_records: impl IntoIterator<Item = Record>) -> Self {
        let mut catalog = Self::empty(CatalogConfig::default());
        catalog.extend(seed_records);
        catalog
    }

    /// Creates a catalog seeded with the built-in sample books.
    pub fn with_samples() -> Self {
        Self::new(sample_records())
    }

    /// Creates a catalog with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is out of range.
    pub fn with_config(
        config: CatalogConfig,
        seed_records: impl IntoIterator<Item = Record>,
    ) -> CoreResult<Self> {
        config.validate()?;
        let mut catalog = Self::empty(config);
        catalog.extend(seed_records);
        Ok(catalog)
    }

    // Callers must validate `config` first.
    fn empty(config: CatalogConfig) -> Self {
        let buckets = config.bucket_count;
        Self {
            title_tree: TreeIndex::new(IndexSpec::for_field(Field::Title)),
            isbn_tree: TreeIndex::new(IndexSpec::for_field(Field::Isbn)),
            title_hash: HashIndex::sized(IndexSpec::for_field(Field::Title), buckets),
            isbn_hash: HashIndex::sized(IndexSpec::for_field(Field::Isbn), buckets),
            authors: GroupedIndex::new(IndexSpec::for_field(Field::Author)),
            records: Vec::new(),
            log: QueryLog::new(),
            stats: CatalogStats::new(),
            config,
        }
    }

    /// Builds a record from its fields and stores it.
    ///
    /// Never fails. Returns the stored record.
    pub fn add_record(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        content_reference: impl Into<String>,
    ) -> Arc<Record> {
        self.add(Record::new(title, author, isbn, content_reference))
    }

    /// Stores a record in the master list and every index.
    ///
    /// Index insertion cannot fail, so no partially indexed record is ever
    /// observable. Any validation added later must run before the first
    /// mutation below.
    pub fn add(&mut self, record: Record) -> Arc<Record> {
        let record = Arc::new(record);
        let id = RecordId::new(self.records.len() as u64);

        self.records.push(Arc::clone(&record));
        self.title_tree.insert(Arc::clone(&record));
        self.isbn_tree.insert(Arc::clone(&record));
        self.title_hash.insert(Arc::clone(&record));
        self.isbn_hash.insert(Arc::clone(&record));
        self.authors.insert(Arc::clone(&record));

        self.stats.record_add();
        debug!(%id, title = record.title(), isbn = record.isbn(), "record added");
        record
    }

    /// Searches one field with every applicable strategy.
    ///
    /// Title and ISBN searches run the tree and the hash table; author
    /// searches run the grouped index and a linear scan. Each strategy is
    /// timed on its own. Every accepted call appends exactly one query log
    /// entry.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `query_text` is empty. Nothing is logged.
    /// - `InternalInconsistency` if agreement checking is enabled and the
    ///   strategies disagree. The search is still logged. Debug builds
    ///   return the same error instead of panicking, so callers and tests
    ///   see one behaviour in every profile.
    pub fn search(
        &self,
        field: Field,
        query_text: &str,
        requester: &Requester,
    ) -> CoreResult<SearchComparison> {
        if query_text.is_empty() {
            self.stats.record_rejected();
            warn!(%field, requester = %requester.id, "rejected empty query");
            return Err(CoreError::invalid_argument("query text must not be empty"));
        }

        let comparison = match field {
            Field::Title => {
                Self::compare_keys(field, &self.title_tree, &self.title_hash, query_text)
            }
            Field::Isbn => {
                Self::compare_keys(field, &self.isbn_tree, &self.isbn_hash, query_text)
            }
            Field::Author => SearchComparison::Author(AuthorComparison {
                grouped: Timed::measure(Strategy::Grouped, || {
                    self.authors.lookup(query_text).to_vec()
                }),
                linear: Timed::measure(Strategy::Linear, || {
                    self.linear_author_search(query_text)
                }),
            }),
        };

        self.log
            .append(QueryLogEntry::now(requester.clone(), query_text, field));
        self.stats.record_search(field);

        for row in comparison.summaries() {
            debug!(
                %field,
                strategy = %row.strategy,
                hits = row.hits,
                elapsed_ns = row.elapsed.as_nanos() as u64,
                "strategy finished"
            );
        }

        if self.config.verify_agreement {
            if let Some(detail) = comparison.disagreement() {
                self.stats.record_inconsistency();
                error!(%field, query = query_text, %detail, "strategies disagree");
                return Err(CoreError::inconsistency(field, query_text, detail));
            }
        }

        Ok(comparison)
    }

    fn compare_keys(
        field: Field,
        tree: &TreeIndex,
        hash: &HashIndex,
        query: &str,
    ) -> SearchComparison {
        SearchComparison::Key(KeyComparison {
            field,
            tree: Timed::measure(tree.strategy(), || tree.search(query)),
            hash: Timed::measure(hash.strategy(), || hash.search(query)),
        })
    }

    /// Scans the whole master list for records by `author`, ignoring case.
    ///
    /// O(n). Serves as ground truth for the grouped index.
    pub fn linear_author_search(&self, author: &str) -> Vec<Arc<Record>> {
        let wanted = KeyRule::CaseFold.normalize(author);
        self.records
            .iter()
            .filter(|r| KeyRule::CaseFold.normalize(r.author()) == wanted)
            .cloned()
            .collect()
    }

    /// Returns every logged search, in order.
    pub fn query_log(&self) -> Vec<QueryLogEntry> {
        self.log.entries()
    }

    /// Returns the searches submitted by one requester, in order.
    pub fn history_for(&self, requester_id: &str) -> Vec<QueryLogEntry> {
        self.log.for_requester(requester_id)
    }

    /// Returns the query log itself.
    pub fn log(&self) -> &QueryLog {
        &self.log
    }

    /// Returns the record stored at `id`.
    pub fn get(&self, id: RecordId) -> Option<&Arc<Record>> {
        usize::try_from(id.as_u64())
            .ok()
            .and_then(|i| self.records.get(i))
    }

    /// Returns the master list in insertion order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the height of the tree index for `field`.
    ///
    /// Returns `None` for fields without a tree index.
    pub fn tree_height(&self, field: Field) -> Option<usize> {
        match field {
            Field::Title => Some(self.title_tree.height()),
            Field::Isbn => Some(self.isbn_tree.height()),
            Field::Author => None,
        }
    }

    /// Returns the longest hash chain for `field`.
    ///
    /// Returns `None` for fields without a hash index.
    pub fn longest_bucket(&self, field: Field) -> Option<usize> {
        match field {
            Field::Title => Some(self.title_hash.longest_bucket()),
            Field::Isbn => Some(self.isbn_hash.longest_bucket()),
            Field::Author => None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the statistics counters.
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_samples()
    }
}

impl Extend<Record> for Catalog {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn me() -> Requester {
        Requester::new("u1", "Test")
    }

    #[test]
    fn samples_are_indexed_everywhere() {
        let catalog = Catalog::with_samples();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.title_tree.len(), 3);
        assert_eq!(catalog.isbn_tree.len(), 3);
        assert_eq!(catalog.title_hash.len(), 3);
        assert_eq!(catalog.isbn_hash.len(), 3);
        assert_eq!(catalog.authors.len(), 3);
        assert_eq!(catalog.stats().records_added(), 3);
    }

    #[test]
    fn add_record_updates_every_index_once() {
        let mut catalog = Catalog::new(Vec::new());
        let stored = catalog.add_record("Oromay", "Bealu Girma", "9780100", "books/oromay.pdf");

        assert_eq!(catalog.len(), 1);
        assert!(Arc::ptr_eq(catalog.get(RecordId::new(0)).unwrap(), &stored));
        assert!(Arc::ptr_eq(&catalog.title_tree.search("oromay").unwrap(), &stored));
        assert!(Arc::ptr_eq(&catalog.isbn_hash.search("9780100").unwrap(), &stored));
        assert_eq!(catalog.authors.lookup("BEALU GIRMA").len(), 1);
    }

    #[test]
    fn key_search_runs_tree_then_hash() {
        let catalog = Catalog::with_samples();
        let result = catalog.search(Field::Isbn, "9785678", &me()).unwrap();

        let key = result.as_key().unwrap();
        assert_eq!(key.tree.strategy, Strategy::Tree);
        assert_eq!(key.hash.strategy, Strategy::Hash);
        assert_eq!(key.tree.value.as_ref().unwrap().author(), "Hadis Alemayehu");
        assert!(key.agrees());
    }

    #[test]
    fn author_search_runs_grouped_then_linear() {
        let catalog = Catalog::with_samples();
        let result = catalog.search(Field::Author, "bealu girma", &me()).unwrap();

        let author = result.as_author().unwrap();
        assert_eq!(author.grouped.value.len(), 1);
        assert_eq!(author.linear.value.len(), 1);
        assert_eq!(author.grouped.strategy, Strategy::Grouped);
        assert_eq!(author.linear.strategy, Strategy::Linear);
    }

    #[test]
    fn empty_query_rejected_without_logging() {
        let catalog = Catalog::with_samples();
        for field in Field::ALL {
            let err = catalog.search(field, "", &me()).unwrap_err();
            assert!(matches!(err, CoreError::InvalidArgument { .. }));
        }
        assert!(catalog.query_log().is_empty());
        assert_eq!(catalog.stats().rejected_queries(), 3);
    }

    #[test]
    fn miss_is_not_an_error() {
        let catalog = Catalog::with_samples();
        let result = catalog.search(Field::Title, "Kadmas Bashager", &me()).unwrap();
        assert!(!result.found());
        assert_eq!(catalog.query_log().len(), 1);
    }

    #[test]
    fn disagreement_is_surfaced() {
        let mut catalog = Catalog::new(Vec::new());
        // Bypass the catalog so only the title tree knows this record.
        catalog
            .title_tree
            .insert(Arc::new(Record::new("Ghost", "Nobody", "0", "-")));

        let err = catalog.search(Field::Title, "ghost", &me()).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(catalog.stats().inconsistencies(), 1);
        assert_eq!(catalog.query_log().len(), 1);
    }

    #[test]
    fn disagreement_check_can_be_disabled() {
        let config = CatalogConfig::new().verify_agreement(false);
        let mut catalog = Catalog::with_config(config, Vec::new()).unwrap();
        catalog
            .isbn_hash
            .insert(Arc::new(Record::new("Ghost", "Nobody", "0", "-")));

        let result = catalog.search(Field::Isbn, "0", &me()).unwrap();
        assert!(!result.agrees());
    }

    #[test]
    fn author_disagreement_is_surfaced() {
        let mut catalog = Catalog::new(Vec::new());
        catalog
            .authors
            .insert(Arc::new(Record::new("Ghost", "Nobody", "0", "-")));

        let err = catalog.search(Field::Author, "nobody", &me()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InternalInconsistency {
                field: Field::Author,
                ..
            }
        ));
    }

    #[test]
    fn zero_buckets_rejected() {
        let result = Catalog::with_config(CatalogConfig::new().bucket_count(0), Vec::new());
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }

    #[test]
    fn custom_bucket_count_applies() {
        let config = CatalogConfig::new().bucket_count(1);
        let catalog = Catalog::with_config(config, sample_records()).unwrap();
        assert_eq!(catalog.longest_bucket(Field::Isbn), Some(3));
        assert_eq!(catalog.longest_bucket(Field::Author), None);
    }

    #[test]
    fn history_filters_by_requester() {
        let catalog = Catalog::with_samples();
        let other = Requester::new("u2", "Other");
        catalog.search(Field::Title, "x", &me()).unwrap();
        catalog.search(Field::Isbn, "9781234", &other).unwrap();
        catalog.search(Field::Author, "y", &me()).unwrap();

        let mine = catalog.history_for("u1");
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].field, Field::Title);
        assert_eq!(mine[1].field, Field::Author);
        assert_eq!(catalog.log().count_by_field(Field::Isbn), 1);
    }
}
