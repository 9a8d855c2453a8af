//! One-time publication of an index to concurrent readers.
//!
//! Construction, including the finalization pass, runs to completion before
//! the index becomes visible. Readers either see nothing or the finished
//! index; after publication no locking is involved.

use std::sync::{Arc, OnceLock};

use crate::error::{LexiconError, Result};
use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;

/// A slot that holds an [`InvertedIndex`] once it has been built.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use lexicon::index::{SharedIndex, build_from_texts};
///
/// let shared: Arc<SharedIndex> = Arc::new(SharedIndex::new());
///
/// let readers: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || {
///             let index = shared.get_or_build(|| build_from_texts(["home sales"]));
///             let ids = index.find("HOME").document_ids().to_vec();
///             ids
///         })
///     })
///     .collect();
///
/// for reader in readers {
///     assert_eq!(reader.join().unwrap(), vec![0]);
/// }
/// ```
#[derive(Debug)]
pub struct SharedIndex<D = DocId> {
    cell: OnceLock<Arc<InvertedIndex<D>>>,
}

impl<D> SharedIndex<D> {
    /// Create an empty, unpublished slot.
    pub fn new() -> Self {
        SharedIndex {
            cell: OnceLock::new(),
        }
    }

    /// Publish a finished index. Fails if an index was already published.
    pub fn publish(&self, index: InvertedIndex<D>) -> Result<Arc<InvertedIndex<D>>> {
        let index = Arc::new(index);
        self.cell
            .set(Arc::clone(&index))
            .map_err(|_| LexiconError::index("an index has already been published"))?;
        Ok(index)
    }

    /// The published index, if any.
    pub fn get(&self) -> Option<Arc<InvertedIndex<D>>> {
        self.cell.get().cloned()
    }

    /// Return the published index, building and publishing it first if needed.
    ///
    /// When several threads race here, exactly one runs `build`; the others
    /// block until it has finished and then see its result.
    pub fn get_or_build<F>(&self, build: F) -> Arc<InvertedIndex<D>>
    where
        F: FnOnce() -> InvertedIndex<D>,
    {
        Arc::clone(self.cell.get_or_init(|| Arc::new(build())))
    }

    /// Check whether an index has been published.
    pub fn is_published(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<D> Default for SharedIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::build_from_texts;

    #[test]
    fn test_publish_once() {
        let shared = SharedIndex::new();
        assert!(!shared.is_published());
        assert!(shared.get().is_none());

        let index = shared.publish(build_from_texts(["home sales"])).unwrap();
        assert!(shared.is_published());
        assert!(Arc::ptr_eq(&index, &shared.get().unwrap()));

        let second = shared.publish(build_from_texts(["other"]));
        assert!(matches!(second, Err(LexiconError::Index(_))));
        assert!(shared.get().unwrap().contains("home"));
    }

    #[test]
    fn test_get_or_build_runs_once() {
        let shared = SharedIndex::new();
        let mut builds = 0;

        let first = shared.get_or_build(|| {
            builds += 1;
            build_from_texts(["a"])
        });
        let second = shared.get_or_build(|| build_from_texts(["b"]));

        assert_eq!(builds, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.contains("a"));
    }
}
