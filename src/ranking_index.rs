use std::collections::HashMap;

use log::{debug, trace};

use crate::errors::RankingError;
use crate::ranking_queue::RankingQueue;

/// Tracks a score and a category for every item and answers "which item ranks first in this
/// category right now?".
///
/// Scores can change at any time. Rather than searching a category's queue for the old entry,
/// a score change pushes a fresh entry and leaves the old one behind. Queries compare the
/// queue's front entry against the authoritative score table and discard it if it no longer
/// matches, so every stale entry is removed at most once.
///
/// # Examples
///
/// ```
/// # use ferris_rankings::ranking_index::RankingIndex;
/// let mut index = RankingIndex::new(
///     &["kimchi", "miso", "ramen", "bulgogi"],
///     &["korean", "japanese", "japanese", "korean"],
///     &[9, 12, 14, 7],
/// )
/// .unwrap();
///
/// assert_eq!(index.best_in_category("japanese").unwrap(), "ramen");
///
/// index.change_score("kimchi", 3);
/// assert_eq!(index.best_in_category("korean").unwrap(), "bulgogi");
/// ```
#[derive(Debug, Default)]
pub struct RankingIndex {
    item_categories: HashMap<String, String>,
    item_scores: HashMap<String, i64>,
    category_queues: HashMap<String, RankingQueue>,
}

impl RankingIndex {
    /// Builds an index from three parallel sequences.
    ///
    /// Position `i` assigns `items[i]` to `categories[i]` with an initial score of `scores[i]`.
    /// A category's queue is created the first time an item references it.
    ///
    /// # Errors
    ///
    /// * [`RankingError::LengthMismatch`] if the sequences differ in length
    /// * [`RankingError::DuplicateItem`] if an item identifier appears more than once
    pub fn new<I, C>(items: &[I], categories: &[C], scores: &[i64]) -> Result<Self, RankingError>
    where
        I: AsRef<str>,
        C: AsRef<str>,
    {
        if items.len() != categories.len() || items.len() != scores.len() {
            return Err(RankingError::LengthMismatch {
                items: items.len(),
                categories: categories.len(),
                scores: scores.len(),
            });
        }

        let mut index = RankingIndex {
            item_categories: HashMap::with_capacity(items.len()),
            item_scores: HashMap::with_capacity(items.len()),
            category_queues: HashMap::new(),
        };

        for ((item, category), &score) in items.iter().zip(categories).zip(scores) {
            let item = item.as_ref();
            let category = category.as_ref();

            if index.item_categories.contains_key(item) {
                return Err(RankingError::DuplicateItem(item.to_string()));
            }

            index
                .item_categories
                .insert(item.to_string(), category.to_string());
            index.item_scores.insert(item.to_string(), score);
            index
                .category_queues
                .entry(category.to_string())
                .or_default()
                .push(item.to_string(), score);
        }

        debug!(
            "Indexed {} items across {} categories",
            index.item_scores.len(),
            index.category_queues.len()
        );

        Ok(index)
    }

    /// Sets a new score for `item`, ignoring items the index does not know.
    ///
    /// The previous queue entry for the item is not removed; it becomes stale and is dropped
    /// the next time a query reaches it. Use [`RankingIndex::try_change_score`] to find out
    /// whether the update was applied.
    pub fn change_score(&mut self, item: &str, new_score: i64) {
        if let Err(e) = self.try_change_score(item, new_score) {
            debug!("Ignoring score change to {}: {}", new_score, e);
        }
    }

    /// Sets a new score for `item`, reporting unknown items.
    ///
    /// On success the item's category queue has grown by exactly one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ferris_rankings::ranking_index::RankingIndex;
    /// # use ferris_rankings::errors::RankingError;
    /// let mut index = RankingIndex::new(&["miso"], &["japanese"], &[12]).unwrap();
    ///
    /// assert!(index.try_change_score("miso", 20).is_ok());
    /// assert_eq!(index.score_of("miso"), Some(20));
    ///
    /// let err = index.try_change_score("tacos", 5).unwrap_err();
    /// assert!(matches!(err, RankingError::UnknownItem(_)));
    /// ```
    pub fn try_change_score(&mut self, item: &str, new_score: i64) -> Result<(), RankingError> {
        let category = self
            .item_categories
            .get(item)
            .ok_or_else(|| RankingError::UnknownItem(item.to_string()))?;
        // both lookups happen before anything is written so a failure leaves the maps untouched
        let score = self
            .item_scores
            .get_mut(item)
            .ok_or_else(|| RankingError::EmptyCategory(category.clone()))?;
        let queue = self
            .category_queues
            .get_mut(category)
            .ok_or_else(|| RankingError::EmptyCategory(category.clone()))?;

        queue.push(item.to_string(), new_score);
        *score = new_score;

        trace!("{} in {} now scores {}", item, category, new_score);
        Ok(())
    }

    /// Returns the highest scoring item in `category`, ties going to the smallest item name.
    ///
    /// Stale entries found at the front of the category's queue are discarded along the way.
    /// The returned item's own entry stays in the queue, so repeated calls without an
    /// intervening score change return the same item.
    ///
    /// # Errors
    ///
    /// * [`RankingError::UnknownCategory`] if no item belongs to `category`
    /// * [`RankingError::EmptyCategory`] if the queue runs dry without a current entry,
    ///   which indicates the index's maps are out of sync
    pub fn best_in_category(&mut self, category: &str) -> Result<&str, RankingError> {
        let item_scores = &self.item_scores;
        let queue = self
            .category_queues
            .get_mut(category)
            .ok_or_else(|| RankingError::UnknownCategory(category.to_string()))?;

        let mut discarded = 0usize;
        while let Some(top) = queue.peek() {
            if item_scores.get(&top.item) == Some(&top.score) {
                break;
            }
            trace!("Discarding stale entry {} ({})", top.item, top.score);
            queue.pop();
            discarded += 1;
        }

        if discarded > 0 {
            debug!("Discarded {} stale entries from {}", discarded, category);
        }

        queue
            .peek()
            .map(|entry| entry.item.as_str())
            .ok_or_else(|| RankingError::EmptyCategory(category.to_string()))
    }

    /// Current score of `item`, if the index knows it.
    pub fn score_of(&self, item: &str) -> Option<i64> {
        self.item_scores.get(item).copied()
    }

    /// Category `item` was registered under.
    pub fn category_of(&self, item: &str) -> Option<&str> {
        self.item_categories.get(item).map(String::as_str)
    }

    /// All known categories, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_queues.keys().map(String::as_str)
    }

    /// Number of physical entries in the queue for `category`, stale ones included.
    pub fn queue_len(&self, category: &str) -> Option<usize> {
        self.category_queues.get(category).map(RankingQueue::len)
    }

    /// Number of known items.
    pub fn len(&self) -> usize {
        self.item_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_scores.is_empty()
    }

    /// Drops `item` from the score table only, leaving its category and queue entries behind.
    #[cfg(test)]
    pub(crate) fn forget_score(&mut self, item: &str) {
        self.item_scores.remove(item);
    }
}
