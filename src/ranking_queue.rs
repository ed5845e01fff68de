use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A single `(score, item)` entry recorded in a [`RankingQueue`].
///
/// Entries rank by score, highest first, and fall back to the item name in ascending
/// lexicographic order when scores are equal. An entry is never modified after it is
/// pushed; a newer score for the same item is recorded as a separate entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub score: i64,
    pub item: String,
}

impl Ord for RankedEntry {
    // BinaryHeap is a max-heap, so the "greater" entry is the better ranked one:
    // higher score, then the lexicographically smaller name.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue of [`RankedEntry`] values for one category.
///
/// `RankingQueue` only knows about ordering. It may hold several entries for the same item,
/// and it is up to the owner to decide which of them are still current. The best ranked
/// entry is always available through [`RankingQueue::peek`].
///
/// # Examples
///
/// ```
/// # use ferris_rankings::ranking_queue::RankingQueue;
/// let mut queue = RankingQueue::new();
///
/// queue.push("miso".to_string(), 12);
/// queue.push("ramen".to_string(), 14);
/// queue.push("sushi".to_string(), 8);
///
/// let best = queue.peek().unwrap();
/// assert_eq!(best.item, "ramen");
/// assert_eq!(best.score, 14);
/// assert_eq!(queue.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RankingQueue {
    entries: BinaryHeap<RankedEntry>,
}

impl RankingQueue {
    /// Creates an empty `RankingQueue`.
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
        }
    }

    /// Records a new entry for `item`. Older entries for the same item are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ferris_rankings::ranking_queue::RankingQueue;
    /// let mut queue = RankingQueue::new();
    /// queue.push("kimchi".to_string(), 9);
    /// queue.push("kimchi".to_string(), 3);
    ///
    /// // both entries are kept, the higher score still ranks first
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek().unwrap().score, 9);
    /// ```
    pub fn push(&mut self, item: String, score: i64) {
        self.entries.push(RankedEntry { score, item });
    }

    /// Returns the best ranked entry without removing it.
    ///
    /// Ties on score resolve to the lexicographically smallest item.
    ///
    /// ```
    /// # use ferris_rankings::ranking_queue::RankingQueue;
    /// let mut queue = RankingQueue::new();
    /// queue.push("udon".to_string(), 10);
    /// queue.push("soba".to_string(), 10);
    /// assert_eq!(queue.peek().unwrap().item, "soba");
    /// ```
    pub fn peek(&self) -> Option<&RankedEntry> {
        self.entries.peek()
    }

    /// Removes and returns the best ranked entry.
    pub fn pop(&mut self) -> Option<RankedEntry> {
        self.entries.pop()
    }

    /// Number of physical entries, current and stale alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
