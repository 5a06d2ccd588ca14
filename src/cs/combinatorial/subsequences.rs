//! # Subsequence Enumeration
//!
//! Generates every subsequence of a string: every sequence obtained by deleting zero or
//! more characters without reordering the rest. A string of `n` characters has `2^n`
//! index subsets, so the output grows exponentially and callers are expected to keep
//! `n` small (or configure a length limit on the enumerator).
//!
//! Two strategies are provided:
//! - **Preorder**: a depth-first walk of the subsequence trie, extending a growing
//!   prefix with each remaining character in input order. Results can be emitted as
//!   they are built (see [`SubsequenceEnumerator::for_each`]).
//! - **Power set**: `Subseq(c + tail) = Subseq(tail) ++ [c + s | s in Subseq(tail)]`,
//!   with `Subseq(tail)` cached in a [`SubsequenceMemo`] keyed by the suffix string.
//!   A memo can be shared across several top-level calls so overlapping suffixes are
//!   computed once.
//!
//! Inputs are split into `char`s; no case folding or normalization takes place.
//!
//! # Example
//! ```
//! use subseq::cs::combinatorial::subsequences::subsequences;
//!
//! let all = subsequences("ABC");
//! assert_eq!(all, vec!["", "A", "AB", "ABC", "AC", "B", "BC", "C"]);
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, trace};

use crate::error::{Error, Result};

/// What to do with content-equal subsequences coming from different index subsets,
/// which only happens when the input repeats a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first occurrence of each distinct string. `"AA"` yields `"", "A", "AA"`.
    #[default]
    Deduplicate,
    /// Keep one entry per index subset, so an input of `n` characters always yields
    /// `2^n` entries. `"AA"` yields `"", "A", "A", "AA"`.
    KeepAll,
}

/// Order in which [`SubsequenceEnumerator::enumerate`] returns its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Depth-first preorder over the subsequence trie. The empty subsequence comes
    /// first, then each branch in the input's left-to-right order:
    /// `"ABC"` gives `"", "A", "AB", "ABC", "AC", "B", "BC", "C"`.
    #[default]
    Preorder,
    /// Order of the memoized power-set construction: the tail's subsequences, then the
    /// same list with the head prepended. `"ABC"` gives
    /// `"", "C", "B", "BC", "A", "AC", "AB", "ABC"`.
    PowerSet,
    /// Lexicographic by per-character ordinal, empty string first.
    Lexicographic,
}

/// Configuration for a [`SubsequenceEnumerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsequenceConfig {
    /// Longest accepted input, in characters. `None` accepts any length.
    pub max_len: Option<usize>,
    /// Handling of content-equal subsequences.
    pub duplicates: DuplicatePolicy,
}

/// Cache of suffix string -> subsequences of that suffix, in power-set order.
///
/// Entries are only ever added. A memo lives as long as its owner decides: create one
/// per call for isolated computations, or reuse one across calls on overlapping inputs.
#[derive(Debug, Clone, Default)]
pub struct SubsequenceMemo {
    table: BTreeMap<String, Vec<String>>,
    hits: usize,
}

impl SubsequenceMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached suffixes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of lookups served from the cache since creation (or the last `clear`).
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cached subsequences of `suffix`, if that suffix has been computed.
    pub fn get(&self, suffix: &str) -> Option<&[String]> {
        self.table.get(suffix).map(Vec::as_slice)
    }

    /// Cached entries ordered by suffix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
    }

    fn lookup_or_compute(&mut self, suffix: &[char]) -> Vec<String> {
        let key: String = suffix.iter().collect();
        if let Some(cached) = self.table.get(&key) {
            self.hits += 1;
            trace!("memo hit for suffix {:?}", key);
            return cached.clone();
        }
        trace!("memo miss for suffix {:?}", key);
        let computed = power_set(suffix, self);
        self.table.insert(key, computed.clone());
        computed
    }
}

/// Enumerates the subsequences of a string.
///
/// The enumerator holds only configuration, so one instance can serve any number of
/// callers. Memo state is always passed in explicitly.
///
/// # Example
/// ```
/// use subseq::cs::combinatorial::subsequences::{
///     DuplicatePolicy, SubsequenceEnumerator, Traversal,
/// };
///
/// let enumerator = SubsequenceEnumerator::new()
///     .max_len(16)
///     .duplicates(DuplicatePolicy::KeepAll);
///
/// let ordered = enumerator.enumerate("AB", Traversal::Preorder).unwrap();
/// assert_eq!(ordered, vec!["", "A", "AB", "B"]);
///
/// assert!(enumerator.enumerate_all(&"x".repeat(17)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubsequenceEnumerator {
    config: SubsequenceConfig,
}

impl SubsequenceEnumerator {
    /// Enumerator with no length limit that deduplicates results.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SubsequenceConfig) -> Self {
        Self { config }
    }

    /// Reject inputs longer than `max_len` characters.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.config.max_len = Some(max_len);
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    pub fn config(&self) -> &SubsequenceConfig {
        &self.config
    }

    /// Returns every subsequence of `input`, sorted lexicographically.
    ///
    /// With distinct characters the result holds exactly `2^n` strings. The empty input
    /// yields a single empty string.
    ///
    /// # Errors
    /// [`Error::ResourceLimitExceeded`] if `input` is longer than the configured maximum.
    pub fn enumerate_all(&self, input: &str) -> Result<Vec<String>> {
        let chars = self.checked_chars(input)?;
        debug!("enumerating subsequences of {} characters", chars.len());

        let mut result = collect_preorder(&chars);
        result.sort_unstable();
        if self.config.duplicates == DuplicatePolicy::Deduplicate {
            result.dedup();
        }

        debug!("produced {} subsequences", result.len());
        Ok(result)
    }

    /// Returns every subsequence of `input` in the given traversal order.
    ///
    /// Under [`DuplicatePolicy::Deduplicate`] the first occurrence in that order is kept.
    pub fn enumerate(&self, input: &str, traversal: Traversal) -> Result<Vec<String>> {
        match traversal {
            Traversal::Lexicographic => self.enumerate_all(input),
            Traversal::PowerSet => self.enumerate_with_memo(input, &mut SubsequenceMemo::new()),
            Traversal::Preorder => {
                let chars = self.checked_chars(input)?;
                debug!("enumerating subsequences of {} characters", chars.len());
                let result = self.apply_policy(collect_preorder(&chars));
                debug!("produced {} subsequences", result.len());
                Ok(result)
            }
        }
    }

    /// Power-set construction backed by `memo`, in [`Traversal::PowerSet`] order.
    ///
    /// Suffixes already present in `memo` are not recomputed, which pays off when the
    /// same memo is reused for inputs sharing a suffix.
    ///
    /// ```
    /// use subseq::cs::combinatorial::subsequences::{SubsequenceEnumerator, SubsequenceMemo};
    ///
    /// let enumerator = SubsequenceEnumerator::new();
    /// let mut memo = SubsequenceMemo::new();
    /// enumerator.enumerate_with_memo("ABC", &mut memo).unwrap();
    /// enumerator.enumerate_with_memo("XBC", &mut memo).unwrap();
    /// assert_eq!(memo.hits(), 1);
    /// ```
    pub fn enumerate_with_memo(&self, input: &str, memo: &mut SubsequenceMemo) -> Result<Vec<String>> {
        let chars = self.checked_chars(input)?;
        debug!(
            "enumerating subsequences of {} characters with {} cached suffixes",
            chars.len(),
            memo.len()
        );
        let result = self.apply_policy(power_set(&chars, memo));
        debug!("produced {} subsequences", result.len());
        Ok(result)
    }

    /// Calls `visit` with each subsequence in preorder as soon as it is built, without
    /// collecting them. Returns the number of subsequences visited.
    pub fn for_each<F>(&self, input: &str, mut visit: F) -> Result<usize>
    where
        F: FnMut(&str),
    {
        let chars = self.checked_chars(input)?;
        let mut prefix = String::with_capacity(input.len());
        let mut emitted = 0usize;

        match self.config.duplicates {
            DuplicatePolicy::KeepAll => preorder(&chars, 0, &mut prefix, &mut |s: &str| {
                emitted += 1;
                visit(s);
            }),
            DuplicatePolicy::Deduplicate => {
                let mut seen = HashSet::new();
                preorder(&chars, 0, &mut prefix, &mut |s: &str| {
                    if seen.insert(s.to_owned()) {
                        emitted += 1;
                        visit(s);
                    }
                });
            }
        }

        debug!("visited {} subsequences", emitted);
        Ok(emitted)
    }

    fn checked_chars(&self, input: &str) -> Result<Vec<char>> {
        let chars: Vec<char> = input.chars().collect();
        if let Some(max) = self.config.max_len {
            if chars.len() > max {
                debug!("rejecting input of {} characters (max {})", chars.len(), max);
                return Err(Error::resource_limit(chars.len(), max));
            }
        }
        Ok(chars)
    }

    fn apply_policy(&self, items: Vec<String>) -> Vec<String> {
        match self.config.duplicates {
            DuplicatePolicy::KeepAll => items,
            DuplicatePolicy::Deduplicate => {
                let mut seen = HashSet::with_capacity(items.len());
                items.into_iter().filter(|s| seen.insert(s.clone())).collect()
            }
        }
    }
}

/// All subsequences of `input`, sorted and deduplicated.
///
/// Shorthand for [`SubsequenceEnumerator::enumerate_all`] with the default configuration,
/// which cannot fail.
pub fn subsequences(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = collect_preorder(&chars);
    result.sort_unstable();
    result.dedup();
    result
}

/// Returns true if `candidate` can be obtained from `source` by deleting zero or more
/// characters without reordering.
///
/// ```
/// use subseq::cs::combinatorial::subsequences::is_subsequence;
///
/// assert!(is_subsequence("AC", "ABC"));
/// assert!(!is_subsequence("CA", "ABC"));
/// ```
pub fn is_subsequence(candidate: &str, source: &str) -> bool {
    let mut it = source.chars();
    candidate.chars().all(|c| it.any(|x| x == c))
}

/// Number of index subsets of an input of `len` characters, `2^len`.
pub fn subsequence_count(len: usize) -> Result<u128> {
    u32::try_from(len)
        .ok()
        .and_then(|shift| 1u128.checked_shl(shift))
        .ok_or_else(|| Error::count_overflow(len))
}

/// Number of content-distinct subsequences of `input`, empty one included, computed
/// without enumerating them.
///
/// ```
/// use subseq::cs::combinatorial::subsequences::distinct_subsequence_count;
///
/// assert_eq!(distinct_subsequence_count("ABC").unwrap(), 8);
/// assert_eq!(distinct_subsequence_count("AA").unwrap(), 3);
/// ```
pub fn distinct_subsequence_count(input: &str) -> Result<u128> {
    // Each character doubles the count, minus the strings already formed the last
    // time that character was appended.
    let mut total: u128 = 1;
    let mut before_last: HashMap<char, u128> = HashMap::new();

    for c in input.chars() {
        let doubled = total
            .checked_mul(2)
            .ok_or_else(|| Error::count_overflow(input.chars().count()))?;
        let repeated = before_last.insert(c, total).unwrap_or(0);
        total = doubled - repeated;
    }

    Ok(total)
}

fn collect_preorder(chars: &[char]) -> Vec<String> {
    let mut result = Vec::new();
    let mut prefix = String::new();
    preorder(chars, 0, &mut prefix, &mut |s: &str| result.push(s.to_owned()));
    result
}

fn preorder<F>(chars: &[char], start: usize, prefix: &mut String, visit: &mut F)
where
    F: FnMut(&str),
{
    visit(prefix);
    for i in start..chars.len() {
        prefix.push(chars[i]);
        preorder(chars, i + 1, prefix, visit);
        prefix.pop();
    }
}

fn power_set(chars: &[char], memo: &mut SubsequenceMemo) -> Vec<String> {
    let Some((&head, tail)) = chars.split_first() else {
        return vec![String::new()];
    };

    let rest = memo.lookup_or_compute(tail);
    let prefixed: Vec<String> = rest
        .iter()
        .map(|s| {
            let mut p = String::with_capacity(head.len_utf8() + s.len());
            p.push(head);
            p.push_str(s);
            p
        })
        .collect();

    let mut result = rest;
    result.extend(prefixed);
    result
}
