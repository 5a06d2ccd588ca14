pub mod subsequences;

pub use subsequences::{
    distinct_subsequence_count, is_subsequence, subsequence_count, subsequences,
    DuplicatePolicy, SubsequenceConfig, SubsequenceEnumerator, SubsequenceMemo, Traversal,
};
