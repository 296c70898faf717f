//! Prefix tries, edit distance and fuzzy list reconciliation.
//!
//! Two independent pieces that usually meet in the same caller:
//!
//! ```text
//! ┌──────────────────┐              ┌───────────────────────────┐
//! │     trie.rs      │              │         fuzzy/            │
//! │ (insert, remove, │              │ (levenshtein, similarity, │
//! │  autocomplete)   │              │  Scorer)                  │
//! └──────────────────┘              └─────────────┬─────────────┘
//!          │                                      ▼
//!          │                        ┌───────────────────────────┐
//!          │                        │         mapper/           │
//!          │                        │ (FuzzyMapper, MapMode)    │
//!          │                        └─────────────┬─────────────┘
//!          ▼                                      ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        contracts.rs                         │
//! │     (debug-build structure and distance-bound checks)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lexis::{levenshtein, FuzzyMapper, MapMode, MapOutput, Trie};
//!
//! let mut trie: Trie = ["cat", "car", "cart", "dog"].into_iter().collect();
//! assert_eq!(trie.count_with_prefix("ca"), 3);
//! assert!(trie.remove("car"));
//! assert!(trie.contains("cart"));
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//!
//! let mapper = FuzzyMapper::default();
//! let output = mapper.map(&["Apple", "Banana"], &["Aple", "Cherry"], MapMode::Filled);
//! assert_eq!(output, MapOutput::Filled(vec!["Apple".into(), "Cherry".into()]));
//! ```

mod contracts;
pub mod error;
pub mod fuzzy;
pub mod mapper;
pub mod testing;
mod trie;
mod utils;

pub use error::MapperError;
pub use fuzzy::{
    lcs_len, levenshtein, levenshtein_bounded, levenshtein_slice, levenshtein_within,
    matching_symbols, similarity, Scorer,
};
pub use mapper::{FuzzyMapper, MapMode, MapOutput, MapperConfig, Match};
pub use trie::Trie;
pub use utils::normalize;
