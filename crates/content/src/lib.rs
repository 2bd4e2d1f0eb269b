//! # Content Crate
//!
//! Text-based similarity over movie overviews:
//! - tokenizer (unigrams + bigrams, English stop words removed)
//! - TF-IDF vector space capped at 5000 vocabulary terms
//! - [`ContentModel::similar`] nearest-neighbor queries
//!
//! The model is fit from a catalog metadata snapshot; movies without a
//! usable description stay out of the corpus. Re-fitting replaces the
//! whole vector space, which keeps the model's answers consistent with
//! exactly one snapshot at a time.

pub mod model;
pub mod stopwords;
pub mod tokenize;

// Re-export main types
pub use model::{ContentModel, MAX_VOCABULARY};
