//! TF-IDF content model over movie overviews.
//!
//! ## Algorithm
//! 1. Keep only movies with a usable description (others are excluded
//!    from the corpus entirely, not given zero vectors)
//! 2. Expand each description into unigram + bigram terms
//! 3. Cap the vocabulary at `max_vocabulary` terms, picked by total
//!    corpus frequency (ties alphabetical)
//! 4. Weight terms with smoothed TF-IDF and L2-normalize each vector,
//!    so cosine similarity reduces to a sparse dot product
//!
//! `fit` replaces the fitted state wholesale, so a model can be re-fit
//! with a fresher metadata snapshot at any time; readers of the old
//! state are unaffected mid-build.

use crate::tokenize::terms;
use snapshots::{MovieId, MovieMetadata};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, instrument, warn};

/// Default vocabulary cap.
pub const MAX_VOCABULARY: usize = 5000;

/// Similarities below this count as "unrelated" and are never
/// surfaced as neighbors.
const SIMILARITY_EPSILON: f32 = 1e-6;

/// Sparse L2-normalized TF-IDF vector: `(term_id, weight)` pairs
/// sorted by term id.
type SparseVector = Vec<(u32, f32)>;

/// Dot product of two sorted sparse vectors. Since both sides are
/// L2-normalized this is their cosine similarity.
fn sparse_dot(a: &SparseVector, b: &SparseVector) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Fitted vector space: one document per corpus movie.
#[derive(Debug, Clone)]
struct FittedCorpus {
    /// Document position -> movie id, ascending.
    movie_ids: Vec<MovieId>,
    /// Reverse lookup.
    positions: HashMap<MovieId, usize>,
    /// One sparse vector per document, same order as `movie_ids`.
    vectors: Vec<SparseVector>,
    vocabulary_size: usize,
}

/// Content-similarity model over movie descriptions.
///
/// Unfitted (or fitted on an unusable corpus) the model answers every
/// query with an empty result; it never raises.
#[derive(Debug, Clone)]
pub struct ContentModel {
    max_vocabulary: usize,
    fitted: Option<FittedCorpus>,
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentModel {
    pub fn new() -> Self {
        Self {
            max_vocabulary: MAX_VOCABULARY,
            fitted: None,
        }
    }

    /// Configure the vocabulary cap (default: 5000).
    pub fn with_max_vocabulary(mut self, max_vocabulary: usize) -> Self {
        self.max_vocabulary = max_vocabulary;
        self
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of movies in the fitted corpus.
    pub fn corpus_size(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.movie_ids.len())
    }

    /// Fit the vector space on a metadata snapshot.
    ///
    /// Idempotent: each call replaces the previous state atomically.
    /// Duplicate movie ids keep the last entry (snapshot semantics).
    /// A corpus without a single usable description leaves the model
    /// unfitted.
    #[instrument(skip_all, fields(corpus = corpus.len()))]
    pub fn fit(&mut self, corpus: &[MovieMetadata]) {
        // BTreeMap: dedup by id and fix the document order in one go.
        let mut documents: BTreeMap<MovieId, Vec<String>> = BTreeMap::new();
        for movie in corpus {
            if let Some(description) = movie.description() {
                documents.insert(movie.id, terms(description));
            }
        }
        documents.retain(|_, doc_terms| !doc_terms.is_empty());

        if documents.is_empty() {
            warn!("No valid movie descriptions found, model left unfitted");
            self.fitted = None;
            return;
        }

        // Vocabulary selection: top terms by total corpus frequency.
        let mut corpus_counts: BTreeMap<&str, (u64, u32)> = BTreeMap::new();
        for doc_terms in documents.values() {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in doc_terms {
                let entry = corpus_counts.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                if seen.insert(term.as_str()) {
                    entry.1 += 1; // document frequency
                }
            }
        }

        let mut ranked: Vec<(&str, u64, u32)> = corpus_counts
            .iter()
            .map(|(&term, &(count, df))| (term, count, df))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_vocabulary);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f32;
        let vocabulary: HashMap<&str, (u32, f32)> = ranked
            .iter()
            .enumerate()
            .map(|(term_id, &(term, _, df))| {
                // Smoothed inverse document frequency.
                let idf = ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0;
                (term, (term_id as u32, idf))
            })
            .collect();

        // Vectorize each document and L2-normalize.
        let movie_ids: Vec<MovieId> = documents.keys().copied().collect();
        let vectors: Vec<SparseVector> = documents
            .values()
            .map(|doc_terms| {
                let mut weights: BTreeMap<u32, f32> = BTreeMap::new();
                for term in doc_terms {
                    if let Some(&(term_id, idf)) = vocabulary.get(term.as_str()) {
                        *weights.entry(term_id).or_insert(0.0) += idf;
                    }
                }
                let norm = weights.values().map(|w| w * w).sum::<f32>().sqrt();
                if norm < SIMILARITY_EPSILON {
                    return Vec::new();
                }
                weights
                    .into_iter()
                    .map(|(term_id, weight)| (term_id, weight / norm))
                    .collect()
            })
            .collect();

        let positions: HashMap<MovieId, usize> = movie_ids
            .iter()
            .enumerate()
            .map(|(pos, &id)| (id, pos))
            .collect();

        debug!(
            "Fitted TF-IDF corpus: {} documents, {} terms",
            movie_ids.len(),
            vocabulary.len()
        );

        self.fitted = Some(FittedCorpus {
            movie_ids,
            positions,
            vectors,
            vocabulary_size: vocabulary.len(),
        });
    }

    /// Number of vocabulary terms in the fitted corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.vocabulary_size)
    }

    /// Cosine similarity between two corpus movies, `None` when either
    /// is absent or the model is unfitted.
    pub fn similarity(&self, a: MovieId, b: MovieId) -> Option<f32> {
        let fitted = self.fitted.as_ref()?;
        let pa = *fitted.positions.get(&a)?;
        let pb = *fitted.positions.get(&b)?;
        Some(sparse_dot(&fitted.vectors[pa], &fitted.vectors[pb]))
    }

    /// The up-to-`k` movies most similar to `movie_id` by description,
    /// most similar first. The input movie and zero-similarity movies
    /// are excluded; equal scores break toward the lower movie id.
    ///
    /// Fails soft: unfitted model or unknown id yields an empty list.
    pub fn similar(&self, movie_id: MovieId, k: usize) -> Vec<MovieId> {
        let Some(fitted) = self.fitted.as_ref() else {
            debug!("Content model not fitted, no similar movies");
            return Vec::new();
        };
        let Some(&position) = fitted.positions.get(&movie_id) else {
            debug!("Movie {} not in content corpus", movie_id);
            return Vec::new();
        };

        let query = &fitted.vectors[position];
        let mut scored: Vec<(MovieId, f32)> = fitted
            .movie_ids
            .iter()
            .zip(&fitted.vectors)
            .filter(|&(&id, _)| id != movie_id)
            .map(|(&id, vector)| (id, sparse_dot(query, vector)))
            .filter(|&(_, score)| score > SIMILARITY_EPSILON)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k);
        scored.into_iter().map(|(id, _)| id).collect()
    }
}
