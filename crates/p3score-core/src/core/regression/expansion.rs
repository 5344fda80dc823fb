use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

/// Leading raw features copied through unconditionally.
pub const PASSTHROUGH_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("Expansion needs at least 4 raw features, got {0}")]
    TooFewFeatures(usize),
    #[error("Selected position {position} is past the last enumerated term ({last})")]
    SelectionOutOfRange { position: usize, last: usize },
    #[error("Expected {expected} raw features, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// One retained polynomial term, as indices into the raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Linear(usize),
    Pair(usize, usize),
    Triple(usize, usize, usize),
}

impl Term {
    fn evaluate(self, raw: &[f64]) -> f64 {
        match self {
            Term::Linear(i) => raw[i],
            Term::Pair(i, j) => raw[i] * raw[j],
            Term::Triple(i, j, k) => raw[i] * raw[j] * raw[k],
        }
    }
}

/// Builds the expanded feature vector the linear model is fitted on.
///
/// The first four raw features are always kept. After them, candidate terms
/// are enumerated at positions counting up from 4: the remaining linear terms,
/// every product `x[i]·x[j]` with `i <= j`, then every `x[i]·x[j]·x[k]` with
/// `i <= j <= k`, both over the whole raw record in lexicographic order. A
/// term is kept when its position is in the selection; selected positions
/// below 4 match nothing.
#[derive(Debug, Clone)]
pub struct FeatureExpander {
    raw_count: usize,
    plan: Vec<Term>,
}

impl FeatureExpander {
    pub fn new(selection: &[usize], raw_count: usize) -> Result<Self, ExpansionError> {
        if raw_count < PASSTHROUGH_COUNT {
            return Err(ExpansionError::TooFewFeatures(raw_count));
        }

        let linear = (PASSTHROUGH_COUNT..raw_count).map(Term::Linear);
        let pairs = (0..raw_count)
            .combinations_with_replacement(2)
            .map(|ix| Term::Pair(ix[0], ix[1]));
        let triples = (0..raw_count)
            .combinations_with_replacement(3)
            .map(|ix| Term::Triple(ix[0], ix[1], ix[2]));
        let candidates: Vec<Term> = linear.chain(pairs).chain(triples).collect();

        let last = PASSTHROUGH_COUNT + candidates.len() - 1;
        if let Some(&position) = selection.iter().find(|&&p| p > last) {
            return Err(ExpansionError::SelectionOutOfRange { position, last });
        }

        let selected: HashSet<usize> = selection.iter().copied().collect();
        let plan = candidates
            .into_iter()
            .enumerate()
            .filter(|(offset, _)| selected.contains(&(PASSTHROUGH_COUNT + offset)))
            .map(|(_, term)| term)
            .collect();

        Ok(Self { raw_count, plan })
    }

    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Length of every vector returned by [`expand`](Self::expand).
    pub fn output_len(&self) -> usize {
        PASSTHROUGH_COUNT + self.plan.len()
    }

    pub fn expand(&self, raw: &[f64]) -> Result<Vec<f64>, ExpansionError> {
        if raw.len() != self.raw_count {
            return Err(ExpansionError::LengthMismatch {
                expected: self.raw_count,
                actual: raw.len(),
            });
        }
        let mut expanded = Vec::with_capacity(self.output_len());
        expanded.extend_from_slice(&raw[..PASSTHROUGH_COUNT]);
        expanded.extend(self.plan.iter().map(|term| term.evaluate(raw)));
        Ok(expanded)
    }
}
