use serde::Serialize;
use thiserror::Error;

/// Scores strictly above this value qualify a record as brave.
pub const BRAVERY_THRESHOLD: i64 = 500;

/// The bravest list never carries more than this many names.
pub const BRAVEST_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedOutput {
    pub sorted_names: Vec<String>,
    pub sorted_scores: Vec<i64>,
    pub bravest: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("length mismatch: {names} names vs {scores} scores")]
    LengthMismatch { names: usize, scores: usize },
}

pub fn pair_records(names: Vec<String>, scores: Vec<i64>) -> Result<Vec<Record>, RankError> {
    if names.len() != scores.len() {
        return Err(RankError::LengthMismatch {
            names: names.len(),
            scores: scores.len(),
        });
    }
    Ok(names
        .into_iter()
        .zip(scores)
        .map(|(name, score)| Record { name, score })
        .collect())
}

pub fn compute(names: &[String], scores: &[i64]) -> Result<RankedOutput, RankError> {
    let records = pair_records(names.to_vec(), scores.to_vec())?;
    Ok(compute_records(&records))
}

pub fn compute_records(records: &[Record]) -> RankedOutput {
    // The name sort and the score sort are independent permutations; the
    // name/score pairing is intentionally not preserved in the sorted views.
    let mut sorted_names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    sorted_names.sort();

    let mut sorted_scores: Vec<i64> = records.iter().map(|r| r.score).collect();
    sorted_scores.sort_unstable();

    let bravest = records
        .iter()
        .filter(|r| r.score > BRAVERY_THRESHOLD)
        .take(BRAVEST_CAP)
        .map(|r| r.name.clone())
        .collect();

    RankedOutput {
        sorted_names,
        sorted_scores,
        bravest,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/rank.rs"]
mod tests;
