use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use thiserror::Error;
use tracing::{info, warn};

use crate::rank::{RankError, Record, pair_records};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("expected {expected} names, found {found}")]
    NameCount { expected: usize, found: usize },
    #[error("expected {expected} scores, found {found}")]
    ScoreCount { expected: usize, found: usize },
    #[error(transparent)]
    Rank(#[from] RankError),
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        let decoder = MultiGzDecoder::new(BufReader::new(file));
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<Record>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    read_records(reader.as_mut())
}

/// Wire format: a count line, one whitespace-separated line of names, then
/// the scores as whitespace/newline-separated integers.
pub fn read_records(reader: &mut dyn BufRead) -> Result<Vec<Record>, InputError> {
    let count_line = read_nonempty_line(reader)?
        .ok_or_else(|| InputError::Parse("missing record count line".to_string()))?;
    let declared = parse_count(count_line.trim())?;

    let names = if declared == 0 {
        Vec::new()
    } else {
        let names_line = read_nonempty_line(reader)?
            .ok_or_else(|| InputError::Parse("missing names line".to_string()))?;
        names_line
            .split_whitespace()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    };
    if names.len() != declared {
        return Err(InputError::NameCount {
            expected: declared,
            found: names.len(),
        });
    }

    let scores = read_scores(reader, declared)?;

    info!("read {} record(s)", declared);
    Ok(pair_records(names, scores)?)
}

fn read_scores(reader: &mut dyn BufRead, expected: usize) -> Result<Vec<i64>, InputError> {
    let mut scores = Vec::with_capacity(expected);
    let mut buf = String::new();
    let mut trailing = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        for token in buf.split_whitespace() {
            if scores.len() == expected {
                trailing += 1;
                continue;
            }
            let score = token
                .parse::<i64>()
                .map_err(|_| InputError::Parse(format!("invalid score: {token}")))?;
            scores.push(score);
        }
    }

    if scores.len() < expected {
        return Err(InputError::ScoreCount {
            expected,
            found: scores.len(),
        });
    }
    if trailing > 0 {
        warn!("ignoring {} trailing token(s) after the last score", trailing);
    }

    Ok(scores)
}

fn read_nonempty_line(reader: &mut dyn BufRead) -> Result<Option<String>, InputError> {
    let mut buf = String::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        let line = buf.trim_end();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

fn parse_count(token: &str) -> Result<usize, InputError> {
    token
        .parse::<usize>()
        .map_err(|_| InputError::Parse(format!("invalid record count: {token}")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
