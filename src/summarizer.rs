//! The summarization capability sections delegate to.
//!
//! The pipeline only needs `text + ratio -> shorter text`, expressed by the [`Summarize`] trait.
//! [`FrequencySummarizer`] is the extractive implementation the binary ships with: it scores
//! sentences by how many frequent content words they carry and keeps the best ones in document
//! order.

use std::collections::{HashMap, HashSet};
use stop_words::{get, LANGUAGE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// Failures raised by a summarizer.
pub enum SummaryError {
    /// There was nothing to summarize.
    #[error("cannot summarize empty text")]
    EmptyInput,
    /// The ratio lies outside (0, 1].
    #[error("summary ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),
}

/// Produces a shorter version of `text` keeping roughly `ratio` of it.
pub trait Summarize {
    /// Summarize `text`, with `ratio` in (0, 1].
    ///
    /// # Errors
    ///
    /// Implementations decide what they reject; the pipeline passes errors through untouched.
    fn summarize(&self, text: &str, ratio: f64) -> Result<String, SummaryError>;
}

impl<F> Summarize for F
where
    F: Fn(&str, f64) -> Result<String, SummaryError>,
{
    fn summarize(&self, text: &str, ratio: f64) -> Result<String, SummaryError> {
        self(text, ratio)
    }
}

#[must_use]
/// Whether `ratio` is usable as a summary ratio.
pub fn valid_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio <= 1.0
}

/// Extractive summarizer ranking sentences by normalized content-word frequency.
pub struct FrequencySummarizer {
    stopwords: HashSet<String>,
}

impl Default for FrequencySummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencySummarizer {
    #[must_use]
    /// Summarizer filtering English stop words.
    pub fn new() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { stopwords }
    }

    fn content_words<'a>(&'a self, sentence: &'a str) -> impl Iterator<Item = String> + 'a {
        sentence
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .filter(|word| !self.stopwords.contains(word))
    }
}

impl Summarize for FrequencySummarizer {
    fn summarize(&self, text: &str, ratio: f64) -> Result<String, SummaryError> {
        if !valid_ratio(ratio) {
            return Err(SummaryError::InvalidRatio(ratio));
        }
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for sentence in &sentences {
            for word in self.content_words(sentence) {
                *frequencies.entry(word).or_default() += 1;
            }
        }
        let peak = frequencies.values().copied().max().unwrap_or(1);

        #[allow(clippy::cast_precision_loss)]
        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let (total, count) = self
                    .content_words(sentence)
                    .fold((0.0, 0usize), |(total, count), word| {
                        (total + frequencies[&word] as f64 / peak as f64, count + 1)
                    });
                let score = if count == 0 { 0.0 } else { total / count as f64 };
                (index, score)
            })
            .collect();

        let keep = sentences_to_keep(sentences.len(), ratio);
        // Stable sort: ties go to the earlier sentence.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        let mut kept: Vec<usize> = scored.into_iter().take(keep).map(|(i, _)| i).collect();
        kept.sort_unstable();

        log::debug!("kept {keep} of {} sentences", sentences.len());
        Ok(kept
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn sentences_to_keep(total: usize, ratio: f64) -> usize {
    ((total as f64 * ratio).ceil() as usize).clamp(1, total)
}

/// Split text into trimmed sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` followed by whitespace, the end of the text, or an
/// upper-case letter (`end.Next`).
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?') {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let boundary = chars
            .peek()
            .is_none_or(|&(_, next)| next.is_whitespace() || next.is_uppercase());
        if boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

#[cfg(test)]
#[path = "tests/summarizer.rs"]
mod tests;
