//! Text statistics: length counters, readability metrics, case detection and
//! word frequency.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub const DEFAULT_TOP_N: usize = 20;
pub const READING_WORDS_PER_MINUTE: f64 = 200.0;
pub const SPEAKING_WORDS_PER_MINUTE: f64 = 150.0;

const BASIC_STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "a", "of", "that", "it", "for", "on", "with", "as", "this",
    "by", "an", "be", "are", "or", "from", "at", "which", "was", "but", "have", "has",
];

static CURLY_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{2018}\u{2019}\u{201c}\u{201d}]").expect("quote regex"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s'-]").expect("non-word regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("sentence regex"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph regex"));

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASIC_STOPWORDS.iter().copied().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextCounts {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
}

/// Counters plus the sentence, paragraph and timing metrics of a text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    #[serde(flatten)]
    pub counts: TextCounts,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Alphanumeric characters per word, rounded to 2 decimals
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub avg_paragraph_length: f64,
    /// Minutes at 200 wpm, rounded to 1 decimal
    pub reading_minutes: f64,
    /// Minutes at 150 wpm, rounded to 1 decimal
    pub speaking_minutes: f64,
    pub longest_word: String,
    pub shortest_word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextCase {
    #[serde(rename = "UPPERCASE")]
    Upper,
    #[serde(rename = "lowercase")]
    Lower,
    #[serde(rename = "Mixed Case")]
    Mixed,
}

impl TextCase {
    pub fn label(self) -> &'static str {
        match self {
            TextCase::Upper => "UPPERCASE",
            TextCase::Lower => "lowercase",
            TextCase::Mixed => "Mixed Case",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordMode {
    #[default]
    None,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOptions {
    pub min_length: usize,
    pub top_n: usize,
    pub stopwords: StopwordMode,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            top_n: DEFAULT_TOP_N,
            stopwords: StopwordMode::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    /// Tokens that passed the length filter, stopwords included
    pub total_words: usize,
    pub unique_words: usize,
    pub top: Vec<WordCount>,
    #[serde(skip)]
    pub all: Vec<WordCount>,
}

impl FrequencyReport {
    /// `word,count` CSV of every counted word
    pub fn to_csv(&self) -> String {
        std::iter::once("word,count".to_string())
            .chain(
                self.all
                    .iter()
                    .map(|entry| format!("{},{}", entry.word, entry.count)),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn count_text(text: &str) -> TextCounts {
    TextCounts {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round_to(total as f64 / count as f64, 2)
    }
}

/// Full readability report.
///
/// Text without a sentence terminator still counts as one sentence. Word
/// lengths only count ASCII letters and digits; the longest and shortest
/// words are the first ones reaching the extreme length, and words with no
/// alphanumerics are never the shortest.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let trimmed = text.trim();
    let counts = count_text(text);

    let sentences = match SENTENCE_END.find_iter(trimmed).count() {
        0 if !trimmed.is_empty() => 1,
        n => n,
    };
    let paragraphs = PARAGRAPH_BREAK
        .split(trimmed)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .count();

    let cleaned: Vec<String> = trimmed
        .split_whitespace()
        .map(|word| word.chars().filter(char::is_ascii_alphanumeric).collect())
        .collect();
    let total_length: usize = cleaned.iter().map(String::len).sum();

    let mut longest_word = "";
    let mut shortest_word = "";
    for word in &cleaned {
        if word.len() > longest_word.len() {
            longest_word = word.as_str();
        }
        if !word.is_empty() && (shortest_word.is_empty() || word.len() < shortest_word.len()) {
            shortest_word = word.as_str();
        }
    }

    let words = counts.words as f64;

    TextAnalysis {
        sentences,
        paragraphs,
        avg_word_length: average(total_length, counts.words),
        avg_sentence_length: average(counts.words, sentences),
        avg_paragraph_length: average(counts.words, paragraphs),
        reading_minutes: round_to(words / READING_WORDS_PER_MINUTE, 1),
        speaking_minutes: round_to(words / SPEAKING_WORDS_PER_MINUTE, 1),
        longest_word: longest_word.to_string(),
        shortest_word: shortest_word.to_string(),
        counts,
    }
}

/// Classify the letter case of `text`; `None` for blank input.
///
/// Text without ASCII letters counts as mixed.
pub fn detect_case(text: &str) -> Option<TextCase> {
    if text.trim().is_empty() {
        return None;
    }

    let has_letters = text.chars().any(|c| c.is_ascii_alphabetic());
    let is_upper = text == text.to_uppercase();
    let is_lower = text == text.to_lowercase();

    Some(match (has_letters, is_upper, is_lower) {
        (true, true, false) => TextCase::Upper,
        (true, false, true) => TextCase::Lower,
        _ => TextCase::Mixed,
    })
}

/// Lowercased word tokens, with punctuation other than `'` and `-` removed
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let unquoted = CURLY_QUOTES.replace_all(&lowered, "");
    let cleaned = NON_WORD.replace_all(&unquoted, " ");

    cleaned
        .split_whitespace()
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn word_frequency(text: &str, options: &FrequencyOptions) -> FrequencyReport {
    let min_length = options.min_length.max(1);
    let top_n = options.top_n.max(1);

    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|token| token.chars().count() >= min_length)
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        if options.stopwords == StopwordMode::Basic && STOPWORDS.contains(token.as_str()) {
            continue;
        }
        *counts.entry(token.as_str()).or_default() += 1;
    }

    let mut all: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    FrequencyReport {
        total_words: tokens.len(),
        unique_words: all.len(),
        top: all.iter().take(top_n).cloned().collect(),
        all,
    }
}
