use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;
use std::io::Read;

use devtoolkit_core::text::{
    analyze_text, detect_case, word_frequency, FrequencyOptions, FrequencyReport, StopwordMode,
    TextAnalysis, TextCase, DEFAULT_TOP_N,
};

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Text statistics")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Count characters, words, sentences and paragraphs, with reading times
    #[clap(name = "stats")]
    Stats(InputOptions),

    /// Detect whether the text is UPPERCASE, lowercase or mixed
    #[clap(name = "case")]
    Case(InputOptions),

    /// Rank the most frequent words
    #[clap(name = "freq")]
    Freq(FreqOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct InputOptions {
    /// Text to analyze; read from stdin when omitted
    text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Stopwords {
    None,
    Basic,
}

impl From<Stopwords> for StopwordMode {
    fn from(value: Stopwords) -> Self {
        match value {
            Stopwords::None => StopwordMode::None,
            Stopwords::Basic => StopwordMode::Basic,
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct FreqOptions {
    #[clap(flatten)]
    input: InputOptions,

    /// Ignore words shorter than this many characters
    #[arg(long, default_value = "1")]
    min_length: usize,

    /// Number of words to show
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Stopword list to exclude from the ranking
    #[arg(long, value_enum, default_value = "none")]
    stopwords: Stopwords,

    /// Print every counted word as `word,count` CSV
    #[arg(long, conflicts_with = "json")]
    csv: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsOutput {
    #[serde(flatten)]
    pub analysis: TextAnalysis,
    pub case: Option<TextCase>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Stats(options) => {
            let text = read_input(options.text)?;
            let output = stats_data(&text);
            if options.json {
                println!("{}", to_json(&output)?);
            } else {
                print!("{}", format_stats_text(&output));
            }
        }
        Commands::Case(options) => {
            let text = read_input(options.text)?;
            let case = detect_case(&text);
            if options.json {
                println!("{}", to_json(&serde_json::json!({ "case": case }))?);
            } else {
                println!("{}", case.map(TextCase::label).unwrap_or("No text"));
            }
        }
        Commands::Freq(options) => {
            let text = read_input(options.input.text)?;
            let report = frequency_data(
                &text,
                FrequencyOptions {
                    min_length: options.min_length,
                    top_n: options.top,
                    stopwords: options.stopwords.into(),
                },
            );

            if global.verbose {
                eprintln!(
                    "{} words, {} unique",
                    report.total_words, report.unique_words
                );
            }

            if options.input.json {
                println!("{}", to_json(&report)?);
            } else if options.csv {
                println!("{}", report.to_csv());
            } else {
                print!("{}", format_frequency_text(&report));
            }
        }
    }

    Ok(())
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

pub fn stats_data(text: &str) -> StatsOutput {
    StatsOutput {
        analysis: analyze_text(text),
        case: detect_case(text),
    }
}

pub fn frequency_data(text: &str, options: FrequencyOptions) -> FrequencyReport {
    word_frequency(text, &options)
}

fn format_stats_text(output: &StatsOutput) -> String {
    let analysis = &output.analysis;
    let dash_if_empty = |word: &str| if word.is_empty() { "-".to_string() } else { word.to_string() };

    let mut table = new_table();
    table.add_row(prettytable::row!["Characters", analysis.counts.characters]);
    table.add_row(prettytable::row![
        "Characters (no spaces)",
        analysis.counts.characters_no_spaces
    ]);
    table.add_row(prettytable::row![
        "Words",
        format!(
            "{} (avg {:.2} chars)",
            analysis.counts.words, analysis.avg_word_length
        )
    ]);
    table.add_row(prettytable::row![
        "Sentences",
        format!(
            "{} (avg {:.2} words)",
            analysis.sentences, analysis.avg_sentence_length
        )
    ]);
    table.add_row(prettytable::row![
        "Paragraphs",
        format!(
            "{} (avg {:.2} words)",
            analysis.paragraphs, analysis.avg_paragraph_length
        )
    ]);
    table.add_row(prettytable::row![
        "Reading time",
        format!("{:.1} min", analysis.reading_minutes)
    ]);
    table.add_row(prettytable::row![
        "Speaking time",
        format!("{:.1} min", analysis.speaking_minutes)
    ]);
    table.add_row(prettytable::row![
        "Longest word",
        dash_if_empty(&analysis.longest_word)
    ]);
    table.add_row(prettytable::row![
        "Shortest word",
        dash_if_empty(&analysis.shortest_word)
    ]);
    table.add_row(prettytable::row![
        "Case",
        output.case.map(TextCase::label).unwrap_or("-")
    ]);
    table.to_string()
}

fn format_frequency_text(report: &FrequencyReport) -> String {
    if report.top.is_empty() {
        return format!("{}\n", "No words found.".yellow());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "Word", "Count"]);
    for (index, entry) in report.top.iter().enumerate() {
        table.add_row(prettytable::row![index + 1, entry.word, entry.count]);
    }

    format!(
        "{} total, {} unique\n\n{}",
        report.total_words, report.unique_words, table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_data() {
        let output = stats_data("Hello World");
        assert_eq!(output.analysis.counts.characters, 11);
        assert_eq!(output.analysis.counts.characters_no_spaces, 10);
        assert_eq!(output.analysis.counts.words, 2);
        assert_eq!(output.analysis.sentences, 1);
        assert_eq!(output.case, Some(TextCase::Mixed));
    }

    #[test]
    fn test_format_stats_text() {
        let text = format_stats_text(&stats_data("One two. Three!\n\nFour"));
        assert!(text.contains("4 (avg 3.75 chars)"));
        assert!(text.contains("2 (avg 2.00 words)"));
        assert!(text.contains("0.0 min"));
        assert!(text.contains("Three"));
    }

    #[test]
    fn test_stats_json_is_flat() {
        let json = to_json(&stats_data("abc")).unwrap();
        assert!(json.contains("\"words\": 1"));
        assert!(json.contains("\"sentences\": 1"));
        assert!(json.contains("\"reading_minutes\": 0.0"));
        assert!(json.contains("\"case\": \"lowercase\""));
    }

    #[test]
    fn test_frequency_data_with_stopwords() {
        let report = frequency_data(
            "the cat and the hat and the cat",
            FrequencyOptions {
                min_length: 1,
                top_n: 5,
                stopwords: Stopwords::Basic.into(),
            },
        );
        assert_eq!(report.top[0].word, "cat");
        assert_eq!(report.top[0].count, 2);
        assert_eq!(report.unique_words, 2);
    }

    #[test]
    fn test_format_frequency_text_empty() {
        let report = frequency_data("", FrequencyOptions::default());
        assert!(format_frequency_text(&report).contains("No words found."));
    }
}
