use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use rapid_sentrank::{
    compare, AssemblyOrder, RougeScores, SummarizerConfig, Summary, TfIdfSummarizer,
};
use tracing_subscriber::EnvFilter;

/// Summarize a document by TF-IDF sentence centrality
#[derive(Debug, Parser)]
#[command(name = "rapid-sentrank", version)]
struct Args {
    /// Document to summarize (stdin when omitted)
    input: Option<PathBuf>,

    /// JSON configuration file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sentences in the summary
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    #[arg(long)]
    damping: Option<f64>,

    /// Convergence threshold on the L1 score delta
    #[arg(long)]
    tolerance: Option<f64>,

    #[arg(long)]
    max_iterations: Option<usize>,

    /// Stopword language tag (en, de, fr, ...)
    #[arg(long)]
    language: Option<String>,

    /// Extra stopword; may be repeated
    #[arg(long = "stopword")]
    stopwords: Vec<String>,

    /// Output order: "document" or "score"
    #[arg(long)]
    order: Option<AssemblyOrder>,

    /// Joiner placed between selected sentences
    #[arg(long)]
    separator: Option<String>,

    /// Reference summary to score the output against (ROUGE)
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn summarizer_config(&self) -> Result<SummarizerConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => SummarizerConfig::default(),
        };
        if let Some(n) = self.sentences {
            cfg.num_sentences = n;
        }
        if let Some(d) = self.damping {
            cfg.damping = d;
        }
        if let Some(t) = self.tolerance {
            cfg.convergence_threshold = t;
        }
        if let Some(m) = self.max_iterations {
            cfg.max_iterations = m;
        }
        if let Some(lang) = &self.language {
            cfg.language = lang.clone();
        }
        if let Some(order) = self.order {
            cfg.assembly_order = order;
        }
        if let Some(sep) = &self.separator {
            cfg.separator = sep.clone();
        }
        cfg.stopwords.extend(self.stopwords.iter().cloned());
        Ok(cfg)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SENTRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_scores(scores: &RougeScores) {
    for (name, s) in [
        ("ROUGE-1", scores.rouge1),
        ("ROUGE-2", scores.rouge2),
        ("ROUGE-L", scores.rouge_l),
    ] {
        println!(
            "{name}: precision={:.4} recall={:.4} f1={:.4}",
            s.precision, s.recall, s.f1
        );
    }
}

fn print_summary(summary: &Summary) {
    println!("{}", summary.text);
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    let cfg = args.summarizer_config()?;
    let n = cfg.num_sentences;
    let summarizer = TfIdfSummarizer::new(cfg)?;
    let text = read_input(args.input.as_ref())?;

    match &args.reference {
        Some(path) => {
            let reference = std::fs::read_to_string(path)?;
            let reports = compare(&[&summarizer], &text, &reference, n)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{} summary:", report.algorithm);
                    print_summary(&report.summary);
                    println!();
                    print_scores(&report.scores);
                }
            }
        }
        None => {
            let summary = summarizer.summarize(&text)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_fields() {
        let args = Args::parse_from([
            "rapid-sentrank",
            "-n",
            "2",
            "--order",
            "score",
            "--separator",
            " | ",
            "--stopword",
            "whiskers",
        ]);
        let cfg = args.summarizer_config().unwrap();

        assert_eq!(cfg.num_sentences, 2);
        assert_eq!(cfg.assembly_order, AssemblyOrder::ScoreOrder);
        assert_eq!(cfg.separator, " | ");
        assert_eq!(cfg.stopwords, vec!["whiskers".to_string()]);
    }

    #[test]
    fn test_separator_defaults_to_space() {
        let cfg = Args::parse_from(["rapid-sentrank"]).summarizer_config().unwrap();
        assert_eq!(cfg.separator, " ");
    }
}
