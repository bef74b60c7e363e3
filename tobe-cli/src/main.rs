use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{BufRead, Write};
use tobe_grammar::{Classification, Classifier, Label};

/// Check English sentences that use the verb "to be"
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sentences to check. Reads one sentence per line from stdin when none are given.
    sentences: Vec<String>,

    /// Print each result as a JSON object
    #[arg(long)]
    json: bool,

    /// Fail unless every sentence is valid with this label (e.g. "past question")
    #[arg(long)]
    expect: Option<Label>,
}

fn report(sentence: &str, classification: &Classification, json: bool) -> Result<String> {
    if json {
        let mut value = serde_json::to_value(classification)?;
        value["sentence"] = sentence.into();
        Ok(value.to_string())
    } else {
        Ok(format!("{sentence}\t{classification}"))
    }
}

fn read_stdin_sentences() -> Result<Vec<String>> {
    let mut sentences = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            sentences.push(line);
        }
    }
    Ok(sentences)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let sentences = if args.sentences.is_empty() {
        read_stdin_sentences()?
    } else {
        args.sentences
    };

    let classifier = Classifier::new();
    let mut stdout = std::io::stdout().lock();
    let mut mismatches = 0;

    for sentence in &sentences {
        let classification = classifier.classify(sentence);
        writeln!(stdout, "{}", report(sentence, &classification, args.json)?)?;

        if let Some(expected) = args.expect {
            if classification.label() != Some(expected) {
                log::warn!("expected {expected}, got {classification:?} for {sentence:?}");
                mismatches += 1;
            }
        }
    }

    if let Some(expected) = args.expect {
        if mismatches > 0 {
            bail!(
                "{mismatches} of {} sentences were not {expected}",
                sentences.len()
            );
        }
    }
    Ok(())
}
