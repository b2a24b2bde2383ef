//! Subcommand implementations
//!
//! Each command writes its result to the given writer so it can be
//! exercised without a terminal.

use anyhow::{bail, Context, Result};
use phiguard_classifiers::{AnalysisPrompt, Screener};
use phiguard_core::{ClassificationVerdict, ContentSample};
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::{InputArgs, OutputFormat};

/// Read the document text and resolve its filename
pub fn read_sample(input: &InputArgs) -> Result<ContentSample> {
    let text = if input.path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&input.path)
            .with_context(|| format!("Failed to read document {}", input.path))?
    };

    let filename = input.filename.clone().or_else(|| {
        (input.path != "-")
            .then(|| Path::new(&input.path).file_name())
            .flatten()
            .map(|name| name.to_string_lossy().into_owned())
    });

    Ok(ContentSample { text, filename })
}

/// Print the verdict; returns whether the document was accepted
pub fn classify(
    screener: &Screener,
    sample: &ContentSample,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let screening = screener.screen(sample);
    let verdict = &screening.verdict;

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, verdict)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(verdict, out)?,
    }

    Ok(verdict.is_acceptable)
}

/// Print the sanitized text, or fail with the rejection issues
pub fn redact(screener: &Screener, sample: &ContentSample, out: &mut impl Write) -> Result<()> {
    let screening = screener.screen(sample);
    if screening.document.is_none() {
        bail!(rejection_message(&screening.verdict));
    }

    let document = screening.into_document()?;
    out.write_all(document.as_str().as_bytes())?;
    Ok(())
}

/// Print the analysis messages as JSON, or fail with the rejection issues
pub fn prompt(
    screener: &Screener,
    prompt: &AnalysisPrompt,
    sample: &ContentSample,
    out: &mut impl Write,
) -> Result<()> {
    let screening = screener.screen(sample);
    if screening.document.is_none() {
        bail!(rejection_message(&screening.verdict));
    }

    let document = screening.into_document()?;
    serde_json::to_writer_pretty(&mut *out, &prompt.build(&document))?;
    writeln!(out)?;
    Ok(())
}

fn rejection_message(verdict: &ClassificationVerdict) -> String {
    let mut msg = format!("document rejected ({} risk)", verdict.risk_level);
    for issue in &verdict.issues {
        msg.push_str("\n  - ");
        msg.push_str(issue);
    }
    msg
}

fn write_text(verdict: &ClassificationVerdict, out: &mut impl Write) -> Result<()> {
    let status = if verdict.is_acceptable { "ACCEPTED" } else { "REJECTED" };
    writeln!(out, "{} (risk: {})", status, verdict.risk_level)?;

    if !verdict.issues.is_empty() {
        writeln!(out, "\nIssues:")?;
        for issue in &verdict.issues {
            writeln!(out, "  - {}", issue)?;
        }
    }

    if !verdict.suggestions.is_empty() {
        writeln!(out, "\nSuggestions:")?;
        for suggestion in &verdict.suggestions {
            writeln!(out, "  - {}", suggestion)?;
        }
    }

    let signals = &verdict.signals;
    writeln!(
        out,
        "\nSignals: {} sensitive keyword(s), {} safe keyword(s), {} identifier match(es)",
        signals.sensitive_keywords.len(),
        signals.safe_keywords.len(),
        signals.identifier_count
    )?;
    Ok(())
}
