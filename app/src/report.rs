//! Plain-text summary of a hold-out run.

use std::io::{self, Write};
use std::path::Path;

use holdout::{ConfusionMatrix, HoldoutConfig, HoldoutReport};

/// Prints the run parameters.
pub fn write_header<W: Write>(out: &mut W, input: &Path, config: &HoldoutConfig) -> io::Result<()> {
    writeln!(
        out,
        "Input file: {}, train/test ratio: {}, k={}",
        input.display(),
        config.ratio(),
        config.k()
    )
}

/// Prints split sizes, accuracy, misclassified records and per-class scores.
pub fn write_report<W: Write>(out: &mut W, report: &HoldoutReport<i64, f64>) -> io::Result<()> {
    writeln!(out, "Size of data:")?;
    writeln!(out, "\t- train: {}", report.train.len())?;
    writeln!(out, "\t- test: {}", report.test.len())?;
    writeln!(out, "Classification accuracy: {:.4}", report.accuracy())?;

    let misclassified = report.misclassified();
    writeln!(out, "Misclassified records: {}", misclassified.len())?;
    for record in misclassified {
        writeln!(out, "\t{record}")?;
    }

    write_confusion(out, &report.evaluation.confusion)
}

fn write_confusion<W: Write>(out: &mut W, confusion: &ConfusionMatrix<i64>) -> io::Result<()> {
    writeln!(out, "Per class:")?;
    for label in confusion.labels() {
        writeln!(
            out,
            "\t{label}: recall {}, precision {}",
            percent(confusion.recall(label)),
            percent(confusion.precision(label))
        )?;
    }
    Ok(())
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "n/a".to_string(),
    }
}
