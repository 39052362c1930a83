use crate::dataset::report::{
    CrossValidationReport, KFoldReport, MergeReport, PlacementTally, TrainTestReport,
};
use serde::Serialize;

/// Serialize a report for `--json`
pub fn format_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn format_tally(tally: &PlacementTally) -> String {
    format!(
        "{} files ({} linked, {} copied)",
        tally.total(),
        tally.linked,
        tally.copied
    )
}

pub fn format_merge(report: &MergeReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Merged into: {}\n", report.base_dir.display()));
    for (class, count) in &report.classes {
        output.push_str(&format!("  {}: {}\n", class, count));
    }
    output.push_str(&format_tally(&report.tally));
    output
}

pub fn format_kfold(report: &KFoldReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("K-fold layout: {}\n", report.base_dir.display()));
    for fold in &report.folds {
        output.push_str(&format!("  {}\n", fold.display()));
    }
    for (class, sizes) in &report.fold_sizes {
        output.push_str(&format!("  {}: {:?}\n", class, sizes));
    }
    output.push_str(&format_tally(&report.tally));
    output
}

pub fn format_cross_validation(report: &CrossValidationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Cross-validation layout: {}\n",
        report.base_dir.display()
    ));
    for pair in &report.pairs {
        output.push_str(&format!(
            "  [{}] train: {}  validation: {}\n",
            pair.index,
            pair.train.display(),
            pair.validation.display()
        ));
    }
    for (class, sizes) in &report.fold_sizes {
        output.push_str(&format!("  {}: {:?}\n", class, sizes));
    }
    output.push_str(&format_tally(&report.tally));
    output
}

pub fn format_train_test(report: &TrainTestReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Train: {}\n", report.train_dir.display()));
    output.push_str(&format!("Validation: {}\n", report.validation_dir.display()));
    for (class, counts) in &report.classes {
        output.push_str(&format!(
            "  {}: {} train / {} validation\n",
            class, counts.train, counts.validation
        ));
    }
    output.push_str(&format_tally(&report.tally));
    output
}
