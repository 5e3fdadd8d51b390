use clap::ValueEnum;
use colored::*;
use serde_json::{Value, json};
use tabval_core::{FailureMap, SchemaMismatch, ValidationOutcome, ValidationReport};

/// Report rendering selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Machine-readable JSON
    Json,
}

pub fn print_text_report(report: &ValidationReport) {
    println!("\nValidating {}", report.source);

    for warning in &report.warnings {
        println!("{}", warning.yellow());
    }

    match &report.outcome {
        ValidationOutcome::Passed => println!("{}", "Passed! :)".green()),
        ValidationOutcome::SchemaMismatch(mismatch) => {
            println!("{}", "Missing...".yellow().bold());
            print_mismatch(mismatch);
        }
        ValidationOutcome::Failed(failures) => {
            println!("{}", "Failed :(".red());
            for line in failure_lines(failures, report.stats.rows_validated) {
                println!("{}", line);
            }
        }
    }
}

fn print_mismatch(mismatch: &SchemaMismatch) {
    if !mismatch.missing.is_empty() {
        println!("  Missing validators for:");
        println!("{}", indent(&mismatch.suggestion()));
    }
    if !mismatch.unused.is_empty() {
        println!("  Missing expected fields:");
        println!("{}", indent(&mismatch.unused_listing()));
    }
}

fn indent(listing: &str) -> String {
    listing
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two lines per failing (column, validator): counts, then every distinct
/// rejected value.
pub fn failure_lines(failures: &FailureMap, rows: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(failures.len() * 2);
    for (key, summary) in failures {
        lines.push(format!(
            "  {} failed {} time(s) ({:.1}%) on field: '{}'",
            key.validator,
            summary.count,
            summary.failure_rate(rows) * 100.0,
            key.column
        ));
        let shown: Vec<String> = summary
            .invalid_values
            .iter()
            .map(|value| format!("'{}'", value))
            .collect();
        lines.push(format!("    Invalid fields: [{}]", shown.join(", ")));
    }
    lines
}

/// Prints one JSON array holding every run, reports and errors alike.
pub fn print_json_runs(runs: &[Value]) {
    match serde_json::to_string_pretty(runs) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => print_error(&format!("Failed to render JSON report: {}", e)),
    }
}

/// JSON entry for a data file whose run could not complete.
pub fn json_error(source: &str, error: &anyhow::Error) -> Value {
    json!({
        "source": source,
        "passed": false,
        "outcome": "error",
        "error": format!("{:#}", error),
    })
}

pub fn json_report(report: &ValidationReport) -> Value {
    let timestamp = chrono::Utc::now().timestamp();

    let failures: Vec<Value> = report
        .failures()
        .map(|failures| {
            failures
                .iter()
                .map(|(key, summary)| {
                    json!({
                        "validator": key.validator,
                        "total_failures": summary.count,
                        "field_name": key.column,
                        "timestamp": timestamp,
                        "invalid_fields": summary.invalid_values.iter().collect::<Vec<_>>(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let (missing, unused) = report
        .mismatch()
        .map(|m| (m.missing.clone(), m.unused.clone()))
        .unwrap_or_default();

    let outcome = match report.outcome {
        ValidationOutcome::Passed => "passed",
        ValidationOutcome::SchemaMismatch(_) => "schema_mismatch",
        ValidationOutcome::Failed(_) => "failed",
    };

    json!({
        "source": report.source,
        "passed": report.passed(),
        "outcome": outcome,
        "failures": failures,
        "missing_validators": missing,
        "missing_fields": unused,
        "warnings": report.warnings,
        "stats": {
            "rows_validated": report.stats.rows_validated,
            "fields_checked": report.stats.fields_checked,
            "validations_run": report.stats.validations_run,
            "duration_ms": report.stats.duration_ms,
        }
    })
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabval_core::{FailureKey, FailureSummary, ValidationStats};

    fn failed_report() -> ValidationReport {
        let mut failures = FailureMap::new();
        let mut summary = FailureSummary::default();
        summary.record("Maybe A Vampire");
        failures.insert(FailureKey::new("Column B", "SetValidator"), summary);

        ValidationReport {
            source: "vampires.csv".to_string(),
            outcome: ValidationOutcome::Failed(failures),
            warnings: vec![],
            stats: ValidationStats {
                rows_validated: 4,
                ..ValidationStats::default()
            },
        }
    }

    #[test]
    fn test_failure_lines() {
        let report = failed_report();
        let lines = failure_lines(report.failures().unwrap(), 4);

        assert_eq!(
            lines,
            vec![
                "  SetValidator failed 1 time(s) (25.0%) on field: 'Column B'".to_string(),
                "    Invalid fields: ['Maybe A Vampire']".to_string(),
            ]
        );
    }

    #[test]
    fn test_failure_lines_list_every_distinct_value() {
        let mut summary = FailureSummary::default();
        for i in 0..150 {
            summary.record(&format!("v{}", i));
        }
        let mut failures = FailureMap::new();
        failures.insert(FailureKey::new("code", "IntValidator"), summary);

        let lines = failure_lines(&failures, 150);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "  IntValidator failed 150 time(s) (100.0%) on field: 'code'"
        );
        for i in 0..150 {
            assert!(lines[1].contains(&format!("'v{}'", i)));
        }
        assert!(lines[1].ends_with("'v148', 'v149']"));
        assert!(lines.iter().all(|line| !line.contains("suppressed")));
    }

    #[test]
    fn test_json_error_entry() {
        let error = anyhow::anyhow!("No such file").context("Failed to validate a.csv");
        let value = json_error("a.csv", &error);

        assert_eq!(value["source"], json!("a.csv"));
        assert_eq!(value["passed"], json!(false));
        assert_eq!(value["outcome"], json!("error"));
        assert_eq!(value["error"], json!("Failed to validate a.csv: No such file"));
    }

    #[test]
    fn test_json_report_fields() {
        let value = json_report(&failed_report());

        assert_eq!(value["passed"], json!(false));
        assert_eq!(value["outcome"], json!("failed"));
        assert_eq!(value["failures"][0]["validator"], json!("SetValidator"));
        assert_eq!(value["failures"][0]["total_failures"], json!(1));
        assert_eq!(value["failures"][0]["field_name"], json!("Column B"));
        assert_eq!(
            value["failures"][0]["invalid_fields"],
            json!(["Maybe A Vampire"])
        );
        assert!(value["failures"][0]["timestamp"].is_i64());
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("'a': [],\n'b': [],"), "    'a': [],\n    'b': [],");
    }
}
