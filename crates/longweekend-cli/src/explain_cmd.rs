use std::process::ExitCode;

use longweekend_core::{FollowingDayReport, HolidayAnalysis, LongWeekendCalculator, WindowDecision};
use serde::Serialize;

use crate::cli::CalculateArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::Settings;

pub fn run_explain(args: CalculateArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let settings = Settings::from_args(&args)?;

    let calculator = LongWeekendCalculator::new(&settings.holidays, &settings.weekend);
    let entries: Vec<ExplainEntry> = calculator
        .explain(settings.bridge_days)
        .iter()
        .map(ExplainEntry::from)
        .collect();

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &entries {
                println!("{} {}", entry.date, entry.name);
                println!("  backward: {}", entry.backward.describe());
                println!("  forward: {}", entry.forward.describe());
                match &entry.reason {
                    Some(reason) => println!("  decision: {} ({})", entry.decision, reason),
                    None => println!("  decision: {}", entry.decision),
                }
                for window in &entry.windows {
                    println!("  window: {}", window);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct ExplainEntry {
    date: String,
    name: String,
    backward: ScanSummary,
    forward: ScanSummary,
    decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    windows: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ScanSummary {
    days: u32,
    bridge_days: Vec<String>,
    reach: String,
}

impl ScanSummary {
    fn describe(&self) -> String {
        if self.bridge_days.is_empty() {
            format!("{} day(s) to {}", self.days, self.reach)
        } else {
            format!(
                "{} day(s) to {}, bridge: {}",
                self.days,
                self.reach,
                self.bridge_days.join(", ")
            )
        }
    }
}

impl From<&FollowingDayReport> for ScanSummary {
    fn from(report: &FollowingDayReport) -> Self {
        Self {
            days: report.day_count,
            bridge_days: report
                .bridge_days
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect(),
            reach: report.reach.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&HolidayAnalysis> for ExplainEntry {
    fn from(analysis: &HolidayAnalysis) -> Self {
        let (decision, reason) = match &analysis.decision {
            WindowDecision::Skipped { reason } => ("skipped", Some(reason.to_string())),
            WindowDecision::Split { .. } => ("split", None),
            WindowDecision::Merged { .. } => ("merged", None),
        };

        Self {
            date: analysis.holiday.date.format("%Y-%m-%d").to_string(),
            name: analysis.holiday.name.clone(),
            backward: ScanSummary::from(&analysis.backward),
            forward: ScanSummary::from(&analysis.forward),
            decision: decision.to_string(),
            reason,
            windows: analysis
                .decision
                .candidates()
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}
