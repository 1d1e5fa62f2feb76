use std::process::ExitCode;

use longweekend_core::{CalculateLongWeekends, LongWeekendCalculator, LongWeekendReport};

use crate::cli::CalculateArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::Settings;

pub fn run_calculate(args: CalculateArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let settings = Settings::from_args(&args)?;

    let calculator = LongWeekendCalculator::new(&settings.holidays, &settings.weekend);
    let long_weekends = calculator.calculate(settings.bridge_days);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&long_weekends)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if long_weekends.is_empty() {
                println!("No long weekends found");
            }
            for long_weekend in &long_weekends {
                println!("{}", format_text_line(long_weekend));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn format_text_line(report: &LongWeekendReport) -> String {
    if !report.need_bridge_day() {
        return report.to_string();
    }

    let bridge_days: Vec<String> = report
        .bridge_days()
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    format!("{} bridge: {}", report, bridge_days.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_line_without_bridge_days() {
        let report = LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 13), vec![]).unwrap();
        assert_eq!(format_text_line(&report), "2020-01-10 - 2020-01-13 (4)");
    }

    #[test]
    fn text_line_with_bridge_days() {
        let report = LongWeekendReport::new(
            date(2020, 1, 9),
            date(2020, 1, 14),
            vec![date(2020, 1, 10), date(2020, 1, 13)],
        )
        .unwrap();
        assert_eq!(
            format_text_line(&report),
            "2020-01-09 - 2020-01-14 (6) bridge: 2020-01-10, 2020-01-13"
        );
    }
}
