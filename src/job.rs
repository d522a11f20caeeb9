use std::time::Instant;

use anyhow::Result;
use tracing::{info, instrument};

use crate::aggregate::{expand_case_group, round1};
use crate::config::JobConfig;
use crate::dataflow::Pipeline;
use crate::output::{format_line, write_output};
use crate::parse::{parse_case_record, parse_rain_record};
use crate::transform::{derive_month, rain_key_value, state_key};
use crate::{join, source};

/// Row counts for the final summary log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    pub case_lines: u64,
    pub rain_lines: u64,
    pub joined_rows: u64,
}

/// Summed dengue cases per `"UF-YYYY-MM"` key: parse, derive the month
/// field, group by state, fan each state's records out to keyed case
/// counts, then sum per key.
pub fn dengue_pipeline(lines: Vec<String>) -> Pipeline<(String, f64)> {
    Pipeline::from_vec(lines)
        .try_map(|line| Ok(parse_case_record(&line)?))
        .map(derive_month)
        .map(state_key)
        .group_by_key()
        .try_flat_map(|(uf, records)| Ok(expand_case_group(&uf, &records)?))
        .combine_per_key(|a, b| a + b)
}

/// Summed rainfall per `"UF-YYYY-MM"` key, rounded to 1 decimal place.
/// Rounding is a separate stage after the full sum so partial sums never
/// compound rounding error.
pub fn rain_pipeline(lines: Vec<String>) -> Pipeline<(String, f64)> {
    Pipeline::from_vec(lines)
        .try_map(|line| Ok(parse_rain_record(&line)?))
        .try_map(|record| Ok(rain_key_value(&record)?))
        .combine_per_key(|a, b| a + b)
        .map(|(key, total)| (key, round1(total)))
}

/// Converge the two aggregated streams: co-group by key, keep keys present
/// on both sides, unpack into output rows.
pub fn joined_lines(
    rain: Pipeline<(String, f64)>,
    dengue: Pipeline<(String, f64)>,
) -> Pipeline<String> {
    rain.co_group(dengue)
        .filter(|(_, (rainfall, cases))| join::both_present(rainfall, cases))
        .try_map(|(key, (rainfall, cases))| {
            // sides are singletons post-aggregation and non-empty post-filter
            let rainfall = *rainfall.first().expect("filtered to keys present in both");
            let cases = *cases.first().expect("filtered to keys present in both");
            Ok(join::unpack(&key, rainfall, cases)?)
        })
        .map(|record| format_line(&record))
}

/// Run the whole batch: read both datasets, execute the two aggregation
/// pipelines and the join, write the reconciled file.
#[instrument(level = "info", skip(config), fields(output = %config.output_path.display()))]
pub fn run_job(config: &JobConfig) -> Result<JobSummary> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .build_global()
        .ok();

    let start = Instant::now();

    let case_lines = source::read_lines(&config.dengue_path, true)?;
    let rain_lines = source::read_lines(&config.rain_path, true)?;
    let summary_inputs = (case_lines.len() as u64, rain_lines.len() as u64);

    let dengue = dengue_pipeline(case_lines);
    let rain = rain_pipeline(rain_lines);

    let mut lines = joined_lines(rain, dengue).run()?;
    // deterministic file order; the shuffle gives none
    lines.sort_unstable();

    write_output(&config.output_path, &lines)?;

    let summary = JobSummary {
        case_lines: summary_inputs.0,
        rain_lines: summary_inputs.1,
        joined_rows: lines.len() as u64,
    };
    info!(
        case_lines = summary.case_lines,
        rain_lines = summary.rain_lines,
        joined_rows = summary.joined_rows,
        elapsed = ?start.elapsed(),
        "job complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_line(date: &str, casos: &str, uf: &str) -> String {
        format!("1|{date}|{casos}|3550308|Cidade|{uf}|01000|-23.5|-46.6")
    }

    #[test]
    fn dengue_pipeline_sums_per_state_month() -> Result<()> {
        let lines = vec![
            case_line("2020-01-01", "5", "SP"),
            case_line("2020-01-15", "3", "SP"),
            case_line("2020-02-01", "abc", "SP"),
            case_line("2020-01-20", "7", "RJ"),
        ];
        let mut sums = dengue_pipeline(lines).run()?;
        sums.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            sums,
            vec![
                ("RJ-2020-01".to_string(), 7.0),
                ("SP-2020-01".to_string(), 8.0),
                ("SP-2020-02".to_string(), 0.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn rain_pipeline_sums_then_rounds_once() -> Result<()> {
        let lines = vec![
            "2020-01-01,1.11,SP".to_string(),
            "2020-01-02,2.22,SP".to_string(),
            "2020-01-03,-4.0,SP".to_string(),
        ];
        let sums = rain_pipeline(lines).run()?;
        assert_eq!(sums, vec![("SP-2020-01".to_string(), 3.3)]);
        Ok(())
    }

    #[test]
    fn join_keeps_only_keys_on_both_sides() -> Result<()> {
        let rain = Pipeline::from_vec(vec![
            ("SP-2020-01".to_string(), 12.3),
            ("RJ-2020-01".to_string(), 4.0),
        ]);
        let dengue = Pipeline::from_vec(vec![
            ("SP-2020-01".to_string(), 5.0),
            ("MG-2020-01".to_string(), 2.0),
        ]);
        let lines = joined_lines(rain, dengue).run()?;
        assert_eq!(lines, vec!["SP;2020;01;12.3;5.0".to_string()]);
        Ok(())
    }

    #[test]
    fn bad_case_value_fails_the_job() {
        let lines = vec![case_line("2020-01-01", "12a", "SP")];
        assert!(dengue_pipeline(lines).run().is_err());
    }
}
