use crate::error::PipelineError;
use crate::model::{CaseRecord, RainRecord, CASE_COLUMNS, CASE_SEPARATOR, RAIN_SEPARATOR};

/// Bind a `|`-delimited line to the fixed 9-column case schema.
/// Short lines are rejected outright rather than truncated; extra trailing
/// fields are ignored.
pub fn parse_case_record(line: &str) -> Result<CaseRecord, PipelineError> {
    let fields: Vec<&str> = line.split(CASE_SEPARATOR).collect();
    if fields.len() < CASE_COLUMNS.len() {
        return Err(PipelineError::MalformedInputLine {
            expected: CASE_COLUMNS.len(),
            actual: fields.len(),
            line: line.to_string(),
        });
    }

    Ok(CaseRecord {
        id: fields[0].to_string(),
        data_ini_se: fields[1].to_string(),
        casos: fields[2].to_string(),
        ibge_code: fields[3].to_string(),
        cidade: fields[4].to_string(),
        uf: fields[5].to_string(),
        cep: fields[6].to_string(),
        latitude: fields[7].to_string(),
        longitude: fields[8].to_string(),
        yy_mm: String::new(),
    })
}

/// Bind a `,`-delimited line to `(date, rain_mm, uf)`. Extra fields ignored.
pub fn parse_rain_record(line: &str) -> Result<RainRecord, PipelineError> {
    let mut fields = line.split(RAIN_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(date), Some(rain_mm), Some(uf)) => Ok(RainRecord {
            date: date.to_string(),
            rain_mm: rain_mm.to_string(),
            uf: uf.to_string(),
        }),
        _ => Err(PipelineError::MalformedInputLine {
            expected: 3,
            actual: line.split(RAIN_SEPARATOR).count(),
            line: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE_LINE: &str = "1|2020-01-01|5|3550308|São Paulo|SP|01000-000|-23.55|-46.63";

    #[test]
    fn case_record_round_trips() -> anyhow::Result<()> {
        let record = parse_case_record(CASE_LINE)?;
        assert_eq!(record.uf, "SP");
        assert_eq!(record.casos, "5");
        assert_eq!(record.data_ini_se, "2020-01-01");
        assert_eq!(record.to_line(), CASE_LINE);
        Ok(())
    }

    #[test]
    fn short_case_line_is_rejected() {
        let err = parse_case_record("1|2020-01-01|5").unwrap_err();
        assert_eq!(
            err,
            PipelineError::MalformedInputLine {
                expected: 9,
                actual: 3,
                line: "1|2020-01-01|5".to_string(),
            }
        );
    }

    #[test]
    fn rain_record_binds_first_three_fields() -> anyhow::Result<()> {
        let record = parse_rain_record("2020-01-10,12.34,SP,ignored,also-ignored")?;
        assert_eq!(record.date, "2020-01-10");
        assert_eq!(record.rain_mm, "12.34");
        assert_eq!(record.uf, "SP");
        Ok(())
    }

    #[test]
    fn short_rain_line_is_rejected() {
        assert!(parse_rain_record("2020-01-10,12.34").is_err());
    }
}
