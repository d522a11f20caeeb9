use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a dataset into memory, one string per line. Both input files carry
/// a column-header line that is not data; `skip_header` drops it.
pub fn read_lines(path: &Path, skip_header: bool) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("opening input {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("reading {} at line {}", path.display(), idx + 1))?;
        if idx == 0 && skip_header {
            continue;
        }
        if line.is_empty() {
            continue;
        }
        lines.push(line);
    }

    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn skips_header_and_blank_lines() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "col_a,col_b")?;
        writeln!(tmp, "1,2")?;
        writeln!(tmp)?;
        writeln!(tmp, "3,4")?;

        let lines = read_lines(tmp.path(), true)?;
        assert_eq!(lines, vec!["1,2", "3,4"]);
        Ok(())
    }

    #[test]
    fn keeps_first_line_when_not_skipping() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "1,2")?;
        let lines = read_lines(tmp.path(), false)?;
        assert_eq!(lines, vec!["1,2"]);
        Ok(())
    }
}
