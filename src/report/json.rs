use std::io::Write;

use crate::error::RangeStatsError;
use crate::stats::ResolvedStat;

/// Write the ranked view as a pretty JSON array
///
/// Orphans keep their placeholder names; consumers can key off `orphan`.
pub fn write_json<W: Write>(out: &mut W, stats: &[&ResolvedStat]) -> Result<(), RangeStatsError> {
    serde_json::to_writer_pretty(&mut *out, stats)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_json_output_in_given_order() {
        let stats = [
            ResolvedStat::new("r2", "F", "B", 9),
            ResolvedStat::orphan("gone", 2),
        ];
        let refs: Vec<&ResolvedStat> = stats.iter().collect();

        let mut out = Vec::new();
        write_json(&mut out, &refs).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            parsed,
            json!([
                {"rangeId": "r2", "folderName": "F", "rangeName": "B", "count": 9, "orphan": false},
                {
                    "rangeId": "gone",
                    "folderName": "(folder no longer exists)",
                    "rangeName": "(range not found)",
                    "count": 2,
                    "orphan": true
                }
            ])
        );
    }

    #[test]
    fn test_json_empty_array() {
        let mut out = Vec::new();
        write_json(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
