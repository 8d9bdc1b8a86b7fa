use std::io::{self, Write};

use super::labels::Labels;
use crate::stats::ResolvedStat;

/// Write the ranked view as an aligned text table
pub fn write_plain<W: Write>(
    out: &mut W,
    chart_name: &str,
    stats: &[&ResolvedStat],
    labels: &Labels,
) -> io::Result<()> {
    writeln!(out, "{}", labels.heading(chart_name))?;

    if stats.is_empty() {
        writeln!(out, "  {}", labels.empty)?;
        return Ok(());
    }

    let names: Vec<String> = stats
        .iter()
        .map(|stat| format!("{} / {}", labels.folder(stat), labels.range(stat)))
        .collect();
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let count_width = stats
        .iter()
        .map(|stat| stat.count.to_string().len())
        .max()
        .unwrap_or(1);

    for (rank, (stat, name)) in stats.iter().zip(&names).enumerate() {
        writeln!(
            out,
            "{:>2}. {:<name_width$}  {:>count_width$}",
            rank + 1,
            name,
            stat.count
        )?;
    }

    Ok(())
}
