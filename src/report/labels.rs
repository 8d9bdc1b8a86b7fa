use crate::config::DisplayConfig;
use crate::stats::ResolvedStat;

/// User-facing strings for rendering the ranked view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub orphan_folder: String,
    pub orphan_range: String,
    pub empty: String,
}

impl Labels {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            title: display.title.clone(),
            orphan_folder: display.orphan_folder_label.clone(),
            orphan_range: display.orphan_range_label.clone(),
            empty: display.empty_message.clone(),
        }
    }

    pub fn folder<'a>(&'a self, stat: &'a ResolvedStat) -> &'a str {
        if stat.orphan {
            &self.orphan_folder
        } else {
            &stat.folder_name
        }
    }

    pub fn range<'a>(&'a self, stat: &'a ResolvedStat) -> &'a str {
        if stat.orphan {
            &self.orphan_range
        } else {
            &stat.range_name
        }
    }

    /// Title line, suffixed with the chart name when there is one
    pub fn heading(&self, chart_name: &str) -> String {
        if chart_name.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, chart_name)
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
