/// Run summary returned by the generator, plus count formatting for logs.
use std::fmt;
use std::time::Duration;

/// Totals for one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Regular files found by the walk (generator artifacts not counted).
    pub files_found: u64,
    /// Files written to the `.files` list.
    pub files_written: u64,
    /// Files dropped by the blacklist.
    pub files_excluded: u64,
    /// Directories written to the `.includes` list (extras not counted).
    pub include_dirs: u64,
    pub duration: Duration,
}

impl fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files listed ({} excluded), {} include directories in {:?}",
            format_count(self.files_written),
            format_count(self.files_excluded),
            format_count(self.include_dirs),
            self.duration
        )
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn display_mentions_all_counts() {
        let summary = GenerateSummary {
            files_found: 1_502,
            files_written: 1_500,
            files_excluded: 2,
            include_dirs: 40,
            duration: Duration::from_millis(12),
        };
        let text = summary.to_string();
        assert!(text.starts_with("1,500 files listed (2 excluded), 40 include directories"));
    }
}
