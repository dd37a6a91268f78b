use std::collections::BTreeSet;

use super::VideoRecord;

/// Summary figures reported after an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of normalized records
    pub total: usize,

    /// Distinct non-empty channel titles, sorted
    pub channels: BTreeSet<String>,
}

impl CatalogStats {
    pub fn from_records(records: &[VideoRecord]) -> Self {
        let channels = records
            .iter()
            .map(|r| r.channel_title.as_str())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            total: records.len(),
            channels,
        }
    }

    pub fn unique_channels(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, channel: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            url: String::new(),
            thumbnail: String::new(),
            duration: String::new(),
            published_at: String::new(),
            channel_title: channel.to_string(),
            view_count: "0".to_string(),
            like_count: "0".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_channels_are_distinct_sorted_and_non_empty() {
        let records = vec![
            record("1", "Yoga With B"),
            record("2", ""),
            record("3", "Active Recovery"),
            record("4", "Yoga With B"),
        ];
        let stats = CatalogStats::from_records(&records);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_channels(), 2);
        let listing: Vec<&str> = stats.channels.iter().map(String::as_str).collect();
        assert_eq!(listing, vec!["Active Recovery", "Yoga With B"]);
    }

    #[test]
    fn test_empty_catalog() {
        let stats = CatalogStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique_channels(), 0);
    }
}
