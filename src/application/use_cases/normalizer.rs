// ============================================================
// VIDEO NORMALIZER
// ============================================================
// Map raw CSV rows onto the fixed video record shape

use crate::domain::catalog::{RawRow, VideoRecord, SCALAR_FIELDS, TAGS_FIELD, TAG_SEPARATOR};

/// Normalize every row, preserving order and count
pub fn format_video_data(videos: &[RawRow]) -> Vec<VideoRecord> {
    videos.iter().map(format_video).collect()
}

/// Normalize a single row using the field table defaults
pub fn format_video(row: &RawRow) -> VideoRecord {
    let [
        id,
        title,
        description,
        url,
        thumbnail,
        duration,
        published_at,
        channel_title,
        view_count,
        like_count,
    ] = SCALAR_FIELDS.map(|field| row.get(field.name).unwrap_or(field.default).to_string());

    VideoRecord {
        id,
        title,
        description,
        url,
        thumbnail,
        duration,
        published_at,
        channel_title,
        view_count,
        like_count,
        tags: split_tags(row.get(TAGS_FIELD)),
    }
}

/// Absent or empty yields no tags, never a single empty tag
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) if !value.is_empty() => {
            value.split(TAG_SEPARATOR).map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawRow {
        RawRow::from_pairs([
            ("id", "abc123"),
            ("title", "Seated Strength"),
            ("description", "Gentle routine"),
            ("url", "https://www.youtube.com/watch?v=abc123"),
            ("thumbnail", "https://i.ytimg.com/vi/abc123/hqdefault.jpg"),
            ("duration", "PT12M30S"),
            ("published_at", "2023-04-01T10:00:00Z"),
            ("channel_title", "Rehab Lab"),
            ("view_count", "1500"),
            ("like_count", "42"),
            ("tags", "strength,seated,beginner"),
        ])
    }

    #[test]
    fn test_fully_populated_row_passes_through() {
        let record = format_video(&full_row());

        assert_eq!(record.id, "abc123");
        assert_eq!(record.title, "Seated Strength");
        assert_eq!(record.description, "Gentle routine");
        assert_eq!(record.url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(record.thumbnail, "https://i.ytimg.com/vi/abc123/hqdefault.jpg");
        assert_eq!(record.duration, "PT12M30S");
        assert_eq!(record.published_at, "2023-04-01T10:00:00Z");
        assert_eq!(record.channel_title, "Rehab Lab");
        assert_eq!(record.view_count, "1500");
        assert_eq!(record.like_count, "42");
        assert_eq!(record.tags, vec!["strength", "seated", "beginner"]);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let row = RawRow::from_pairs([("id", "v1"), ("title", "Walk")]);
        let record = format_video(&row);

        assert_eq!(record.view_count, "0");
        assert_eq!(record.like_count, "0");
        assert_eq!(record.description, "");
        assert_eq!(record.channel_title, "");
    }

    #[test]
    fn test_present_empty_value_is_kept() {
        let row = RawRow::from_pairs([("view_count", "")]);
        assert_eq!(format_video(&row).view_count, "");
    }

    #[test]
    fn test_counts_are_not_validated() {
        let row = RawRow::from_pairs([("view_count", "lots"), ("like_count", "1,204")]);
        let record = format_video(&row);
        assert_eq!(record.view_count, "lots");
        assert_eq!(record.like_count, "1,204");
    }

    #[test]
    fn test_tag_splitting() {
        assert_eq!(split_tags(Some("a,b,c")), vec!["a", "b", "c"]);
        assert_eq!(split_tags(Some("solo")), vec!["solo"]);
        assert!(split_tags(Some("")).is_empty());
        assert!(split_tags(None).is_empty());
    }

    #[test]
    fn test_tags_keep_surrounding_spaces() {
        assert_eq!(split_tags(Some("yoga, chair")), vec!["yoga", " chair"]);
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let row = RawRow::from_pairs([("id", "v1"), ("playlist", "rehab")]);
        let json = serde_json::to_value(format_video(&row)).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 11);
        assert!(!object.contains_key("playlist"));
    }

    #[test]
    fn test_order_and_length_preserved() {
        let rows: Vec<RawRow> = ["first", "second", "third"]
            .iter()
            .map(|id| RawRow::from_pairs([("id", *id)]))
            .collect();

        let ids: Vec<String> = format_video_data(&rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert!(format_video_data(&[]).is_empty());
    }
}
