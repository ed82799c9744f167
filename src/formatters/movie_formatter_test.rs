#[cfg(test)]
mod tests {
    use crate::formatters::{format_movie_result, format_trending_entry};
    use crate::schemas::{MovieSummary, TrendingEntry};

    #[test]
    fn formats_full_movie_line_without_color() {
        let movie = MovieSummary {
            id: 1,
            title: "The Batman".to_string(),
            poster_path: None,
            release_date: Some("2022-03-01".to_string()),
            rating: Some(7.75),
            language: Some("en".to_string()),
        };

        assert_eq!(
            format_movie_result(&movie, false),
            "The Batman (2022) 7.8 en"
        );
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let movie = MovieSummary {
            id: 1,
            title: "Mystery".to_string(),
            poster_path: None,
            release_date: None,
            rating: None,
            language: None,
        };

        assert_eq!(format_movie_result(&movie, false), "Mystery (----) N/A ??");
    }

    #[test]
    fn formats_trending_line_without_color() {
        let entry = TrendingEntry {
            external_id: 1,
            title: "The Batman".to_string(),
            poster_url: None,
            search_count: 12,
        };

        assert_eq!(
            format_trending_entry(1, &entry, false),
            "1. The Batman (12 searches)"
        );
    }
}
