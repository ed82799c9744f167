#[cfg(test)]
mod tests {
    use crate::schemas::movie::{MovieListResponse, MovieSummary};

    fn sample_results_body() -> &'static str {
        r#"{
            "page": 1,
            "results": [
                {
                    "id": 414906,
                    "title": "The Batman",
                    "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                    "release_date": "2022-03-01",
                    "vote_average": 7.7,
                    "original_language": "en",
                    "popularity": 1234.5,
                    "overview": "ignored extra field"
                },
                {
                    "id": 999,
                    "title": "Unreleased",
                    "poster_path": null,
                    "release_date": "",
                    "vote_average": null,
                    "original_language": null
                }
            ],
            "total_pages": 3,
            "total_results": 50
        }"#
    }

    #[test]
    fn parses_results_array() {
        let body: MovieListResponse = serde_json::from_str(sample_results_body()).unwrap();

        assert_eq!(body.page, 1);
        assert_eq!(body.results.len(), 2);
        assert_eq!(body.total_results, 50);
        assert_eq!(body.success, None);

        let first = &body.results[0];
        assert_eq!(first.id, 414906);
        assert_eq!(first.title, "The Batman");
        assert_eq!(first.rating, Some(7.7));
        assert_eq!(first.language.as_deref(), Some("en"));
    }

    #[test]
    fn parses_internal_failure_envelope() {
        let body: MovieListResponse = serde_json::from_str(
            r#"{"success": false, "status_code": 34, "status_message": "The resource you requested could not be found."}"#,
        )
        .unwrap();

        assert_eq!(body.success, Some(false));
        assert_eq!(
            body.status_message.as_deref(),
            Some("The resource you requested could not be found.")
        );
        assert!(body.results.is_empty());
    }

    #[test]
    fn release_year_handles_empty_and_missing_dates() {
        let body: MovieListResponse = serde_json::from_str(sample_results_body()).unwrap();
        assert_eq!(body.results[0].release_year(), Some("2022"));
        assert_eq!(body.results[1].release_year(), None);

        let no_date = MovieSummary {
            id: 1,
            title: "x".to_string(),
            poster_path: None,
            release_date: None,
            rating: None,
            language: None,
        };
        assert_eq!(no_date.release_year(), None);
    }

    #[test]
    fn release_year_tolerates_non_ascii_dates() {
        let odd_date = MovieSummary {
            id: 1,
            title: "x".to_string(),
            poster_path: None,
            release_date: Some("２０２２-03-01".to_string()),
            rating: None,
            language: None,
        };
        // Multibyte digits put a char boundary inside the first four bytes;
        // that must degrade to None, not panic.
        assert_eq!(odd_date.release_year(), None);

        let short_date = MovieSummary {
            release_date: Some("20".to_string()),
            ..odd_date
        };
        assert_eq!(short_date.release_year(), None);
    }

    #[test]
    fn poster_url_joins_cdn_base() {
        let body: MovieListResponse = serde_json::from_str(sample_results_body()).unwrap();
        assert_eq!(
            body.results[0].poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/74xTEgt7R36Fpooo50r9T25onhq.jpg")
        );
        assert_eq!(body.results[1].poster_url(), None);
    }
}
