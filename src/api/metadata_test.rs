#[cfg(test)]
mod tests {
    use crate::api::error::{FetchError, GENERIC_FETCH_MESSAGE};
    use crate::api::metadata::{MetadataClient, MetadataConfig};
    use mockito::Matcher;

    fn build_client(base_url: String) -> MetadataClient {
        MetadataClient::new(MetadataConfig::new("test-token".to_string()).with_base_url(base_url))
    }

    fn results_body(count: usize) -> String {
        let results: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": {}, "title": "Movie {}", "poster_path": "/p{}.jpg",
                        "release_date": "2022-03-0{}", "vote_average": 7.{}, "original_language": "en"}}"#,
                    100 + i,
                    i,
                    i,
                    (i % 9) + 1,
                    i
                )
            })
            .collect();
        format!(
            r#"{{"page": 1, "results": [{}], "total_pages": 1, "total_results": {}}}"#,
            results.join(","),
            count
        )
    }

    #[tokio::test]
    async fn non_empty_query_issues_url_escaped_search_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::UrlEncoded(
                "query".into(),
                "the batman & robin".into(),
            ))
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(results_body(3))
            .create_async()
            .await;

        let client = build_client(server.url());
        let results = client.fetch("the batman & robin").await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Movie 0");
    }

    #[tokio::test]
    async fn empty_query_issues_discover_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/discover/movie")
            .match_query(Matcher::UrlEncoded(
                "sort_by".into(),
                "popularity.desc".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(results_body(20))
            .create_async()
            .await;

        let client = build_client(server.url());
        let results = client.fetch("").await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 20);
    }

    #[tokio::test]
    async fn success_with_empty_results_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"page": 1, "results": [], "total_pages": 0, "total_results": 0}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let results = client.fetch("zzzzzz no such movie").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status_message": "Invalid API key"}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch("batman").await.unwrap_err();

        assert_eq!(err, FetchError::Status(401));
        assert_eq!(err.user_message(), GENERIC_FETCH_MESSAGE);
    }

    #[tokio::test]
    async fn body_failure_flag_maps_to_api_error_with_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"success": false, "status_message": "The resource you requested could not be found."}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch("batman").await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Api("The resource you requested could not be found.".to_string())
        );
        assert_eq!(
            err.user_message(),
            "The resource you requested could not be found."
        );
    }

    #[tokio::test]
    async fn body_failure_flag_without_message_falls_back_to_generic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch("batman").await.unwrap_err();
        assert_eq!(err, FetchError::Api(GENERIC_FETCH_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client.fetch("batman").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_network_error() {
        // Nothing listens on this port.
        let client = build_client("http://127.0.0.1:1".to_string());
        let err = client.fetch("batman").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert_eq!(err.user_message(), GENERIC_FETCH_MESSAGE);
    }
}
