#[cfg(test)]
mod tests {
    use crate::api::{TrendStoreClient, TrendStoreConfig};
    use crate::interactive::application::trending_service::TrendingService;
    use crate::schemas::MovieSummary;
    use mockito::Matcher;
    use std::sync::Arc;

    fn build_service(base_url: String) -> TrendingService {
        let client = TrendStoreClient::new(TrendStoreConfig {
            base_url,
            api_key: "store-key".to_string(),
        });
        TrendingService::new(Some(Arc::new(client)))
    }

    fn top_result() -> MovieSummary {
        MovieSummary {
            id: 1,
            title: "Heat".to_string(),
            poster_path: None,
            release_date: None,
            rating: None,
            language: None,
        }
    }

    #[tokio::test]
    async fn refresh_returns_entries_on_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/counters")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"documents": [{"id": "a", "query": "heat", "count": 3,
                    "movie_id": 1, "title": "Heat", "poster_url": null}], "total": 1}"#,
            )
            .create_async()
            .await;

        let service = build_service(server.url());
        let entries = service.refresh().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Heat");
    }

    #[tokio::test]
    async fn refresh_failure_returns_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/counters")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let service = build_service(server.url());
        assert!(service.refresh().await.is_none());
    }

    #[tokio::test]
    async fn refresh_without_store_returns_none() {
        let service = TrendingService::new(None);
        assert!(service.refresh().await.is_none());
    }

    #[tokio::test]
    async fn record_without_store_is_a_no_op() {
        let service = TrendingService::new(None);
        // Must not panic or block; there is simply nothing to talk to.
        service.record("heat", &top_result()).await;
    }

    #[tokio::test]
    async fn record_failure_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/counters")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let service = build_service(server.url());
        // Logged only; the call itself must succeed.
        service.record("heat", &top_result()).await;
    }
}
