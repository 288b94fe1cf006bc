use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::stats::handlers;
use crate::features::stats::services::StatsService;

pub fn routes(service: Arc<StatsService>) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use crate::shared::constants::MSG_STATS;
    use crate::shared::test_helpers::test_server;
    use serde_json::Value;

    #[tokio::test]
    async fn test_stats_match_listings() {
        let server = test_server();

        let response = server.get("/api/v1/stats").await;
        response.assert_status_ok();
        let stats: Value = response.json();
        assert_eq!(stats["success"], true);
        assert_eq!(stats["message"], MSG_STATS);

        let communes: Value = server.get("/api/v1/communes").await.json();
        let departements: Value = server.get("/api/v1/departements").await.json();

        assert_eq!(stats["data"]["regions"], 14);
        assert_eq!(
            stats["data"]["departements"],
            departements["data"].as_array().unwrap().len()
        );
        assert_eq!(
            stats["data"]["communes"],
            communes["data"].as_array().unwrap().len()
        );
    }
}
