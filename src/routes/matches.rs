use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::config::MatchingSettings;
use crate::core::{BatchMatchingOrchestrator, MatchRanker};
use crate::error::ServiceError;
use crate::models::{BatchRequest, BatchResponse, HealthResponse, RankRequest, RankResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: MatchRanker,
    pub batch: BatchMatchingOrchestrator,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(ranker: MatchRanker, matching: MatchingSettings) -> Self {
        Self {
            batch: BatchMatchingOrchestrator::with_ranker(ranker.clone()),
            ranker,
            matching,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_ticket))
        .route("/matches/batch", web::post().to(process_batch));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank developers for a single ticket
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "ticket": { "id": "string", "technicalAreas": ["string"], "urgency": "high", ... },
///   "developers": [{ "id": "string", "skills": ["string"], "availability": true, ... }],
///   "expandSearch": false,
///   "limit": 20
/// }
/// ```
async fn rank_ticket(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(errors) = req.validate_all() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return Err(errors.into());
    }
    ensure_within("developers", req.developers.len(), state.matching.max_developers)?;

    let request_id = Uuid::new_v4().to_string();
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!(
        "Ranking {} developers for ticket {} (request {}, expand_search: {}, limit: {})",
        req.developers.len(),
        req.ticket.id,
        request_id,
        req.expand_search,
        limit
    );

    let result = state
        .ranker
        .top_matches(&req.ticket, &req.developers, req.expand_search, limit);

    tracing::debug!(
        "Ticket {} priority {} ({:?}) with {} matches",
        result.ticket.id,
        result.priority_score,
        result.priority_level,
        result.matches.len()
    );

    Ok(HttpResponse::Ok().json(RankResponse {
        request_id,
        result,
        total_candidates: req.developers.len(),
    }))
}

/// Prioritize a batch of tickets and rank developers for each
///
/// POST /api/v1/matches/batch
///
/// Request body:
/// ```json
/// {
///   "tickets": [{ "id": "string", ... }],
///   "developers": [{ "id": "string", ... }]
/// }
/// ```
async fn process_batch(
    state: web::Data<AppState>,
    req: web::Json<BatchRequest>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(errors) = req.validate_all() {
        tracing::info!("Validation failed for batch request: field_errors={:?}", errors);
        return Err(errors.into());
    }
    ensure_within("tickets", req.tickets.len(), state.matching.max_batch_tickets)?;
    ensure_within("developers", req.developers.len(), state.matching.max_developers)?;

    let request_id = Uuid::new_v4().to_string();
    let BatchRequest { tickets, developers } = req.into_inner();

    tracing::info!(
        "Processing batch {}: {} tickets x {} developers",
        request_id,
        tickets.len(),
        developers.len()
    );

    // Scoring is CPU-bound; keep it off the async workers
    let orchestrator = state.batch.clone();
    let (results, developer_count) = tokio::task::spawn_blocking(move || {
        (orchestrator.process_batch(&tickets, &developers), developers.len())
    })
    .await
    .map_err(|e| {
        tracing::error!("Batch {} worker failed: {}", request_id, e);
        ServiceError::Worker(e.to_string())
    })?;

    let summary = BatchMatchingOrchestrator::summarize(&results, developer_count);
    if !summary.fallback_tickets.is_empty() {
        tracing::warn!(
            "Batch {}: {} tickets had no developer above the threshold",
            request_id,
            summary.fallback_tickets.len()
        );
    }

    Ok(HttpResponse::Ok().json(BatchResponse {
        request_id,
        results,
        summary,
    }))
}

fn ensure_within(what: &str, count: usize, max: usize) -> Result<(), ServiceError> {
    if count > max {
        return Err(ServiceError::TooLarge(format!(
            "{} {} exceeds the maximum of {}",
            count, what, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(MatchRanker::with_default_weights(), MatchingSettings::default())
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_rank_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({
                "ticket": {
                    "id": "t1",
                    "technicalAreas": ["React", "Node.js"],
                    "urgency": "critical",
                    "estimatedDurationMinutes": 150,
                    "budgetRange": "$500+"
                },
                "developers": [
                    {"id": "d1", "skills": ["React"], "availability": true, "online": true, "rating": 4.5},
                    {"id": "d2", "skills": [], "availability": false, "online": false}
                ]
            }))
            .to_request();
        let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.result.priority_score, 100);
        assert_eq!(resp.result.matches.len(), 1);
        assert_eq!(resp.result.matches[0].developer.id, "d1");
    }

    #[actix_web::test]
    async fn test_rank_rejects_invalid_ticket() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({"ticket": {"id": ""}, "developers": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_batch_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/batch")
            .set_json(json!({
                "tickets": [
                    {"id": "low", "urgency": "low", "technicalAreas": ["Go"]},
                    {"id": "high", "urgency": "high", "technicalAreas": ["Go"]}
                ],
                "developers": [
                    {"id": "d1", "skills": ["go"], "availability": true, "online": false}
                ]
            }))
            .to_request();
        let resp: BatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].ticket.id, "high");
        assert_eq!(resp.summary.ticket_count, 2);
        assert_eq!(resp.summary.developer_count, 1);
    }

    #[actix_web::test]
    async fn test_batch_rejects_oversized_request() {
        let mut state = test_state();
        state.matching.max_batch_tickets = 1;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/batch")
            .set_json(json!({"tickets": [{"id": "a"}, {"id": "b"}], "developers": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
