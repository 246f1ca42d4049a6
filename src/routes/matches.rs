use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{MatchError, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchParticipantsRequest, MatchParticipantsResponse, Project,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/participants", web::post().to(match_participants));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matching participants for a project
///
/// POST /api/v1/matches/participants
///
/// Request body:
/// ```json
/// {
///   "cities": [
///     {
///       "id": "string",
///       "city": "string",
///       "state": "string",
///       "country": "string",
///       "formattedAddress": "string",
///       "location": { "latitude": 0.0, "longitude": 0.0 }
///     }
///   ],
///   "professionalIndustries": ["string"],
///   "professionalJobTitles": ["string"]
/// }
/// ```
async fn match_participants(
    state: web::Data<AppState>,
    req: web::Json<MatchParticipantsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let project: Project = req.into_inner().into();

    tracing::info!(
        "Matching participants for project with {} cities",
        project.cities.len()
    );

    match state.matcher.matching_participants(&project).await {
        Ok(matches) => {
            tracing::info!("Returning {} matching participants", matches.len());
            let total_matches = matches.len();
            HttpResponse::Ok().json(MatchParticipantsResponse {
                matches,
                total_matches,
            })
        }
        Err(e @ MatchError::ParticipantsUnavailable) => {
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "participants_unavailable".to_string(),
                message: e.to_string(),
                status_code: 503,
            })
        }
    }
}
