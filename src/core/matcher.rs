use std::cmp::Ordering;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;

use crate::core::{distance::haversine_distance, scoring::matching_score};
use crate::models::{MatchingParticipant, Project};
use crate::services::ParticipantRepository;

/// Default maximum distance between a participant and a target city
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Errors surfaced to callers of the matching pipeline
///
/// Repository failures collapse into a single opaque variant; the
/// underlying cause is logged, never exposed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("can't get participants now")]
    ParticipantsUnavailable,
}

/// Matching orchestrator
///
/// # Pipeline stages
/// 1. One lookup task per project city, run concurrently
/// 2. Distance filter against the matched city
/// 3. Scoring against the whole project
/// 4. Aggregation and score-descending sort
#[derive(Clone)]
pub struct Matcher {
    repository: Arc<dyn ParticipantRepository>,
    max_distance_km: f64,
}

impl Matcher {
    pub fn new(repository: Arc<dyn ParticipantRepository>, max_distance_km: f64) -> Self {
        Self {
            repository,
            max_distance_km,
        }
    }

    pub fn with_default_distance(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self::new(repository, DEFAULT_MAX_DISTANCE_KM)
    }

    /// Rank the participants located in a project's cities
    ///
    /// Queries the repository once per city, concurrently. A participant
    /// within range of a city yields one record for that city, scored
    /// against the whole project. Results are sorted by score descending;
    /// ties have no defined order.
    ///
    /// Every city task runs to completion. If any lookup failed, the whole
    /// call fails with `MatchError::ParticipantsUnavailable` and no partial
    /// results are returned. A project with zero cities resolves to an
    /// empty result.
    pub async fn matching_participants(
        &self,
        project: &Project,
    ) -> Result<Vec<MatchingParticipant>, MatchError> {
        let mut tasks = JoinSet::new();

        for city in &project.cities {
            let repository = Arc::clone(&self.repository);
            let city = city.clone();
            let project = project.clone();
            let max_distance_km = self.max_distance_km;

            // The repository call is blocking by contract
            tasks.spawn_blocking(move || {
                let participants = repository.get_by_formatted_address(&city.formatted_address)?;

                let matches = participants
                    .iter()
                    .filter_map(|participant| {
                        let distance_km = haversine_distance(&city.location, &participant.location);
                        if distance_km > max_distance_km {
                            return None;
                        }

                        Some(MatchingParticipant {
                            name: participant.name.clone(),
                            distance_km,
                            score: matching_score(&project, participant),
                            city_id: city.id.clone(),
                        })
                    })
                    .collect::<Vec<_>>();

                Ok::<_, crate::services::RepositoryError>(matches)
            });
        }

        let mut matches = Vec::new();
        let mut failed = false;

        // Drain every task even after a failure; partial successes are
        // discarded once any failure is observed.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(mut city_matches)) => matches.append(&mut city_matches),
                Ok(Err(e)) => {
                    tracing::error!("Participant lookup failed: {}", e);
                    failed = true;
                }
                Err(e) => {
                    tracing::error!("City lookup task panicked or was cancelled: {}", e);
                    failed = true;
                }
            }
        }

        if failed {
            return Err(MatchError::ParticipantsUnavailable);
        }

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(matches)
    }
}
