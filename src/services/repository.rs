use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Location, Participant};
use crate::services::geocoder::ReverseGeocoder;

/// Errors that can occur when loading or querying the participant store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read participant data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse participant data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("participant storage unavailable: {0}")]
    Unavailable(String),
}

/// Address-keyed lookup of participants
///
/// Implementations must be safe for concurrent callers. An address with
/// no associated participants yields an empty vec, not an error.
pub trait ParticipantRepository: Send + Sync {
    fn get_by_formatted_address(&self, address: &str) -> Result<Vec<Participant>, RepositoryError>;
}

/// One participant row in the data file
///
/// The formatted address may be absent; it is backfilled via reverse
/// geocoding at load time when a geocoder is configured.
#[derive(Debug, Clone, Deserialize)]
struct ParticipantRecord {
    name: String,
    #[serde(rename = "formattedAddress", default)]
    formatted_address: Option<String>,
    location: Location,
    #[serde(rename = "jobTitle")]
    job_title: String,
    #[serde(default)]
    industries: Vec<String>,
}

/// In-memory participant store loaded from a JSON data file
pub struct JsonParticipantRepository {
    participants: Vec<Participant>,
}

impl JsonParticipantRepository {
    /// Load participants from a JSON array of records
    ///
    /// Records without a formatted address are resolved through the
    /// geocoder when one is given; records that cannot be resolved are
    /// skipped with a warning rather than failing the whole load.
    pub async fn load<P: AsRef<Path>>(
        path: P,
        geocoder: Option<&ReverseGeocoder>,
    ) -> Result<Self, RepositoryError> {
        tracing::info!("Loading participant storage from {:?}", path.as_ref());

        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let records: Vec<ParticipantRecord> = serde_json::from_str(&raw)?;

        let mut participants = Vec::with_capacity(records.len());
        for record in records {
            let formatted_address = match record.formatted_address {
                Some(address) => address,
                None => match geocoder {
                    Some(geocoder) => {
                        match geocoder
                            .formatted_address(
                                record.location.latitude,
                                record.location.longitude,
                            )
                            .await
                        {
                            Ok(address) => address,
                            Err(e) => {
                                tracing::warn!(
                                    "Skipping participant {}: formatted address can't be obtained: {}",
                                    record.name,
                                    e
                                );
                                continue;
                            }
                        }
                    }
                    None => {
                        tracing::warn!(
                            "Skipping participant {}: no formatted address and no geocoder configured",
                            record.name
                        );
                        continue;
                    }
                },
            };

            participants.push(Participant {
                name: record.name,
                formatted_address,
                location: record.location,
                job_title: record.job_title,
                industries: record.industries,
            });
        }

        tracing::info!("Loaded {} participants", participants.len());

        Ok(Self { participants })
    }

    /// Build a repository from already-materialized participants
    pub fn from_participants(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl ParticipantRepository for JsonParticipantRepository {
    fn get_by_formatted_address(&self, address: &str) -> Result<Vec<Participant>, RepositoryError> {
        let matches = self
            .participants
            .iter()
            .filter(|p| p.formatted_address.eq_ignore_ascii_case(address))
            .cloned()
            .collect();

        Ok(matches)
    }
}
