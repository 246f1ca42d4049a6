use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{City, Location, Project};

/// Request to rank participants against a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchParticipantsRequest {
    #[validate(nested)]
    #[serde(default)]
    pub cities: Vec<CityPayload>,
    #[serde(rename = "professionalIndustries", default)]
    pub professional_industries: Vec<String>,
    #[serde(rename = "professionalJobTitles", default)]
    pub professional_job_titles: Vec<String>,
}

/// One target city in a match request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CityPayload {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[validate(length(min = 1))]
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
    pub location: Location,
}

impl From<MatchParticipantsRequest> for Project {
    fn from(req: MatchParticipantsRequest) -> Self {
        Project {
            cities: req
                .cities
                .into_iter()
                .map(|c| City {
                    id: c.id,
                    city: c.city,
                    state: c.state,
                    country: c.country,
                    formatted_address: c.formatted_address,
                    location: c.location,
                })
                .collect(),
            professional_industries: req.professional_industries,
            professional_job_titles: req.professional_job_titles,
        }
    }
}
