use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in decimal degrees
///
/// No range validation is applied; out-of-range values produce
/// geometrically nonsensical but well-defined distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A target city supplied as part of a project
///
/// The formatted address is the lookup key into the participant store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
    pub location: Location,
}

/// A project's matching criteria: target cities plus desired
/// industry and job-title names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(rename = "professionalIndustries", default)]
    pub professional_industries: Vec<String>,
    #[serde(rename = "professionalJobTitles", default)]
    pub professional_job_titles: Vec<String>,
}

/// A candidate person as stored in the participant repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: String,
    pub location: Location,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(default)]
    pub industries: Vec<String>,
}

/// One (participant, city) pairing that survived the distance filter
///
/// A participant located near two target cities yields two records,
/// one per city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingParticipant {
    pub name: String,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    pub score: f64,
    #[serde(rename = "cityId")]
    pub city_id: String,
}
