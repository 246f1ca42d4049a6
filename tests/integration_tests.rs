// Integration tests for Panel Match

use panel_match::core::{MatchError, Matcher};
use panel_match::models::{City, Location, Participant, Project};
use panel_match::services::{JsonParticipantRepository, ParticipantRepository, RepositoryError};
use std::sync::Arc;

struct FailingRepository;

impl ParticipantRepository for FailingRepository {
    fn get_by_formatted_address(&self, _address: &str) -> Result<Vec<Participant>, RepositoryError> {
        Err(RepositoryError::Unavailable(
            "can't access storage now".to_string(),
        ))
    }
}

fn city(id: &str, name: &str, state: &str, address: &str, latitude: f64, longitude: f64) -> City {
    City {
        id: id.to_string(),
        city: name.to_string(),
        state: state.to_string(),
        country: "US".to_string(),
        formatted_address: address.to_string(),
        location: Location {
            latitude,
            longitude,
        },
    }
}

fn new_york() -> City {
    city(
        "ChIJOwg_06VPwokRYv534QaPC8g",
        "New York",
        "NY",
        "New York, NY, USA",
        40.7127753,
        -74.0059728,
    )
}

fn philadelphia() -> City {
    city(
        "ChIJ60u11Ni3xokRwVg-jNgU9Yk",
        "Philadelphia",
        "PA",
        "Philadelphia, PA, USA",
        39.9525839,
        -75.1652215,
    )
}

fn participant(
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    job_title: &str,
    industries: &[&str],
) -> Participant {
    Participant {
        name: name.to_string(),
        formatted_address: address.to_string(),
        location: Location {
            latitude,
            longitude,
        },
        job_title: job_title.to_string(),
        industries: industries.iter().map(|s| s.to_string()).collect(),
    }
}

fn two_city_project() -> Project {
    Project {
        cities: vec![new_york(), philadelphia()],
        professional_industries: vec!["Banking".to_string(), "Financial Services".to_string()],
        professional_job_titles: vec![
            "Software Engineer".to_string(),
            "Java Developer".to_string(),
        ],
    }
}

fn seeded_repository() -> JsonParticipantRepository {
    JsonParticipantRepository::from_participants(vec![
        participant(
            "Jefferson",
            "New York, NY, USA",
            40.7127753,
            -74.0059728,
            "Senior Software Engineer",
            &["Banking", "Computer Software"],
        ),
        participant(
            "Jillian",
            "New York, NY, USA",
            40.6781784,
            -73.9441579,
            "Software Engineer",
            &["Financial Services"],
        ),
        participant(
            "Matthew",
            "Philadelphia, PA, USA",
            39.9525839,
            -75.1652215,
            "Java Developer",
            &["Insurance"],
        ),
    ])
}

#[tokio::test]
async fn test_end_to_end_ranking_across_cities() {
    let matcher = Matcher::with_default_distance(Arc::new(seeded_repository()));

    let matches = matcher
        .matching_participants(&two_city_project())
        .await
        .unwrap();

    // Two New York participants plus one Philadelphia participant
    assert_eq!(matches.len(), 3);

    // Sorted by score descending
    for pair in matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // Jefferson: 1 industry match + substring title match with one
    // seniority indicator = 2.5
    assert_eq!(matches[0].name, "Jefferson");
    assert_eq!(matches[0].score, 2.5);
    assert_eq!(matches[0].city_id, new_york().id);

    // Jillian: 1 industry match + exact title match = 2.0
    assert_eq!(matches[1].name, "Jillian");
    assert_eq!(matches[1].score, 2.0);

    // Matthew: exact title match only = 1.0
    assert_eq!(matches[2].name, "Matthew");
    assert_eq!(matches[2].score, 1.0);
    assert_eq!(matches[2].city_id, philadelphia().id);
}

#[tokio::test]
async fn test_participants_beyond_threshold_are_excluded() {
    // Boston is ~306km from New York, well beyond the 100km threshold
    let repository = JsonParticipantRepository::from_participants(vec![
        participant(
            "Jillian",
            "New York, NY, USA",
            40.6781784,
            -73.9441579,
            "Software Engineer",
            &[],
        ),
        participant(
            "Remote Rhonda",
            "New York, NY, USA",
            42.3600825,
            -71.0588801,
            "Software Engineer",
            &[],
        ),
    ]);
    let matcher = Matcher::with_default_distance(Arc::new(repository));

    let project = Project {
        cities: vec![new_york()],
        professional_industries: vec![],
        professional_job_titles: vec!["Software Engineer".to_string()],
    };

    let matches = matcher.matching_participants(&project).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Jillian");
    assert!(matches[0].distance_km <= 100.0);
}

#[tokio::test]
async fn test_repository_failure_yields_single_generic_error() {
    let matcher = Matcher::with_default_distance(Arc::new(FailingRepository));

    let result = matcher.matching_participants(&two_city_project()).await;

    assert_eq!(result, Err(MatchError::ParticipantsUnavailable));
    assert_eq!(
        MatchError::ParticipantsUnavailable.to_string(),
        "can't get participants now"
    );
}

#[tokio::test]
async fn test_empty_project_returns_empty_result() {
    let matcher = Matcher::with_default_distance(Arc::new(seeded_repository()));

    let project = Project {
        cities: vec![],
        professional_industries: vec!["Banking".to_string()],
        professional_job_titles: vec![],
    };

    let matches = matcher.matching_participants(&project).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_scores_use_whole_project_not_just_matched_city() {
    // Matthew only matches the Philadelphia city but his score includes
    // industry criteria shared across the whole project
    let repository = JsonParticipantRepository::from_participants(vec![participant(
        "Matthew",
        "Philadelphia, PA, USA",
        39.9525839,
        -75.1652215,
        "Java Developer",
        &["Banking", "Financial Services"],
    )]);
    let matcher = Matcher::with_default_distance(Arc::new(repository));

    let matches = matcher
        .matching_participants(&two_city_project())
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    // 2 industry matches + exact title match
    assert_eq!(matches[0].score, 3.0);
}

#[tokio::test]
async fn test_many_cities_fan_out() {
    let mut cities = vec![new_york(), philadelphia()];
    for i in 0..20 {
        cities.push(city(
            &format!("city-{}", i),
            "Nowhere",
            "KS",
            &format!("Nowhere {}, KS, USA", i),
            39.0,
            -98.0,
        ));
    }

    let project = Project {
        cities,
        professional_industries: vec!["Banking".to_string()],
        professional_job_titles: vec!["Software Engineer".to_string()],
    };

    let matcher = Matcher::with_default_distance(Arc::new(seeded_repository()));
    let matches = matcher.matching_participants(&project).await.unwrap();

    // Only the seeded addresses produce matches; empty cities are fine
    assert_eq!(matches.len(), 3);
}
