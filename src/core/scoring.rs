use crate::models::{Participant, Project};

/// Job-title terms that indicate seniority; each one found in a
/// participant's title adds a half-point bonus to a substring match.
const SENIORITY_INDICATORS: [&str; 7] = [
    "Sr",
    "Senior",
    "Principal",
    "Staff",
    "Specialist",
    "Head",
    "Expert",
];

/// Calculate a participant's affinity score against a project
///
/// The score is the sum of the industry overlap and the job-title
/// affinity, with no normalization or weighting between the two.
/// Always non-negative.
pub fn matching_score(project: &Project, participant: &Participant) -> f64 {
    industries_score(&participant.industries, &project.professional_industries)
        + job_title_score(&participant.job_title, &project.professional_job_titles)
}

/// One point per case-insensitive equal (participant industry, project
/// industry) pair. This is a full cross product, so duplicate names on
/// either side multiply matches.
fn industries_score(participant_industries: &[String], project_industries: &[String]) -> f64 {
    let mut score = 0.0;
    for industry in participant_industries {
        for project_industry in project_industries {
            if industry.eq_ignore_ascii_case(project_industry) {
                score += 1.0;
            }
        }
    }

    score
}

/// Evaluate the participant's single job title against every desired
/// title in the project:
/// - exact case-insensitive match: +1
/// - desired title contained in the participant's title: +1, plus +0.5
///   per seniority indicator found in the participant's title
fn job_title_score(participant_job_title: &str, desired_job_titles: &[String]) -> f64 {
    let participant_title = participant_job_title.to_lowercase();

    let mut score = 0.0;
    for job_title in desired_job_titles {
        let desired = job_title.to_lowercase();
        if desired == participant_title {
            score += 1.0;
        } else if participant_title.contains(&desired) {
            score += 1.0;
            for indicator in SENIORITY_INDICATORS {
                if participant_title.contains(&indicator.to_lowercase()) {
                    score += 0.5;
                }
            }
        }
    }

    score
}
