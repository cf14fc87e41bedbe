//! Read-only projections of job board payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub rating: f32,
    pub company_logo_url: String,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    pub jobs: Vec<JobSummary>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub id: String,
    pub title: String,
    pub rating: f32,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarJob {
    pub id: String,
    pub title: String,
    pub rating: f32,
    pub company_logo_url: String,
    pub location: String,
    pub employment_type: String,
    pub job_description: String,
}

/// Payload of the job details page: the job itself plus its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailsPage {
    pub job_details: JobDetails,
    #[serde(default)]
    pub similar_jobs: Vec<SimilarJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_job_list_decodes() {
        let list: JobList = serde_json::from_str(r#"{"jobs": [], "total": 0}"#).unwrap();
        assert_eq!(
            list,
            JobList {
                jobs: Vec::new(),
                total: 0,
            }
        );
    }

    #[test]
    fn job_details_without_optional_lists_decodes() {
        let payload = r#"{
            "job_details": {
                "id": "d1",
                "title": "Backend Engineer",
                "rating": 4.5,
                "company_logo_url": "https://img.example/logo.png",
                "company_website_url": "https://example.com",
                "location": "Hyderabad",
                "employment_type": "Full Time",
                "package_per_annum": "21 LPA",
                "job_description": "Build services.",
                "life_at_company": {
                    "description": "Friendly team.",
                    "image_url": "https://img.example/life.png"
                }
            }
        }"#;

        let page: JobDetailsPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.job_details.id, "d1");
        assert_eq!(page.job_details.rating, 4.5);
        assert!(page.job_details.skills.is_empty());
        assert!(page.similar_jobs.is_empty());
        assert_eq!(page.job_details.life_at_company.description, "Friendly team.");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = serde_json::from_str::<JobList>(r#"{"jobs": []}"#);
        assert!(result.is_err());
    }
}
