//! Roster loading

use std::path::Path;

use tracing::info;

use crate::roster::Roster;
use crate::ContentError;

impl Roster {
    /// Parse a roster from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a roster from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&raw)?;
        info!(
            doctors = roster.doctors.len(),
            testimonials = roster.testimonials.len(),
            "loaded roster from {}",
            path.display()
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const ROSTER_JSON: &str = r#"{
        "doctors": [
            {
                "name": "Dr. Jane Doe",
                "title": "Chief of Cardiology",
                "specialty": "Cardiology",
                "experience_years": 15,
                "education": ["MD - Somewhere"],
                "specializations": ["Heart Surgery"],
                "rating": 4.9,
                "patients_treated": 2500,
                "bio": "A cardiologist.",
                "awards": ["Best Doctor 2023"],
                "availability": { "available": true, "next_slot": "Tomorrow 2:00 PM" },
                "phone": "(555) 123-4567",
                "email": "jane.doe@example.com"
            }
        ],
        "testimonials": [
            {
                "name": "Pat Smith",
                "age": 45,
                "condition": "Cardiac Surgery",
                "quote": "Saved my life.",
                "rating": 5,
                "date": "2023-12-15",
                "department": "Cardiology"
            }
        ]
    }"#;

    #[test]
    fn test_parse_full_roster() {
        let roster = Roster::from_json_str(ROSTER_JSON).unwrap();
        assert_eq!(roster.doctors.len(), 1);
        assert_eq!(roster.testimonials.len(), 1);
        assert_eq!(roster.doctors[0].name, "Dr. Jane Doe");
        assert!(roster.doctors[0].availability.available);
        assert_eq!(
            roster.testimonials[0].date,
            NaiveDate::from_ymd_opt(2023, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Roster::from_json_str("{ not json").is_err());
        assert!(Roster::from_json_str(r#"{"doctors": 3}"#).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Roster::from_json_file(Path::new("/nonexistent/roster.json")).is_err());
    }

    #[test]
    fn test_stars_clamped_to_scale() {
        let mut roster = Roster::from_json_str(ROSTER_JSON).unwrap();
        roster.testimonials[0].rating = 9;
        assert_eq!(roster.testimonials[0].stars(), 5);
    }
}
