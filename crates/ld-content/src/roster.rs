//! Record types for the display sections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Appointment availability for a doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    /// Whether the doctor accepts new appointments
    pub available: bool,

    /// Human-readable next open slot, e.g. "Tomorrow 2:00 PM"
    pub next_slot: String,
}

/// A doctor profile shown in the roster section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,

    /// Position held, e.g. "Chief of Cardiology"
    pub title: String,

    pub specialty: String,

    /// Years in practice
    pub experience_years: u32,

    pub education: Vec<String>,

    pub specializations: Vec<String>,

    /// Average patient rating on a 5-point scale
    pub rating: f32,

    pub patients_treated: u32,

    pub bio: String,

    pub awards: Vec<String>,

    pub availability: Availability,

    pub phone: String,

    pub email: String,
}

/// A patient testimonial shown in the spotlight section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,

    pub age: u32,

    /// Treatment the patient received, e.g. "Cardiac Surgery"
    pub condition: String,

    pub quote: String,

    /// Star rating on a 5-point scale
    pub rating: u8,

    pub date: NaiveDate,

    pub department: String,
}

impl Testimonial {
    /// Star count clamped to the 5-star scale
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

/// Full content roster for the display
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub doctors: Vec<Doctor>,
    pub testimonials: Vec<Testimonial>,
}

impl Roster {
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty() && self.testimonials.is_empty()
    }
}
