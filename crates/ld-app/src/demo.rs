//! Built-in roster
//!
//! Used when no roster file is configured, and as the fallback when a
//! configured roster fails to load.

use chrono::NaiveDate;
use ld_content::{Availability, Doctor, Roster, Testimonial};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The shipped roster, mirroring the hospital's current content
pub fn builtin_roster() -> Roster {
    Roster {
        doctors: vec![
            Doctor {
                name: "Dr. Sarah Johnson".to_string(),
                title: "Chief of Cardiology".to_string(),
                specialty: "Cardiology".to_string(),
                experience_years: 15,
                education: vec![
                    "MD - Harvard Medical School".to_string(),
                    "Residency - Johns Hopkins".to_string(),
                ],
                specializations: vec![
                    "Interventional Cardiology".to_string(),
                    "Heart Surgery".to_string(),
                    "Cardiac Imaging".to_string(),
                ],
                rating: 4.9,
                patients_treated: 2500,
                bio: "Dr. Johnson is a renowned cardiologist with expertise in complex cardiac \
                      procedures and minimally invasive heart surgery."
                    .to_string(),
                awards: vec![
                    "Best Doctor Award 2023".to_string(),
                    "Excellence in Patient Care".to_string(),
                ],
                availability: Availability {
                    available: true,
                    next_slot: "Tomorrow 2:00 PM".to_string(),
                },
                phone: "(555) 123-4567".to_string(),
                email: "sarah.johnson@stmarys.com".to_string(),
            },
            Doctor {
                name: "Dr. Michael Chen".to_string(),
                title: "Head of Neurosurgery".to_string(),
                specialty: "Neurology".to_string(),
                experience_years: 12,
                education: vec![
                    "MD - Stanford University".to_string(),
                    "Fellowship - Mayo Clinic".to_string(),
                ],
                specializations: vec![
                    "Brain Surgery".to_string(),
                    "Spine Surgery".to_string(),
                    "Stroke Treatment".to_string(),
                ],
                rating: 4.8,
                patients_treated: 1800,
                bio: "Dr. Chen specializes in complex neurosurgical procedures and has pioneered \
                      several minimally invasive techniques."
                    .to_string(),
                awards: vec![
                    "Neurosurgeon of the Year".to_string(),
                    "Innovation in Medicine Award".to_string(),
                ],
                availability: Availability {
                    available: true,
                    next_slot: "Friday 10:00 AM".to_string(),
                },
                phone: "(555) 234-5678".to_string(),
                email: "michael.chen@stmarys.com".to_string(),
            },
            Doctor {
                name: "Dr. Emily Rodriguez".to_string(),
                title: "Pediatric Specialist".to_string(),
                specialty: "Pediatrics".to_string(),
                experience_years: 10,
                education: vec![
                    "MD - UCLA".to_string(),
                    "Pediatric Residency - Children's Hospital".to_string(),
                ],
                specializations: vec![
                    "Child Development".to_string(),
                    "Pediatric Emergency".to_string(),
                    "Adolescent Medicine".to_string(),
                ],
                rating: 4.9,
                patients_treated: 3200,
                bio: "Dr. Rodriguez is passionate about providing comprehensive care for children \
                      and adolescents in a comfortable environment."
                    .to_string(),
                awards: vec![
                    "Pediatrician of the Year".to_string(),
                    "Community Service Award".to_string(),
                ],
                availability: Availability {
                    available: false,
                    next_slot: "Next week".to_string(),
                },
                phone: "(555) 345-6789".to_string(),
                email: "emily.rodriguez@stmarys.com".to_string(),
            },
            Doctor {
                name: "Dr. Robert Kim".to_string(),
                title: "Orthopedic Surgeon".to_string(),
                specialty: "Orthopedics".to_string(),
                experience_years: 18,
                education: vec![
                    "MD - Johns Hopkins".to_string(),
                    "Fellowship - Hospital for Special Surgery".to_string(),
                ],
                specializations: vec![
                    "Joint Replacement".to_string(),
                    "Sports Medicine".to_string(),
                    "Trauma Surgery".to_string(),
                ],
                rating: 4.7,
                patients_treated: 2100,
                bio: "Dr. Kim is an expert in joint replacement surgery and sports medicine, \
                      helping patients return to active lifestyles."
                    .to_string(),
                awards: vec![
                    "Excellence in Surgery".to_string(),
                    "Patient Choice Award".to_string(),
                ],
                availability: Availability {
                    available: true,
                    next_slot: "Thursday 3:30 PM".to_string(),
                },
                phone: "(555) 456-7890".to_string(),
                email: "robert.kim@stmarys.com".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "Sarah Mitchell".to_string(),
                age: 45,
                condition: "Cardiac Surgery".to_string(),
                quote: "The cardiac team at St. Mary's saved my life. From the initial \
                        consultation to post-surgery care, every staff member was professional, \
                        caring, and highly skilled. I couldn't have asked for better treatment."
                    .to_string(),
                rating: 5,
                date: date(2023, 12, 15),
                department: "Cardiology".to_string(),
            },
            Testimonial {
                name: "Robert Chen".to_string(),
                age: 38,
                condition: "Orthopedic Surgery".to_string(),
                quote: "After my sports injury, I thought my running days were over. Thanks to \
                        Dr. Kim and the orthopedic team, I'm back to competing in marathons. The \
                        rehabilitation program was exceptional."
                    .to_string(),
                rating: 5,
                date: date(2023, 11, 28),
                department: "Orthopedics".to_string(),
            },
            Testimonial {
                name: "Maria Rodriguez".to_string(),
                age: 32,
                condition: "Pediatric Care".to_string(),
                quote: "Dr. Rodriguez and her team made my daughter's hospital stay as \
                        comfortable as possible. They explained everything clearly and treated \
                        her with such kindness. We felt truly cared for."
                    .to_string(),
                rating: 5,
                date: date(2023, 12, 2),
                department: "Pediatrics".to_string(),
            },
            Testimonial {
                name: "James Wilson".to_string(),
                age: 67,
                condition: "Neurology Treatment".to_string(),
                quote: "The neurology department provided outstanding care during my stroke \
                        recovery. The staff's expertise and dedication helped me regain my \
                        independence. I'm forever grateful."
                    .to_string(),
                rating: 5,
                date: date(2023, 10, 20),
                department: "Neurology".to_string(),
            },
            Testimonial {
                name: "Emily Johnson".to_string(),
                age: 29,
                condition: "Emergency Care".to_string(),
                quote: "The emergency department staff were incredible during a scary situation. \
                        They were fast, professional, and kept me informed every step of the way. \
                        True heroes."
                    .to_string(),
                rating: 5,
                date: date(2023, 12, 8),
                department: "Emergency".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_is_populated() {
        let roster = builtin_roster();
        assert_eq!(roster.doctors.len(), 4);
        assert_eq!(roster.testimonials.len(), 5);
        assert!(roster.testimonials.iter().all(|t| t.stars() <= 5));
    }
}
