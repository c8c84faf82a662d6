//! Doctors roster section
//!
//! Shows one page of doctor cards at a time with a paging strip above the
//! grid, the way the site presents its medical team.

use std::sync::Arc;

use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use ld_content::Doctor;
use ld_core::PagedCarousel;

use crate::controls::{paging_strip, StripAction};
use crate::{icons, section_header, theme};

/// Doctors section panel
pub struct DoctorsPanel {
    carousel: Arc<PagedCarousel<Doctor>>,
}

impl DoctorsPanel {
    /// Create a new doctors panel over the shared carousel
    pub fn new(carousel: Arc<PagedCarousel<Doctor>>) -> Self {
        Self { carousel }
    }

    /// Show the doctors section
    pub fn ui(&mut self, ui: &mut Ui) {
        section_header(ui, "Our Medical Team", "Meet Our Expert Doctors");

        if self.carousel.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No doctors to display")
                        .italics()
                        .color(theme::muted_text_color()),
                );
            });
            return;
        }

        ui.vertical_centered(|ui| {
            let action = paging_strip(
                ui,
                self.carousel.cursor(),
                self.carousel.page_count(),
                theme::accent_color(),
            );
            match action {
                Some(StripAction::Prev) => self.carousel.prev(),
                Some(StripAction::Next) => self.carousel.next(),
                Some(StripAction::Select(page)) => {
                    let _ = self.carousel.select(page);
                }
                None => {}
            }
        });

        ui.add_space(10.0);

        let visible = self.carousel.visible();
        ui.columns(self.carousel.page_size(), |columns| {
            for (column, doctor) in columns.iter_mut().zip(visible) {
                doctor_card(column, doctor);
            }
        });
    }
}

/// Render a single doctor card
fn doctor_card(ui: &mut Ui, doctor: &Doctor) {
    Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(Rounding::same(8.0))
        .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.label(RichText::new(&doctor.name).size(16.0).strong());
            ui.label(
                RichText::new(&doctor.title)
                    .size(12.0)
                    .color(theme::accent_color()),
            );
            ui.label(
                RichText::new(&doctor.specialty)
                    .size(11.0)
                    .color(theme::muted_text_color()),
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} {:.1}", icons::STAR, doctor.rating))
                        .size(12.0)
                        .color(theme::star_color()),
                );
                ui.label(
                    RichText::new(format!("{} {} yrs", icons::CLOCK, doctor.experience_years))
                        .size(11.0)
                        .color(theme::muted_text_color()),
                );
                let (badge, color) = if doctor.availability.available {
                    ("Available", theme::success_color())
                } else {
                    ("Busy", theme::error_color())
                };
                ui.label(RichText::new(badge).size(11.0).strong().color(color));
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} patients treated", doctor.patients_treated))
                        .size(11.0),
                );
                ui.label(
                    RichText::new(format!("{} awards", doctor.awards.len()))
                        .size(11.0)
                        .color(theme::muted_text_color()),
                );
            });
            ui.separator();

            ui.label(RichText::new(&doctor.bio).size(11.0));

            if doctor.availability.available {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Next available: {}", doctor.availability.next_slot))
                        .size(11.0)
                        .color(theme::success_color()),
                );
            }
        });
}
