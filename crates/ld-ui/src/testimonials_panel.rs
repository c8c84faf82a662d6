//! Patient testimonials section
//!
//! Spotlights one testimonial at a time. The slideshow advances on a timer
//! until the viewer navigates manually; the control line underneath flips
//! autoplay back on.

use std::sync::Arc;

use egui::{Frame, Margin, RichText, Rounding, Stroke, Ui};

use ld_content::Testimonial;
use ld_core::RotatingSlideshow;

use crate::controls::{paging_strip, StripAction};
use crate::{icons, section_header, theme};

/// Testimonials section panel
pub struct TestimonialsPanel {
    slideshow: Arc<RotatingSlideshow<Testimonial>>,
}

impl TestimonialsPanel {
    /// Create a new testimonials panel over the shared slideshow
    pub fn new(slideshow: Arc<RotatingSlideshow<Testimonial>>) -> Self {
        Self { slideshow }
    }

    /// Show the testimonials section
    pub fn ui(&mut self, ui: &mut Ui) {
        section_header(ui, "Patient Stories", "What Our Patients Say");

        let Some(current) = self.slideshow.current() else {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No testimonials to display")
                        .italics()
                        .color(theme::muted_text_color()),
                );
            });
            return;
        };

        testimonial_card(ui, current);
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let action = paging_strip(
                ui,
                self.slideshow.cursor(),
                self.slideshow.len(),
                theme::accent_color(),
            );
            match action {
                Some(StripAction::Prev) => self.slideshow.prev(),
                Some(StripAction::Next) => self.slideshow.next(),
                Some(StripAction::Select(index)) => {
                    let _ = self.slideshow.select(index);
                }
                None => {}
            }

            ui.add_space(4.0);
            let (icon, label) = if self.slideshow.is_playing() {
                (icons::PAUSE, "Pause auto-play")
            } else {
                (icons::PLAY, "Resume auto-play")
            };
            if ui
                .button(RichText::new(format!("{} {}", icon, label)).size(12.0))
                .clicked()
            {
                self.slideshow.toggle_autoplay();
            }
        });
    }
}

/// Render the spotlight card for one testimonial
fn testimonial_card(ui: &mut Ui, testimonial: &Testimonial) {
    Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(Rounding::same(10.0))
        .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .inner_margin(Margin::symmetric(28.0, 20.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(icons::QUOTE)
                        .size(28.0)
                        .color(theme::accent_color()),
                );

                ui.horizontal_top(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 45.0);
                    for index in 0..5 {
                        let (icon, color) = if index < testimonial.stars() {
                            (icons::STAR, theme::star_color())
                        } else {
                            (icons::STAR_OUTLINE, theme::muted_text_color())
                        };
                        ui.label(RichText::new(icon).size(15.0).color(color));
                    }
                });

                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("\u{201c}{}\u{201d}", testimonial.quote))
                        .size(16.0)
                        .italics(),
                );
                ui.add_space(10.0);

                ui.label(
                    RichText::new(format!("{}, {}", testimonial.name, testimonial.age))
                        .size(14.0)
                        .strong(),
                );
                ui.label(
                    RichText::new(&testimonial.condition)
                        .size(12.0)
                        .color(theme::accent_color()),
                );
                ui.horizontal_top(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 80.0);
                    ui.label(
                        RichText::new(testimonial.date.format("%B %-d, %Y").to_string())
                            .size(11.0)
                            .color(theme::muted_text_color()),
                    );
                    ui.label(
                        RichText::new(&testimonial.department)
                            .size(11.0)
                            .color(theme::accent_color()),
                    );
                });
            });
        });
}
