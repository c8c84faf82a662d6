//! User interface panels for the lobby display
//!
//! This crate provides the egui-based section panels, the shared paging
//! controls, and the display theme.

pub mod controls;
pub mod doctors_panel;
pub mod testimonials_panel;
pub mod theme;

// Re-export commonly used types
pub use controls::{paging_strip, StripAction};
pub use doctors_panel::DoctorsPanel;
pub use testimonials_panel::TestimonialsPanel;
pub use theme::{apply_theme, Theme};

/// Section heading in the display's house style
pub fn section_header(ui: &mut egui::Ui, subtitle: &str, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(subtitle)
                .size(12.0)
                .strong()
                .color(theme::accent_color()),
        );
        ui.label(egui::RichText::new(title).size(22.0).strong());
    });
    ui.add_space(12.0);
}

/// Common icon definitions
pub mod icons {
    pub const PLAY: &str = "▶";
    pub const PAUSE: &str = "⏸";
    pub const PREV: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const STAR: &str = "★";
    pub const STAR_OUTLINE: &str = "☆";
    pub const QUOTE: &str = "❝";
    pub const CLOCK: &str = "⏱";
}
