//! Shared prev/dots/next paging strip

use egui::{Button, Color32, RichText, Sense, Ui, Vec2};

use crate::icons;

/// Action requested by a paging strip interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAction {
    Prev,
    Next,
    Select(usize),
}

/// Render a prev/dots/next strip over `bound` positions with `current` lit
///
/// Returns the requested action, if any. One dot is drawn per position, so
/// a `Select` index is always within the bound. The arrows are disabled
/// when `bound <= 1`, matching the section behavior on a single page.
pub fn paging_strip(
    ui: &mut Ui,
    current: usize,
    bound: usize,
    accent: Color32,
) -> Option<StripAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.style_mut().spacing.item_spacing = Vec2::new(6.0, 0.0);
        let enabled = bound > 1;

        let prev = ui.add_enabled(
            enabled,
            Button::new(RichText::new(icons::PREV).size(14.0)).min_size(Vec2::new(28.0, 28.0)),
        );
        if prev.on_hover_text("Previous").clicked() {
            action = Some(StripAction::Prev);
        }

        for index in 0..bound {
            let (rect, response) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::click());
            let lit = index == current;
            let color = if lit {
                accent
            } else if response.hovered() {
                Color32::from_gray(150)
            } else {
                Color32::from_gray(200)
            };
            let radius = if lit { 5.0 } else { 4.0 };
            ui.painter().circle_filled(rect.center(), radius, color);
            if response.clicked() {
                action = Some(StripAction::Select(index));
            }
        }

        let next = ui.add_enabled(
            enabled,
            Button::new(RichText::new(icons::NEXT).size(14.0)).min_size(Vec2::new(28.0, 28.0)),
        );
        if next.on_hover_text("Next").clicked() {
            action = Some(StripAction::Next);
        }
    });

    action
}
