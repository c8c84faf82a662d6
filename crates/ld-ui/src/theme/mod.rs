use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Clinical Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the display theme (light, clinical palette)
pub fn apply_theme(ctx: &Context, _theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    let bg_color = Color32::from_rgb(248, 250, 252); // Page background
    let panel_bg = Color32::WHITE; // Card/panel background
    let widget_bg = Color32::from_rgb(241, 245, 249); // Widget background
    let hover_color = Color32::from_rgb(226, 232, 240); // Hover state
    let active_color = Color32::from_rgb(203, 213, 225); // Active/pressed state
    let accent = accent_color();
    let text_color = Color32::from_rgb(30, 41, 59); // Primary text

    // Window and panel styling
    visuals.window_fill = panel_bg;
    visuals.panel_fill = bg_color;
    visuals.extreme_bg_color = panel_bg;
    visuals.faint_bg_color = widget_bg;

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(226, 232, 240));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(203, 213, 225));
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    // Selection and highlighting
    visuals.selection.bg_fill = accent.linear_multiply(0.2);
    visuals.selection.stroke = Stroke::new(1.0, accent);

    visuals.hyperlink_color = accent;

    // Shadows kept soft on the light background
    visuals.window_shadow.extrusion = 6.0;
    visuals.popup_shadow.extrusion = 3.0;

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.indent = 18.0;

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(13, 125, 168)
}

/// Get the success color for the theme
pub fn success_color() -> Color32 {
    Color32::from_rgb(22, 163, 74)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(220, 38, 38)
}

/// Get the star-rating color for the theme
pub fn star_color() -> Color32 {
    Color32::from_rgb(234, 179, 8)
}

/// Get the secondary text color for the theme
pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(100, 116, 139)
}
