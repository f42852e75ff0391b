use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Temple palette
pub const COL_SAFFRON: Color32 = Color32::from_rgb(242, 140, 40);
pub const COL_MAROON: Color32 = Color32::from_rgb(139, 30, 30);
pub const COL_MAROON_SOFT: Color32 = Color32::from_rgb(179, 58, 58);
pub const COL_WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const COL_SAND: Color32 = Color32::from_rgb(255, 244, 230);
pub const COL_CHARCOAL: Color32 = Color32::from_rgb(43, 43, 43);
pub const COL_GOLD: Color32 = Color32::from_rgb(212, 160, 23);
pub const COL_STROKE: Color32 = Color32::from_rgba_premultiplied(22, 5, 5, 41);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(110, 100, 96);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.window_fill = COL_WHITE;
    visuals.panel_fill = COL_WHITE;
    visuals.override_text_color = Some(COL_CHARCOAL);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_STROKE);
    visuals.widgets.inactive.bg_fill = COL_SAND;
    visuals.widgets.inactive.weak_bg_fill = COL_SAND;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, COL_STROKE);

    visuals.widgets.hovered.bg_fill = COL_SAFFRON.linear_multiply(0.2);
    visuals.widgets.hovered.weak_bg_fill = COL_SAFFRON.linear_multiply(0.2);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_MAROON);

    visuals.widgets.active.bg_fill = COL_SAFFRON;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_CHARCOAL);

    visuals.selection.bg_fill = COL_SAFFRON.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, COL_MAROON);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}
