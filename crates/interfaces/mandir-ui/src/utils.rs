use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Saffron fill, used for Donate.
    Primary,
    /// Maroon fill, used for Book.
    Maroon,
    Ghost,
}

pub fn eyebrow(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .color(COL_MAROON)
            .extra_letter_spacing(1.5)
            .strong(),
    );
}

pub fn section_title(ui: &mut egui::Ui, eyebrow_text: &str, title: &str, desc: &str) {
    eyebrow(ui, eyebrow_text);
    ui.label(
        egui::RichText::new(title)
            .size(24.0)
            .strong()
            .color(COL_MAROON),
    );
    ui.label(egui::RichText::new(desc).color(COL_TEXT_DIM));
}

pub fn cta_button(ui: &mut egui::Ui, label: &str, variant: ButtonVariant) -> egui::Response {
    let (fill, text_col) = match variant {
        ButtonVariant::Primary => (COL_SAFFRON, COL_CHARCOAL),
        ButtonVariant::Maroon => (COL_MAROON, COL_WHITE),
        ButtonVariant::Ghost => (Color32::TRANSPARENT, COL_MAROON),
    };

    let btn = egui::Button::new(egui::RichText::new(label).strong().color(text_col))
        .min_size(egui::vec2(96.0, 30.0))
        .corner_radius(14.0)
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, COL_STROKE));

    ui.add(btn)
}

/// Rounded sand-toned surface used for cards.
pub fn surface(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, COL_STROKE))
        .corner_radius(18.0)
        .inner_margin(egui::Margin::same(14))
}
