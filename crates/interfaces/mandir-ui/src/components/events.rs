use crate::components::PageResponse;
use crate::theme::*;
use crate::utils::{cta_button, eyebrow, surface, ButtonVariant};
use eframe::egui;
use mandir_app_core::viewmodel::EventCardVm;

fn day_badge(ui: &mut egui::Ui, day: &str) {
    surface(COL_SAND).show(ui, |ui| {
        ui.set_min_width(40.0);
        ui.label(
            egui::RichText::new(day)
                .strong()
                .color(COL_MAROON),
        );
    });
}

/// One bookable row per event.
pub fn list(ui: &mut egui::Ui, events: &[EventCardVm], resp: &mut PageResponse) {
    for ev in events {
        ui.push_id(&ev.id, |ui| {
            surface(COL_WHITE).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    day_badge(ui, &ev.day);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&ev.title)
                                .size(16.0)
                                .strong()
                                .color(COL_MAROON),
                        );
                        ui.label(
                            egui::RichText::new(format!("{} · {}", ev.date, ev.schedule))
                                .size(12.0),
                        );
                        ui.label(
                            egui::RichText::new(&ev.highlight)
                                .size(12.0)
                                .color(COL_TEXT_DIM),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if cta_button(ui, "Book", ButtonVariant::Maroon).clicked() {
                            resp.book = Some(ev.id.clone());
                        }
                        if ev.featured {
                            ui.label(
                                egui::RichText::new("FEATURED")
                                    .size(10.0)
                                    .strong()
                                    .color(COL_GOLD),
                            );
                        }
                    });
                });
            });
        });
    }
}

/// Highlighted card for the default booking target.
pub fn featured_card(ui: &mut egui::Ui, ev: &EventCardVm, resp: &mut PageResponse) {
    surface(COL_SAND).show(ui, |ui| {
        ui.set_width(ui.available_width());
        eyebrow(ui, "Featured this week");
        ui.label(
            egui::RichText::new(&ev.title)
                .size(20.0)
                .strong()
                .color(COL_MAROON),
        );
        ui.label(format!("{} · {}", ev.date, ev.schedule));
        ui.label(egui::RichText::new(&ev.highlight).color(COL_TEXT_DIM));
        ui.add_space(6.0);
        if cta_button(ui, "Book this event", ButtonVariant::Maroon).clicked() {
            resp.book_default = true;
        }
    });
}
