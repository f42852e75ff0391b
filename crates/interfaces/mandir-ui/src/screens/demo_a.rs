use super::{anchor, ScrollTarget};
use crate::components::{causes, events, PageResponse};
use crate::theme::*;
use crate::utils::{cta_button, eyebrow, section_title, surface, ButtonVariant};
use eframe::egui;
use mandir_app_core::viewmodel::{donation_causes_vm, events_vm, featured_event_vm};
use mandir_app_core::AppState;

fn hero(ui: &mut egui::Ui, resp: &mut PageResponse) {
    egui::Frame::new()
        .fill(COL_MAROON)
        .corner_radius(22.0)
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("WELCOME")
                    .size(11.0)
                    .strong()
                    .color(COL_GOLD),
            );
            ui.label(
                egui::RichText::new(mandir_config::TEMPLE_NAME)
                    .size(32.0)
                    .strong()
                    .color(COL_WHITE),
            );
            ui.label(
                egui::RichText::new(
                    "Worship, learning, and seva — with clear actions for events, bookings, and donations.",
                )
                .color(COL_SAND),
            );
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if cta_button(ui, "Book an event", ButtonVariant::Primary).clicked() {
                    resp.book_default = true;
                }
            });
        });
}

/// Evolutionary refresh: events, booking and donations share the top of the page.
pub fn draw(
    ui: &mut egui::Ui,
    state: &AppState,
    resp: &mut PageResponse,
    pending: &mut Option<ScrollTarget>,
) {
    hero(ui, resp);
    ui.add_space(18.0);

    anchor(ui, ScrollTarget::Events, pending);
    section_title(
        ui,
        "Priority 1 · Events",
        "Upcoming events",
        "Make the next few events impossible to miss — and one-click bookable.",
    );
    ui.add_space(6.0);
    ui.columns(2, |cols| {
        eyebrow(&mut cols[0], "This week");
        events::list(&mut cols[0], &events_vm(), resp);

        surface(COL_SAND).show(&mut cols[1], |ui| {
            ui.set_width(ui.available_width());
            eyebrow(ui, "Priority 2 · Book");
            ui.label(
                egui::RichText::new("Book in seconds")
                    .size(18.0)
                    .strong()
                    .color(COL_MAROON),
            );
            ui.label("Pick an event → name/email → confirm.");
            if cta_button(ui, "Book next event →", ButtonVariant::Maroon).clicked() {
                resp.book_default = true;
            }
        });
        cols[1].add_space(8.0);
        events::featured_card(&mut cols[1], &featured_event_vm(), resp);
    });

    ui.add_space(18.0);
    anchor(ui, ScrollTarget::Donate, pending);
    section_title(
        ui,
        "Priority 3 · Donate",
        "Support a seva",
        "Donation is always one click away and uses simple, familiar amount choices.",
    );
    ui.add_space(6.0);
    causes::grid(ui, &donation_causes_vm(state), resp);
}
