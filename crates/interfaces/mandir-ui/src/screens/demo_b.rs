use super::{anchor, ScrollTarget};
use crate::components::{causes, events, PageResponse};
use crate::theme::*;
use crate::utils::{cta_button, eyebrow, section_title, surface, ButtonVariant};
use chrono::NaiveTime;
use eframe::egui;
use mandir_app_core::viewmodel::{
    donation_causes_vm, events_vm, featured_event_vm, live_status_vm, LiveStatusVm,
};
use mandir_app_core::AppState;
use mandir_config::DONATION_AMOUNTS;

fn live_badge(ui: &mut egui::Ui, status: &LiveStatusVm) {
    let dot = if status.is_open { COL_GOLD } else { COL_MAROON_SOFT };
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("●").color(dot));
        ui.label(egui::RichText::new(status.label).strong());
        ui.label(egui::RichText::new("(demo)").size(11.0).color(COL_TEXT_DIM));
        ui.label(
            egui::RichText::new(format!("Visit hours {}", status.hours))
                .size(12.0)
                .color(COL_TEXT_DIM),
        );
    });
}

fn next_steps(ui: &mut egui::Ui, resp: &mut PageResponse, pending: &mut Option<ScrollTarget>) {
    surface(COL_SAND).show(ui, |ui| {
        ui.set_width(ui.available_width());
        eyebrow(ui, "Your next steps");

        ui.label(egui::RichText::new("1) Upcoming events").strong());
        for ev in events_vm().iter().take(2) {
            ui.push_id(&ev.id, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&ev.day).strong().color(COL_MAROON));
                    ui.label(&ev.title);
                    if cta_button(ui, "Book", ButtonVariant::Maroon).clicked() {
                        resp.book = Some(ev.id.clone());
                    }
                });
            });
        }

        ui.label(egui::RichText::new("then").size(11.0).color(COL_TEXT_DIM));
        ui.label(egui::RichText::new("2) Book in seconds").strong());
        if cta_button(ui, "Book the featured event →", ButtonVariant::Maroon).clicked() {
            resp.book_default = true;
        }

        ui.label(egui::RichText::new("and").size(11.0).color(COL_TEXT_DIM));
        ui.label(egui::RichText::new("3) Support seva").strong());
        ui.horizontal_wrapped(|ui| {
            for amount in DONATION_AMOUNTS {
                if ui.button(format!("Give ${amount}")).clicked() {
                    *pending = Some(ScrollTarget::Donate);
                }
            }
        });
    });
}

/// Live Mandir: a guided Events → Book → Donate flow under a live status strip.
pub fn draw(
    ui: &mut egui::Ui,
    state: &AppState,
    now: NaiveTime,
    resp: &mut PageResponse,
    pending: &mut Option<ScrollTarget>,
) {
    eyebrow(ui, "Live Mandir · Events · Book · Donate");
    ui.add_space(6.0);

    let status = live_status_vm(now);
    let featured = featured_event_vm();
    ui.columns(2, |cols| {
        surface(COL_SAND).show(&mut cols[0], |ui| {
            ui.set_width(ui.available_width());
            live_badge(ui, &status);
            ui.label(
                egui::RichText::new("Live Mandir")
                    .size(30.0)
                    .strong()
                    .color(COL_MAROON),
            );
            ui.label(
                "Designed for the three priorities: promote events, make booking effortless, and increase donations.",
            );
            ui.add_space(8.0);
            events::featured_card(ui, &featured, resp);
        });
        next_steps(&mut cols[1], resp, pending);
    });

    ui.add_space(18.0);
    anchor(ui, ScrollTarget::Events, pending);
    section_title(
        ui,
        "Priority 1 · Events",
        "Upcoming events",
        "Make the next few events unmissable — and bookable from every card.",
    );
    ui.add_space(6.0);
    events::list(ui, &events_vm(), resp);

    ui.add_space(18.0);
    section_title(
        ui,
        "Priority 2 · Book",
        "Book an event (fast)",
        "Pick an event, enter name and email, confirm.",
    );
    ui.horizontal(|ui| {
        for (i, step) in ["Pick an event", "Enter name/email", "Confirm"]
            .iter()
            .enumerate()
        {
            surface(COL_WHITE).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("Step {}", i + 1))
                        .size(11.0)
                        .color(COL_TEXT_DIM),
                );
                ui.label(egui::RichText::new(*step).strong());
            });
        }
    });
    if cta_button(ui, "Book featured", ButtonVariant::Maroon).clicked() {
        resp.book_default = true;
    }

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
