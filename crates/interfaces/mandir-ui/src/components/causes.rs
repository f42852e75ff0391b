use crate::components::PageResponse;
use crate::theme::*;
use crate::utils::{cta_button, eyebrow, surface, ButtonVariant};
use eframe::egui;
use mandir_app_core::viewmodel::DonationCauseVm;

pub fn grid(ui: &mut egui::Ui, causes: &[DonationCauseVm], resp: &mut PageResponse) {
    if causes.is_empty() {
        return;
    }
    ui.columns(causes.len(), |cols| {
        for (ui, cause) in cols.iter_mut().zip(causes) {
            surface(COL_SAND).show(ui, |ui| {
                ui.set_width(ui.available_width());
                eyebrow(ui, "Seva");
                ui.label(
                    egui::RichText::new(&cause.title)
                        .size(17.0)
                        .strong()
                        .color(COL_MAROON),
                );
                ui.label(egui::RichText::new(&cause.description).size(12.0));
                ui.add_space(4.0);
                let donate = cta_button(ui, "Donate", ButtonVariant::Primary);
                let donate = match &cause.url {
                    Some(url) => donate.on_hover_text(url),
                    None => donate,
                };
                if donate.clicked() {
                    resp.donate = Some(cause.key.clone());
                }
            });
        }
    });

    ui.add_space(8.0);
    surface(COL_SAND).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Trust & transparency")
                .strong()
                .color(COL_MAROON),
        );
        ui.label(
            egui::RichText::new(
                "Charitable registration, receipts, how funds are used, and annual reports.",
            )
            .size(12.0)
            .color(COL_TEXT_DIM),
        );
    });
}
