use crate::components::PageResponse;
use crate::theme::*;
use eframe::egui;
use mandir_config::{
    CONTACT_EMAIL, CONTACT_PHONE, ORGANIZATION_NAME, STREET_ADDRESS, TEMPLE_NAME,
};

pub fn draw(ui: &mut egui::Ui, resp: &mut PageResponse) {
    egui::Frame::new()
        .fill(COL_MAROON)
        .corner_radius(18.0)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(3, |cols| {
                cols[0].label(
                    egui::RichText::new(format!("{TEMPLE_NAME} • {ORGANIZATION_NAME}"))
                        .strong()
                        .color(COL_WHITE),
                );
                cols[0].label(
                    egui::RichText::new(
                        "Sacred spaces for worship, learning, community, and service.",
                    )
                    .size(12.0)
                    .color(COL_SAND),
                );
                cols[0].label(egui::RichText::new(CONTACT_EMAIL).size(12.0).color(COL_WHITE));
                cols[0].label(egui::RichText::new(CONTACT_PHONE).size(12.0).color(COL_WHITE));

                cols[1].label(egui::RichText::new("Top tasks").strong().color(COL_WHITE));
                cols[1].label(egui::RichText::new("Events · Book · Donate").color(COL_SAND));
                let book = egui::Button::new(
                    egui::RichText::new("Book an event").strong().color(COL_WHITE),
                )
                .fill(COL_MAROON_SOFT)
                .corner_radius(12.0);
                if cols[1].add(book).clicked() {
                    resp.book_default = true;
                }

                cols[2].label(egui::RichText::new("Location").strong().color(COL_WHITE));
                cols[2].label(egui::RichText::new(STREET_ADDRESS).size(12.0).color(COL_SAND));
            });

            ui.separator();
            let year = chrono::Local::now().format("%Y");
            ui.label(
                egui::RichText::new(format!(
                    "© {year} {ORGANIZATION_NAME} (VOV). All rights reserved."
                ))
                .size(11.0)
                .color(COL_SAND),
            );
        });
}
