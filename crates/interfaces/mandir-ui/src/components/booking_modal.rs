use crate::theme::*;
use crate::utils::{cta_button, eyebrow, ButtonVariant};
use eframe::egui;
use mandir_app_core::viewmodel::BookingDialogVm;
use mandir_core::{DismissReason, DraftField};

#[derive(Debug, Default)]
pub struct BookingModalResponse {
    pub edits: Vec<DraftField>,
    pub cancel: bool,
    pub confirm: bool,
    pub dismissed: Option<DismissReason>,
}

fn labelled_text(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    hint: &str,
    to_field: impl FnOnce(String) -> DraftField,
    edits: &mut Vec<DraftField>,
) {
    ui.vertical(|ui| {
        eyebrow(ui, label);
        let mut buf = value.to_string();
        let changed = ui
            .add(
                egui::TextEdit::singleline(&mut buf)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            )
            .changed();
        if changed {
            edits.push(to_field(buf));
        }
    });
}

pub fn show(ctx: &egui::Context, vm: &BookingDialogVm) -> BookingModalResponse {
    let mut resp = BookingModalResponse::default();

    let modal = egui::Modal::new(egui::Id::new("booking-modal")).show(ctx, |ui| {
        ui.set_width(520.0);

        eyebrow(ui, "Book an event");
        ui.label(
            egui::RichText::new(&vm.title)
                .size(20.0)
                .strong()
                .color(COL_MAROON),
        );
        ui.label(egui::RichText::new(&vm.schedule).color(COL_TEXT_DIM));
        ui.separator();

        egui::Grid::new("booking-fields")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                labelled_text(
                    ui,
                    "Full name",
                    &vm.attendee_name,
                    "Your name",
                    DraftField::AttendeeName,
                    &mut resp.edits,
                );
                ui.vertical(|ui| {
                    eyebrow(ui, "Number of attendees");
                    egui::ComboBox::from_id_salt("party-size")
                        .selected_text(vm.party_size.to_string())
                        .show_ui(ui, |ui| {
                            for &n in &vm.party_size_options {
                                if ui
                                    .selectable_label(n == vm.party_size, n.to_string())
                                    .clicked()
                                {
                                    resp.edits.push(DraftField::PartySize(u32::from(n)));
                                }
                            }
                        });
                });
                ui.end_row();

                labelled_text(
                    ui,
                    "Email",
                    &vm.attendee_email,
                    "you@email.com",
                    DraftField::AttendeeEmail,
                    &mut resp.edits,
                );
                labelled_text(
                    ui,
                    "Phone (optional)",
                    &vm.attendee_phone,
                    "(###) ###-####",
                    DraftField::AttendeePhone,
                    &mut resp.edits,
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        egui::Frame::new()
            .fill(COL_SAND)
            .corner_radius(14.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        eyebrow(ui, "Optional: add a donation");
                        ui.label(
                            egui::RichText::new("Helps support the temple and seva.").size(12.0),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut include = vm.include_donation;
                        if ui.checkbox(&mut include, "Add donation").changed() {
                            resp.edits.push(DraftField::IncludeDonation(include));
                        }
                    });
                });

                if !vm.donation_options.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for opt in &vm.donation_options {
                            if ui.selectable_label(opt.selected, &opt.label).clicked() {
                                resp.edits.push(DraftField::DonationAmount(opt.amount));
                            }
                        }
                    });
                }
            });

        ui.add_space(8.0);
        ui.label(egui::RichText::new(&vm.summary).strong());
        ui.horizontal(|ui| {
            if cta_button(ui, "Cancel", ButtonVariant::Ghost).clicked() {
                resp.cancel = true;
            }
            if cta_button(ui, "Confirm booking →", ButtonVariant::Primary).clicked() {
                resp.confirm = true;
            }
        });
        ui.label(
            egui::RichText::new("Demo only — connect to the real booking engine later.")
                .size(11.0)
                .color(COL_TEXT_DIM),
        );
    });

    if modal.should_close() {
        resp.dismissed = Some(if modal.backdrop_response.clicked() {
            DismissReason::Backdrop
        } else {
            DismissReason::CancelKey
        });
    }

    resp
}
