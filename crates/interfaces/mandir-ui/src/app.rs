use crate::components::{booking_modal, footer, header, PageResponse};
use crate::screens::{demo_a, demo_b, ScrollTarget};
use crate::theme::*;
use crate::DesktopKernel;
use eframe::egui;
use egui_taffy::taffy::prelude::percent;
use egui_taffy::{taffy, tui};

use mandir_app_core::viewmodel::{self, NavTarget};
use mandir_app_core::{AppCommand, BootState, HomepageVariant};

pub struct MandirUiApp {
    kernel: DesktopKernel,
    scroll_target: Option<ScrollTarget>,
}

impl MandirUiApp {
    pub fn new(kernel: DesktopKernel) -> Self {
        Self {
            kernel,
            scroll_target: None,
        }
    }

    fn banner(&mut self, ui: &mut egui::Ui) {
        let (banner, notice, error) = self.kernel.store.with_state(|s| {
            (
                viewmodel::variant_banner_vm(s),
                viewmodel::confirmation_notice(s),
                s.error.clone(),
            )
        });

        egui::Frame::new()
            .fill(COL_SAND)
            .corner_radius(14.0)
            .inner_margin(egui::Margin::symmetric(14, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(banner.heading)
                            .strong()
                            .color(COL_MAROON),
                    );
                    ui.label(banner.text);
                });
            });

        if let Some(notice) = notice {
            ui.label(egui::RichText::new(notice).strong().color(COL_MAROON_SOFT));
        }

        if let Some(err) = error {
            ui.horizontal(|ui| {
                ui.colored_label(COL_MAROON, format!("Error: {err}"));
                if ui.small_button("Dismiss").clicked() {
                    self.kernel.dispatch(AppCommand::DismissError);
                }
            });
        }
    }

    fn apply_page_response(&mut self, ctx: &egui::Context, resp: PageResponse) {
        if let Some(id) = resp.book {
            self.kernel.dispatch(AppCommand::OpenBooking(id));
        } else if resp.book_default {
            self.kernel.dispatch(AppCommand::OpenDefaultBooking);
        }
        if let Some(cause_key) = resp.donate {
            if let Some(url) = self.kernel.request_donation(&cause_key) {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
        }
    }
}

impl eframe::App for MandirUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();

        let (boot, variant) = self
            .kernel
            .store
            .with_state(|s| (s.boot.clone(), s.variant));

        egui::TopBottomPanel::top("header")
            .exact_height(64.0)
            .show(ctx, |ui| {
                let nav = viewmodel::nav_items();
                let mut resp = header::HeaderResponse::default();
                tui(ui, ui.id().with("header"))
                    .reserve_available_space()
                    .style(taffy::Style {
                        size: percent(1.),
                        ..Default::default()
                    })
                    .show(|tui| {
                        resp = header::draw(tui, variant, boot != BootState::Loading, &nav);
                    });

                if let Some(v) = resp.variant_selected {
                    self.kernel.dispatch(AppCommand::SelectVariant(v));
                }
                match resp.nav {
                    Some(NavTarget::Events) => self.scroll_target = Some(ScrollTarget::Events),
                    Some(NavTarget::Donate) => self.scroll_target = Some(ScrollTarget::Donate),
                    Some(NavTarget::Book) => self.kernel.dispatch(AppCommand::OpenDefaultBooking),
                    Some(NavTarget::Inert) | None => {}
                }
                if resp.book_clicked {
                    self.kernel.dispatch(AppCommand::OpenDefaultBooking);
                }
                if resp.donate_clicked {
                    self.scroll_target = Some(ScrollTarget::Donate);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let BootState::Failed(msg) = &boot {
                ui.colored_label(COL_MAROON, format!("Could not load settings: {msg}"));
            }

            let mut page = PageResponse::default();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.banner(ui);
                    ui.add_space(12.0);

                    let state = self.kernel.store.state();
                    match variant {
                        HomepageVariant::A => {
                            demo_a::draw(ui, &state, &mut page, &mut self.scroll_target)
                        }
                        HomepageVariant::B => {
                            let now = chrono::Local::now().time();
                            demo_b::draw(ui, &state, now, &mut page, &mut self.scroll_target);
                        }
                    }

                    ui.add_space(18.0);
                    footer::draw(ui, &mut page);
                });
            self.apply_page_response(ctx, page);
        });

        let dialog = self.kernel.store.with_state(viewmodel::booking_dialog_vm);
        if let Some(vm) = dialog {
            let resp = booking_modal::show(ctx, &vm);
            for field in resp.edits {
                self.kernel.dispatch(AppCommand::EditBookingField(field));
            }
            if resp.confirm {
                self.kernel.dispatch(AppCommand::ConfirmBooking);
            } else if resp.cancel {
                self.kernel.dispatch(AppCommand::CancelBooking);
            } else if let Some(reason) = resp.dismissed {
                self.kernel.dispatch(AppCommand::DismissBooking(reason));
            }
        }

        if variant == HomepageVariant::B || boot == BootState::Loading {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
