use crate::theme::*;
use crate::utils::{cta_button, ButtonVariant};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use mandir_app_core::viewmodel::{NavItemVm, NavTarget};
use mandir_app_core::HomepageVariant;

#[derive(Debug, Default)]
pub struct HeaderResponse {
    pub variant_selected: Option<HomepageVariant>,
    pub nav: Option<NavTarget>,
    pub book_clicked: bool,
    pub donate_clicked: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    current: HomepageVariant,
    can_switch: bool,
    nav: &[NavItemVm],
) -> HeaderResponse {
    let mut resp = HeaderResponse::default();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_WHITE)
            .with_border_color(COL_STROKE)
            .with_border_width(1.0),
        |tui| {
            // Brand
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.style(taffy::Style {
                    padding: length(6.0),
                    ..Default::default()
                })
                .bg_add(
                    TuiBackground::new()
                        .with_background_color(COL_SAND)
                        .with_border_color(COL_STROKE)
                        .with_border_width(1.0),
                    |tui| {
                        tui.label(
                            egui::RichText::new("VOV")
                                .size(13.0)
                                .strong()
                                .color(COL_MAROON),
                        );
                    },
                );
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(mandir_config::ORGANIZATION_NAME)
                            .strong()
                            .color(COL_MAROON),
                    );
                    tui.label(
                        egui::RichText::new(mandir_config::TEMPLE_NAME)
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                });
            });

            // Navigation
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(2.0),
                ..Default::default()
            })
            .add(|tui| {
                for item in nav {
                    let enabled = item.target != NavTarget::Inert;
                    let clicked = tui
                        .ui(|ui| {
                            ui.add_enabled(
                                enabled,
                                egui::Button::new(item.label).frame(false),
                            )
                        })
                        .clicked();
                    if clicked {
                        resp.nav = Some(item.target);
                    }
                }
            });

            // Variant toggle + primary CTAs
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                for v in [HomepageVariant::A, HomepageVariant::B] {
                    if tui
                        .ui(|ui| {
                            ui.add_enabled_ui(can_switch, |ui| {
                                ui.selectable_label(current == v, v.label())
                            })
                            .inner
                        })
                        .clicked()
                    {
                        resp.variant_selected = Some(v);
                    }
                }
                if tui
                    .ui(|ui| cta_button(ui, "Book", ButtonVariant::Maroon))
                    .clicked()
                {
                    resp.book_clicked = true;
                }
                if tui
                    .ui(|ui| cta_button(ui, "Donate", ButtonVariant::Primary))
                    .clicked()
                {
                    resp.donate_clicked = true;
                }
            });
        },
    );

    resp
}
