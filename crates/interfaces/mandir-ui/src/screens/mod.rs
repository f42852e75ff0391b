pub mod demo_a;
pub mod demo_b;

use eframe::egui;

/// Page section a header link asked to bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Events,
    Donate,
}

/// Scrolls to the cursor when `section` is the pending target and clears it.
pub(crate) fn anchor(ui: &mut egui::Ui, section: ScrollTarget, pending: &mut Option<ScrollTarget>) {
    if *pending == Some(section) {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
        *pending = None;
    }
}
