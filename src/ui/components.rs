//! Shared UI components: tab bar, loading/error/empty states, toast.

use eframe::egui::{self, Align2, RichText, Vec2};

use crate::movie::Tab;
use crate::notify::{Notice, NoticeKind};
use crate::ui::theme::Theme;

/// Render the tab bar. Returns the tab the user clicked, if any.
pub fn render_tab_bar(ui: &mut egui::Ui, theme: &Theme, active: Tab) -> Option<Tab> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            let is_active = tab == active;
            let color = if is_active {
                theme.accent
            } else {
                theme.text_secondary
            };

            let button = egui::Button::new(RichText::new(tab.label()).color(color))
                .min_size(Vec2::new(80.0, 28.0));

            if ui.add(button).clicked() && !is_active {
                clicked = Some(tab);
            }
        }
    });

    clicked
}

/// Spinner with a wait message, centered in the available space.
pub fn loading_indicator(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(theme.text_secondary));
    });
}

/// Inline alert for a failed fetch. The message is the error text verbatim.
pub fn error_alert(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    egui::Frame::group(ui.style())
        .fill(theme.error.gamma_multiply(0.15))
        .show(ui, |ui| {
            ui.colored_label(theme.error, message);
        });
}

/// Shown when a loaded collection is empty. Distinct from the error alert.
pub fn no_data(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            RichText::new("No Data Found!")
                .size(20.0)
                .color(theme.text_muted),
        );
    });
}

/// Render the toast in the top-right corner. Clears the slot when the user
/// closes it; expiry is handled by the app loop.
pub fn render_toast(ctx: &egui::Context, theme: &Theme, notice: &mut Option<Notice>) {
    let Some(current) = notice.clone() else {
        return;
    };

    let header_color = match current.kind {
        NoticeKind::Success => theme.success,
        NoticeKind::Error => theme.error,
    };

    egui::Window::new("notice")
        .title_bar(false)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(current.kind.header())
                        .strong()
                        .color(header_color),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("x").clicked() {
                        *notice = None;
                    }
                });
            });
            ui.label(RichText::new(&current.message).color(theme.text_primary));
        });
}
