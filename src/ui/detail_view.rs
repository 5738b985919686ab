//! Detail view rendering: one movie's full record.

use eframe::egui::{self, RichText};

use crate::app::MarqueeApp;
use crate::movie::Movie;
use crate::state::LoadingStatus;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Render the movie detail view
pub fn render_detail_view(app: &mut MarqueeApp, ui: &mut egui::Ui) {
    let theme = app.theme.clone();

    if ui.link("< Back to Home").clicked() {
        app.close_details();
        return;
    }
    ui.add_space(8.0);

    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    match &detail.status {
        LoadingStatus::Loading => {
            components::loading_indicator(
                ui,
                &theme,
                "We are fetching the details of the movie. Please wait...",
            );
        }
        LoadingStatus::Failed(msg) => {
            let msg = msg.clone();
            components::error_alert(ui, &theme, &msg);
        }
        LoadingStatus::Loaded(movie) => {
            let movie = movie.clone();
            render_movie(app, ui, &theme, &movie);
        }
    }
}

fn render_movie(app: &MarqueeApp, ui: &mut egui::Ui, theme: &Theme, movie: &Movie) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new(&movie.title).color(theme.text_primary));
            ui.label(
                RichText::new(format!("({})", movie.year))
                    .size(18.0)
                    .color(theme.text_muted),
            );
        });

        if ui.link("Open poster").clicked() {
            let url = app.config.poster_url(&movie.poster);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open poster {}: {}", url, e);
            }
        }

        ui.separator();

        // Optional rows render only when the record carries the field.
        if let Some(rating) = movie.imdb_rating {
            detail_row(ui, theme, "Imdb Rating", &format!("{}/10", rating));
        }
        if let Some(ref rating) = movie.content_rating {
            detail_row(ui, theme, "Content Rating", rating);
        }
        if let Some(rating) = movie.average_rating {
            detail_row(ui, theme, "Average Rating", &rating.to_string());
        }
        if let Some(runtime) = movie.runtime_display() {
            detail_row(ui, theme, "Duration", &runtime);
        }
        if let Some(date) = movie.release_date_display() {
            detail_row(ui, theme, "Release Date", &date);
        }

        ui.separator();

        section(ui, theme, "Genres", |ui| {
            ui.horizontal_wrapped(|ui| {
                for genre in &movie.genres {
                    badge(ui, theme, genre, theme.accent_muted);
                }
            });
        });

        section(ui, theme, "Stars", |ui| {
            ui.horizontal_wrapped(|ui| {
                for actor in &movie.actors {
                    badge(ui, theme, actor, theme.bg_light);
                }
            });
        });

        section(ui, theme, "Storyline", |ui| {
            ui.label(RichText::new(&movie.storyline).color(theme.text_secondary));
        });
    });
}

fn detail_row(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(theme.text_muted));
        ui.label(RichText::new(value).color(theme.text_primary));
    });
}

fn section(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).strong().color(theme.text_primary));
    body(ui);
}

fn badge(ui: &mut egui::Ui, theme: &Theme, text: &str, fill: egui::Color32) {
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.label(RichText::new(text).size(12.0).color(theme.text_primary));
    });
}
