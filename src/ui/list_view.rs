//! List view rendering: search box and the movie card grid for one tab.

use eframe::egui::{self, RichText};

use crate::app::MarqueeApp;
use crate::movie::{Movie, Tab};
use crate::state::{DetailRequest, LoadingStatus};
use crate::ui::components;

/// Deferred user action collected while walking the card grid.
enum ListAction {
    OpenDetails(DetailRequest),
    AddFavourite(Movie),
    RemoveFavourite(String),
}

/// Render the list view for the active tab
pub fn render_list_view(app: &mut MarqueeApp, ui: &mut egui::Ui) {
    let theme = app.theme.clone();

    if app.list.status.is_loading() {
        components::loading_indicator(
            ui,
            &theme,
            "We are fetching the movies. Please wait...",
        );
        return;
    }

    if let LoadingStatus::Failed(msg) = &app.list.status {
        let msg = msg.clone();
        components::error_alert(ui, &theme, &msg);
        return;
    }

    let movies = match &app.list.status {
        LoadingStatus::Loaded(movies) => movies.clone(),
        _ => return,
    };

    ui.heading(app.list.tab.heading());
    ui.add_space(8.0);

    // Search box. Every edit fires a remote re-query; stale responses are
    // discarded by the list state's epoch check.
    ui.horizontal(|ui| {
        ui.label(RichText::new("Search:").color(theme.text_muted));
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.list.search_text)
                .hint_text("Search Movie")
                .desired_width(260.0),
        );
        if response.changed() {
            app.list.search(&app.client);
        }
    });
    ui.add_space(12.0);

    if movies.is_empty() {
        components::no_data(ui, &theme);
        return;
    }

    let mut actions = Vec::new();
    let tab = app.list.tab;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for movie in &movies {
                render_movie_card(app, ui, movie, tab, &mut actions);
            }
        });
    });

    for action in actions {
        match action {
            ListAction::OpenDetails(request) => app.open_details(request),
            ListAction::AddFavourite(movie) => {
                app.list.add_to_favourites(&app.client, movie)
            }
            ListAction::RemoveFavourite(id) => {
                app.list.remove_from_favourites(&app.client, id)
            }
        }
    }
}

fn render_movie_card(
    app: &MarqueeApp,
    ui: &mut egui::Ui,
    movie: &Movie,
    tab: Tab,
    actions: &mut Vec<ListAction>,
) {
    let theme = &app.theme;

    egui::Frame::group(ui.style())
        .fill(theme.bg_medium)
        .show(ui, |ui| {
            ui.set_width(180.0);
            ui.vertical(|ui| {
                // Clicking the title navigates to the detail view, carrying
                // the same payload the list got the movie under.
                let title = RichText::new(movie.short_title())
                    .color(theme.text_primary)
                    .strong();
                if ui.link(title).clicked() {
                    actions.push(ListAction::OpenDetails(DetailRequest {
                        tab,
                        id: movie.id.clone(),
                        title: movie.title.clone(),
                        year: movie.year,
                    }));
                }
                ui.label(RichText::new(format!("({})", movie.year)).color(theme.text_muted));

                if ui
                    .link(RichText::new("Poster").color(theme.text_muted).size(11.0))
                    .clicked()
                {
                    let url = app.config.poster_url(&movie.poster);
                    if let Err(e) = open::that(&url) {
                        tracing::warn!("Failed to open poster {}: {}", url, e);
                    }
                }

                ui.add_space(6.0);

                if tab == Tab::Favourites {
                    // Only persisted favourites carry a deletable id.
                    if let Some(ref id) = movie.id {
                        if ui.button("Remove from Favourite").clicked() {
                            actions.push(ListAction::RemoveFavourite(id.clone()));
                        }
                    }
                } else if ui.button("Add to Favourite").clicked() {
                    actions.push(ListAction::AddFavourite(movie.clone()));
                }
            });
        });
}
