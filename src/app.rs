use eframe::egui;

use crate::api::ApiClient;
use crate::config::Config;
use crate::movie::Tab;
use crate::notify::Notice;
use crate::state::{DetailRequest, DetailState, ListState, StateEvent};
use crate::ui;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Which view fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail,
}

/// Main application state
pub struct MarqueeApp {
    /// Application configuration
    pub config: Config,
    /// Catalog API client
    pub client: ApiClient,
    /// UI theme
    pub theme: Theme,
    /// Current view
    pub screen: Screen,
    /// Currently selected tab
    pub active_tab: Tab,
    /// List view state for the active tab
    pub list: ListState,
    /// Detail view state, present while a detail view is open
    pub detail: Option<DetailState>,
    /// Toast shown after a favourites mutation
    pub notice: Option<Notice>,
    /// Status message for the status bar
    status_message: String,
    /// Whether the theme has been applied to the context yet
    theme_applied: bool,
}

impl MarqueeApp {
    /// Create a new application instance and start the first tab's fetch.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, client: ApiClient) -> Self {
        let active_tab = Tab::default();
        let list = ListState::open(active_tab, &client);

        Self {
            config,
            client,
            theme: Theme::default(),
            screen: Screen::default(),
            active_tab,
            list,
            detail: None,
            notice: None,
            status_message: "Ready".to_string(),
            theme_applied: false,
        }
    }

    /// Switch to another tab, mounting a fresh list view for it.
    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!("Switching tab to {}", tab.collection());
        self.active_tab = tab;
        self.list = ListState::open(tab, &self.client);
    }

    /// Navigate to the detail view for the given target.
    pub fn open_details(&mut self, request: DetailRequest) {
        match self.detail.as_mut() {
            Some(detail) => detail.navigate(&self.client, request),
            None => self.detail = Some(DetailState::open(&self.client, request)),
        }
        self.screen = Screen::Detail;
    }

    /// Leave the detail view, discarding its state.
    pub fn close_details(&mut self) {
        self.detail = None;
        self.screen = Screen::List;
    }

    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::Notify(notice) => self.notice = Some(notice),
                StateEvent::StatusMessage(msg) => self.status_message = msg,
            }
        }
    }

    /// Drop the toast once its display window has elapsed, keeping frames
    /// coming while it is up.
    fn expire_notice(&mut self, ctx: &egui::Context) {
        if let Some(ref notice) = self.notice {
            if notice.is_expired() {
                self.notice = None;
            } else {
                ctx.request_repaint_after(notice.remaining());
            }
        }
    }
}

impl eframe::App for MarqueeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        // Poll async tasks
        let mut events = self.list.poll(ctx);
        if let Some(ref mut detail) = self.detail {
            events.extend(detail.poll(ctx));
        }
        self.handle_events(events);
        self.expire_notice(ctx);

        // Tab bar on the list screen only; the detail view has its own
        // back link
        if self.screen == Screen::List {
            let theme = self.theme.clone();
            egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
                if let Some(tab) = components::render_tab_bar(ui, &theme, self.active_tab) {
                    self.switch_tab(tab);
                }
            });
        }

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::List => ui::render_list_view(self, ui),
            Screen::Detail => ui::render_detail_view(self, ui),
        });

        let theme = self.theme.clone();
        components::render_toast(ctx, &theme, &mut self.notice);
    }
}
