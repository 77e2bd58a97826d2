//! Application state: module switching, sidebar, flashes and poll results

use std::time::{Duration, Instant};

use chrono::Local;
use reqwest::Url;

use crate::config::DEFAULT_POLL_SECS;
use crate::core::{Action, Context, Module, NotifyLevel};
use crate::domain::{DashboardSnapshot, WidgetState};
use crate::modules::{Announcements, Billing, Dashboard, Leaves};

/// Slug of the module shown when the URL carries no `module` parameter.
pub const DEFAULT_MODULE: &str = "dashboard";

/// How long a flash message stays fully visible.
pub const FLASH_VISIBLE: Duration = Duration::from_secs(3);
/// How long it lingers, dimmed, before removal.
pub const FLASH_LINGER: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
    Expired,
}

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

impl FlashMessage {
    pub fn new(text: impl Into<String>, level: NotifyLevel) -> Self {
        Self {
            text: text.into(),
            level,
            since: Instant::now(),
        }
    }

    pub fn phase(&self, now: Instant) -> FlashPhase {
        let age = now.saturating_duration_since(self.since);
        if age < FLASH_VISIBLE {
            FlashPhase::Visible
        } else if age < FLASH_VISIBLE + FLASH_LINGER {
            FlashPhase::Fading
        } else {
            FlashPhase::Expired
        }
    }
}

/// One row of the navigation sidebar.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    /// All content sections, constructed up front
    pub modules: Vec<Box<dyn Module>>,
    /// Index of the visible module, if any
    pub active_module: Option<usize>,
    /// Heading of the revealed section
    pub page_title: String,
    /// Canonical dashboard URL; its `module` query parameter tracks
    /// the active section
    pub location: Url,
    pub sidebar_open: bool,
    pub flashes: Vec<FlashMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pub pending_refresh_request: bool,
    poll_failures: u64,
}

impl App {
    pub fn new(location: Url) -> Self {
        let mut ctx = Context::new();
        ctx.server = server_display(&location);
        ctx.poll_secs = DEFAULT_POLL_SECS;

        Self {
            ctx,
            modules: vec![
                Box::new(Dashboard::new()),
                Box::new(Billing::new()),
                Box::new(Leaves::new()),
                Box::new(Announcements::new()),
            ],
            active_module: None,
            page_title: String::new(),
            location,
            sidebar_open: false,
            flashes: Vec::new(),
            help_open: false,
            should_quit: false,
            pending_refresh_request: false,
            poll_failures: 0,
        }
    }

    /// Reveal the module with the given slug, hiding every other one.
    ///
    /// An unknown slug leaves no module visible; the title keeps its
    /// previous value and the stored URL still records the request.
    pub fn switch_module(&mut self, slug: &str) {
        self.active_module = None;
        if let Some(idx) = self.modules.iter().position(|module| module.slug() == slug) {
            self.active_module = Some(idx);
            self.page_title = self.modules[idx].title().to_string();
        }
        self.set_location_module(slug);
    }

    /// Switch by registry position (number-key shortcuts).
    pub fn switch_by_index(&mut self, idx: usize) {
        if let Some(slug) = self.modules.get(idx).map(|module| module.slug()) {
            self.switch_module(slug);
        }
    }

    pub fn active_slug(&self) -> Option<&'static str> {
        self.active_module.map(|idx| self.modules[idx].slug())
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.modules
            .iter()
            .enumerate()
            .map(|(idx, module)| NavItem {
                slug: module.slug(),
                title: module.title(),
                icon: module.icon(),
                active: self.active_module == Some(idx),
            })
            .collect()
    }

    /// Current value of the URL's `module` query parameter.
    pub fn module_param(&self) -> Option<String> {
        self.location
            .query_pairs()
            .find(|(key, _)| key == "module")
            .map(|(_, value)| value.into_owned())
    }

    fn set_location_module(&mut self, slug: &str) {
        let retained: Vec<(String, String)> = self
            .location
            .query_pairs()
            .filter(|(key, _)| key != "module")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        {
            let mut pairs = self.location.query_pairs_mut();
            pairs.clear();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            if slug != DEFAULT_MODULE {
                pairs.append_pair("module", slug);
            }
        }
        // The serializer leaves a bare "?" behind when nothing was written.
        if self.location.query() == Some("") {
            self.location.set_query(None);
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn push_flash(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.flashes.push(FlashMessage::new(text, level));
    }

    pub fn on_tick(&mut self) {
        self.prune_flashes(Instant::now());
    }

    pub fn prune_flashes(&mut self, now: Instant) {
        self.flashes
            .retain(|flash| flash.phase(now) != FlashPhase::Expired);
    }

    /// Apply one decoded poll result; fully replaces the widget state.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.ctx.widgets = Some(WidgetState::from_snapshot(&snapshot));
        self.ctx.snapshot = Some(snapshot);
        self.ctx.last_synced = Some(Local::now());
    }

    /// A failed cycle is logged and skipped; the rendered state stays.
    pub fn apply_poll_failure(&mut self, message: &str) {
        self.poll_failures += 1;
        tracing::warn!(failures = self.poll_failures, "poll cycle skipped: {message}");
    }

    pub fn request_refresh(&mut self) {
        self.pending_refresh_request = true;
        self.push_flash("Refreshing…", NotifyLevel::Info);
    }

    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh_request)
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Switch(slug) => self.switch_module(&slug),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::Refresh => self.request_refresh(),
            Action::Notify(text, level) => self.push_flash(text, level),
            Action::Quit => self.should_quit = true,
        }
    }
}

/// Initial module read from the dashboard URL, default `dashboard`.
pub fn initial_module(location: &Url) -> String {
    location
        .query_pairs()
        .find(|(key, _)| key == "module")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| DEFAULT_MODULE.to_string())
}

fn server_display(location: &Url) -> String {
    let host = location.host_str().unwrap_or("localhost");
    match location.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(url: &str) -> App {
        App::new(Url::parse(url).expect("valid url"))
    }

    #[test]
    fn flash_phases_follow_the_clock() {
        let flash = FlashMessage::new("saved", NotifyLevel::Info);
        let start = flash.since;
        assert_eq!(flash.phase(start), FlashPhase::Visible);
        assert_eq!(
            flash.phase(start + Duration::from_millis(3500)),
            FlashPhase::Fading
        );
        assert_eq!(
            flash.phase(start + Duration::from_millis(4100)),
            FlashPhase::Expired
        );
    }

    #[test]
    fn prune_drops_expired_flashes_only() {
        let mut app = app_at("http://mess.local/");
        app.push_flash("one", NotifyLevel::Info);
        let now = app.flashes[0].since;
        app.prune_flashes(now + Duration::from_secs(1));
        assert_eq!(app.flashes.len(), 1);
        app.prune_flashes(now + Duration::from_secs(5));
        assert!(app.flashes.is_empty());
    }

    #[test]
    fn location_keeps_foreign_query_params() {
        let mut app = app_at("http://mess.local/?theme=dark");
        app.switch_module("billing");
        let query = app.location.query().expect("query");
        assert!(query.contains("theme=dark"));
        assert!(query.contains("module=billing"));

        app.switch_module("dashboard");
        assert_eq!(app.location.query(), Some("theme=dark"));
    }

    #[test]
    fn initial_module_defaults_to_dashboard() {
        let url = Url::parse("http://mess.local/").expect("url");
        assert_eq!(initial_module(&url), "dashboard");
        let url = Url::parse("http://mess.local/?module=leave").expect("url");
        assert_eq!(initial_module(&url), "leave");
    }
}
