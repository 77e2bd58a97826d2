use std::fs;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use reqwest::Url;
use tracing_subscriber::EnvFilter;

use messmate::app::{initial_module, App};
use messmate::config;
use messmate::core::NotifyLevel;
use messmate::infrastructure::{HttpMessApi, PollerBridge, PollerCommand, PollerEvent};
use messmate::ui;

const DEFAULT_SERVER: &str = "http://localhost:8000/";

#[derive(Debug, Parser)]
#[command(
    name = "messmate",
    version,
    about = "Messmate: a terminal dashboard for mess residents"
)]
struct Args {
    /// Dashboard URL; may carry a ?module= query
    /// (e.g. https://mess.example.edu/?module=billing)
    url: Option<String>,

    /// Mess server base URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();
    init_logging();

    let location = resolve_location(&args, &config)?;
    let poll_secs = config.poll_secs();
    let api = HttpMessApi::new(&location)?;
    let poller = PollerBridge::new(Box::new(api), Duration::from_secs(poll_secs));

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial = initial_module(&location);
    let mut app = App::new(location);
    app.ctx.poll_secs = poll_secs;
    app.switch_module(&initial);
    app.push_flash(
        format!("Live updates every {poll_secs}s — press ? for help"),
        NotifyLevel::Info,
    );

    let res = run_app(&mut terminal, app, poller);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    poller: PollerBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_poller(&mut app, &poller);
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            let _ = poller.send(PollerCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_poller(app: &mut App, poller: &PollerBridge) {
    for event in poller.poll_events() {
        match event {
            PollerEvent::Snapshot(snapshot) => app.apply_snapshot(snapshot),
            PollerEvent::Failed { message } => app.apply_poll_failure(&message),
        }
    }

    if app.take_refresh_request() {
        let _ = poller.send(PollerCommand::Refresh);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('m') => app.toggle_sidebar(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Esc => {
            if app.sidebar_open {
                app.toggle_sidebar();
            }
        }
        KeyCode::Char(ch @ '1'..='4') => {
            app.switch_by_index((ch as u8 - b'1') as usize);
            if app.ctx.narrow && app.sidebar_open {
                app.toggle_sidebar();
            }
        }
        _ => forward_key(app, key),
    }
}

fn forward_key(app: &mut App, key: KeyEvent) {
    if let Some(idx) = app.active_module {
        let action = app.modules[idx].handle_key(key, &mut app.ctx);
        app.apply_action(action);
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let flash_lines = app.flashes.len().min(3) as u16;
    let areas = ui::layout::areas(size, app.sidebar_open, flash_lines);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, areas, mouse.column, mouse.row)
        }
        MouseEventKind::ScrollUp => handle_scroll(app, areas, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16) {
    if let Some(sidebar) = areas.sidebar {
        if rect_contains(sidebar, col, row) {
            let inner = rect_inner(sidebar);
            if !rect_contains(inner, col, row) {
                return;
            }
            let idx = (row - inner.y) as usize;
            if let Some(item) = app.nav_items().get(idx).copied() {
                app.switch_module(item.slug);
                // Close the overlay after picking a section on small screens.
                if areas.narrow {
                    app.toggle_sidebar();
                }
            }
            return;
        }
        if areas.narrow {
            // Backdrop click closes the overlay.
            app.toggle_sidebar();
            return;
        }
    }

    if areas.narrow && rect_contains(areas.header, col, row) {
        app.toggle_sidebar();
    }
}

fn handle_scroll(app: &mut App, areas: ui::layout::UiAreas, up: bool) {
    // Content does not scroll underneath the open overlay.
    if areas.narrow && app.sidebar_open {
        return;
    }
    let code = if up { KeyCode::Up } else { KeyCode::Down };
    forward_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn resolve_location(args: &Args, config: &config::Config) -> Result<Url> {
    let raw = args
        .url
        .clone()
        .or_else(|| args.server.clone())
        .or_else(|| config.server.clone())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let normalized = normalize_http_url(&raw);
    Url::parse(&normalized).with_context(|| format!("invalid dashboard URL: {normalized}"))
}

fn normalize_http_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

fn init_logging() {
    let Some(path) = config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_env("MESSMATE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
}
