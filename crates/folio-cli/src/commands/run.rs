use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    widgets::{IntroWidget, NavWidget, PageView, PopupWidget, StatusBarWidget},
};

pub fn run(mut config: AppConfig, skip_intro: bool) -> Result<()> {
    if skip_intro {
        config.ui.intro.enabled = false;
    }

    // Fail before touching the terminal when the content is unusable
    let portfolio = Portfolio::load(&config.portfolio_path())?;
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let event_handler =
        EventHandler::with_frame_interval(config.ui.tick_rate_ms, config.ui.scroll.frame_interval());

    let mut app = App::new(config, portfolio, theme)?;
    info!(
        "Starting with {} projects",
        app.portfolio.projects.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("{} | Portfolio", app.portfolio.profile.name);
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| draw(frame, app, now))?;

        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply(action);
                }
                AppEvent::Wheel(rows) => app.wheel(rows),
                // Layout is recomputed from the viewport on the next draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let size = frame.area();

    if let Some(intro) = &app.intro {
        let widget = IntroWidget {
            lines: intro.typewriter().lines(),
            frame: intro.frame_at(now),
            phase: intro.phase_at(now),
            theme: &app.theme,
        };
        frame.render_widget(widget, size);
        return;
    }

    // Nav bar, page, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    app.set_viewport(chunks[1].width, chunks[1].height);

    NavWidget::render(frame, chunks[0], app);
    PageView::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
    }
}
