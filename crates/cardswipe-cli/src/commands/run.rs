use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use cardswipe_core::{AppConfig, Deck};
use cardswipe_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    theme::Theme,
    ui,
};

pub fn run(config: Arc<AppConfig>, deck: Deck) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("cardswipe"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, deck);

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

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    deck: Deck,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config.clone(), deck, Theme::default(), size.width, size.height)?;
    info!(width = size.width, height = size.height, "Starting carousel");

    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, &config.ui.scroll);

    loop {
        app.update_scroll_animation();

        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Some(event) = event_handler.next(app.is_animating())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.apply(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    app.apply(action);
                }
                AppEvent::Resize(w, h) => app.on_resize(w, h),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
