use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use glide_core::AppConfig;
use glide_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{apply_action, handle_key_event, handle_mouse_event},
    widgets,
};

use crate::LogControl;

pub async fn run(config: AppConfig, log: &LogControl) -> Result<()> {
    tracing::info!("Starting showcase");
    // Log lines would draw over the alternate screen
    log.silence()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Glide")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    log.restore()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: AppConfig) -> Result<()> {
    let size = terminal.size()?;
    // Bottom row is the status bar
    let mut app = App::new(config, size.width, size.height.saturating_sub(1));

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(app.config.ui.tick_rate_ms, app.config.ui.animation_fps);

    // Track if we need high frame rate while something is moving
    let mut needs_fast_update = false;
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        terminal.draw(|frame| widgets::render(frame, &app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => apply_action(&mut app, handle_key_event(key)),
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    apply_action(&mut app, action);
                }
                AppEvent::Resize(width, height) => app.resize(width, height.saturating_sub(1)),
                AppEvent::FocusLost => app.pointer_left(),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.is_animating();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
