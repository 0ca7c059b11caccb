use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use storybook_core::{AppConfig, Story};
use storybook_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler, ImageLoadResult},
    images::load_image,
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    load_theme,
    widgets::{BookWidget, HelpWidget},
};

pub async fn run(config: Arc<AppConfig>, story_path: &Path) -> Result<()> {
    // Load and classify before taking over the terminal so errors print normally
    let story = Arc::new(
        Story::load(story_path)
            .with_context(|| format!("failed to open story {}", story_path.display()))?,
    );
    info!(
        "Opened {} ({} pages)",
        story_path.display(),
        story.len()
    );

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = story.title.clone().unwrap_or_else(|| "Storybook".to_string());
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(&title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state
    let mut app = App::new(story, config.clone(), theme);

    // Faster polling while a page transition or letter scroll is animating
    let event_handler =
        EventHandler::with_animation_tick(config.ui.tick_rate_ms, app.transition.tick_duration());

    let result = run_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Channel for async image loading results
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();

    // Checked at the end of each iteration to pick the next poll interval
    let mut needs_fast_update = false;

    loop {
        // Process any completed image loads (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            app.handle_image_result(result);
        }

        // Load images for the current page and its neighbours
        for locator in app.take_pending_image_loads() {
            spawn_image_load(locator, img_tx.clone());
        }

        app.update_animations();

        // Draw UI
        terminal.draw(|frame| {
            BookWidget::render(frame, app);
            if app.mode == Mode::Help {
                HelpWidget::render(frame, keymap, &app.theme);
            }
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    app.apply(action);
                }
                AppEvent::Resize(width, height) => {
                    // Layout is re-measured on the next draw
                    debug!("Resized to {}x{}", width, height);
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Fetch and decode one image off the UI thread
fn spawn_image_load(locator: String, tx: mpsc::UnboundedSender<ImageLoadResult>) {
    tokio::spawn(async move {
        let result = match load_image(&locator).await {
            Ok(image) => ImageLoadResult::Success { locator, image },
            Err(error) => ImageLoadResult::Failure { locator, error },
        };
        let _ = tx.send(result);
    });
}
