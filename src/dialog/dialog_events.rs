use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

use super::dialog_render::render_dialog;
use super::dialog_state::StatsDialog;
use crate::report::Labels;

/// Timeout for event polling
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Draw the dialog and process keys until it is closed
pub fn run_dialog(
    terminal: &mut DefaultTerminal,
    dialog: &mut StatsDialog,
    labels: &Labels,
) -> io::Result<()> {
    while !dialog.is_closed() {
        terminal.draw(|frame| {
            render_dialog(frame, dialog, labels);
        })?;

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    dialog.handle_key(key_event);
                }
                _ => {}
            }
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("Stats dialog closed");

    Ok(())
}
