use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, input, update};
use crate::editor::EditorBuffer;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// source reports an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — hopline requires an interactive terminal")?;
        let size = terminal.size()?;

        let buffer = EditorBuffer::new(self.line_width, self.tab_width);
        let mut model = Model::new(buffer, (size.width, size.height));
        model.theme = self.theme;

        let result = Self::event_loop(&mut terminal, model);

        ratatui::restore();
        result
    }

    /// Strictly sequential: draw the full grid, then block for the next
    /// event, then run it through `update`. One render per processed event.
    fn event_loop(terminal: &mut DefaultTerminal, mut model: Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(&model, frame))?;
            if model.should_quit {
                break;
            }
            let event = event::read().context("Failed to read terminal event")?;
            if let Some(msg) = input::handle_event(&event) {
                tracing::debug!(?msg, "dispatch");
                model = update(model, msg);
            }
        }
        Ok(())
    }
}
