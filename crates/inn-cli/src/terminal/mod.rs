//! Full-screen chat front-end.
//!
//! One task owns the controller. Key events come from crossterm's
//! `EventStream`; each request runs in its own spawned task and reports back
//! over an unbounded channel, so typing continues while requests are in
//! flight.

mod keys;
mod screen;
mod update;

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::event::{
    Event, EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use futures::StreamExt;
use inn_chat::{Controller, Transport};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use self::update::{Effect, UiMsg, update};

/// Raw mode plus alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    enhanced_keys: bool,
}

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(error).context("enter alternate screen");
        }

        let mut guard = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?,
            enhanced_keys: false,
        };

        // Needed to tell Shift+Enter from Enter on terminals that support it.
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                guard.terminal.backend_mut(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .context("enable keyboard enhancement")?;
            guard.enhanced_keys = true;
        }
        guard.terminal.clear().context("clear terminal")?;
        Ok(guard)
    }

    fn draw(&mut self, controller: &Controller) -> anyhow::Result<()> {
        self.terminal
            .draw(|frame| screen::draw(frame, controller))
            .context("draw screen")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the chat until the user quits or the terminal closes.
pub async fn run<T>(mut controller: Controller, transport: T) -> anyhow::Result<()>
where
    T: Transport + Clone + 'static,
{
    let mut term = TerminalGuard::enter()?;
    let mut size = term.terminal.size().context("read terminal size")?;
    let (tx, mut rx) = mpsc::unbounded_channel::<UiMsg>();
    let mut events = EventStream::new();

    term.draw(&controller)?;

    loop {
        let msg = tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => UiMsg::Key(key),
                Some(Ok(Event::Resize(width, height))) => UiMsg::Resize(width, height),
                Some(Ok(_)) => continue,
                Some(Err(error)) => return Err(error).context("read terminal event"),
                None => break,
            },
            Some(msg) = rx.recv() => msg,
        };

        match update(&mut controller, &mut size, msg) {
            Effect::Quit => break,
            Effect::Nothing => continue,
            Effect::Redraw => {}
            Effect::Dispatch(pending) => {
                controller.dispatched(pending.id)?;
                let tx = tx.clone();
                let transport = transport.clone();
                tokio::spawn(async move {
                    let result = pending.outbound.dispatch(&transport).await;
                    // The receiver is gone only after the user quit.
                    let _ = tx.send(UiMsg::Reply {
                        turn: pending.id,
                        result,
                    });
                });
            }
        }

        term.draw(&controller)?;
    }

    tracing::debug!(in_flight = controller.in_flight(), "chat closed");
    Ok(())
}
