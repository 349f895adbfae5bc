//! Full-screen drawing with ratatui.

use inn_chat::Controller;
use inn_chat::composer::Composer;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::view;

const PROMPT: &str = "> ";
const CONTINUATION: &str = "  ";
const MAX_COMPOSER_ROWS: u16 = 5;
const KEY_HELP: &str = "Enter send, Shift+Enter newline, PgUp/PgDn scroll, Esc quit";

const STATUS: Style = Style::new().fg(Color::DarkGray);
const PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Transcript on top, one status row, composer at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub transcript: Rect,
    pub status: Rect,
    pub composer: Rect,
}

impl Areas {
    #[must_use]
    pub fn split(area: Rect, composer: &Composer) -> Self {
        let [transcript, status, composer] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(composer_rows(composer)),
        ])
        .areas(area);
        Self {
            transcript,
            status,
            composer,
        }
    }
}

/// Rows moved by one PageUp/PageDown.
#[must_use]
pub fn page(size: Size) -> usize {
    usize::from(size.height / 2).max(1)
}

/// Largest useful scroll offset, in wrapped rows up from the bottom.
#[must_use]
pub fn max_scroll(controller: &Controller, size: Size) -> usize {
    let area = Areas::split(Rect::new(0, 0, size.width, size.height), controller.composer());
    transcript_widget(controller)
        .line_count(area.transcript.width)
        .saturating_sub(usize::from(area.transcript.height))
}

pub fn draw(frame: &mut Frame, controller: &Controller) {
    let areas = Areas::split(frame.area(), controller.composer());

    let transcript = transcript_widget(controller);
    let bottom = transcript
        .line_count(areas.transcript.width)
        .saturating_sub(usize::from(areas.transcript.height));
    let offset = controller.transcript().viewport().offset().min(bottom);
    frame.render_widget(
        transcript.scroll((to_u16(bottom - offset), 0)),
        areas.transcript,
    );

    frame.render_widget(
        Paragraph::new(status_line(controller)).style(STATUS),
        areas.status,
    );

    render_composer(frame, controller.composer(), areas.composer);
}

fn transcript_widget(controller: &Controller) -> Paragraph<'static> {
    Paragraph::new(view::lines(controller.transcript())).wrap(Wrap { trim: false })
}

fn render_composer(frame: &mut Frame, composer: &Composer, area: Rect) {
    if let Some(placeholder) = composer.visible_placeholder() {
        let line = Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(placeholder, PLACEHOLDER),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(to_u16(PROMPT.len())),
            area.y,
        ));
        return;
    }

    let lines = composer
        .buffer()
        .split('\n')
        .enumerate()
        .map(|(index, row)| {
            let lead = if index == 0 { PROMPT } else { CONTINUATION };
            Line::from(format!("{lead}{row}"))
        })
        .collect::<Vec<_>>();

    // Keep the end of the buffer, where the cursor is, in view.
    let rows = lines.len();
    let last_width = lines.last().map_or(0, Line::width);
    let row_scroll = rows.saturating_sub(usize::from(area.height));
    let col_scroll = last_width.saturating_sub(usize::from(area.width.saturating_sub(1)));

    frame.render_widget(
        Paragraph::new(lines).scroll((to_u16(row_scroll), to_u16(col_scroll))),
        area,
    );
    frame.set_cursor_position(Position::new(
        area.x.saturating_add(to_u16(last_width - col_scroll)),
        area.y.saturating_add(to_u16(rows.saturating_sub(row_scroll + 1))),
    ));
}

fn composer_rows(composer: &Composer) -> u16 {
    let rows = composer.buffer().split('\n').count();
    to_u16(rows).clamp(1, MAX_COMPOSER_ROWS)
}

fn status_line(controller: &Controller) -> String {
    let state = match controller.in_flight() {
        0 if controller.transcript().viewport().is_following() => String::from("ready"),
        0 => String::from("scrolled"),
        1 => String::from("waiting for the desk"),
        n => format!("waiting for the desk ({n})"),
    };
    format!("-- {state} -- {KEY_HELP}")
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
