//! Transcript nodes to styled lines.
//!
//! Shared by the full-screen chat, where ratatui wraps the lines to the
//! terminal width, and the one-shot text output.

use inn_chat::summary::SummaryCard;
use inn_chat::transcript::{Author, Node, Transcript};
use inn_core::Slot;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

pub const USER_PREFIX: &str = "you> ";
pub const BOT_PREFIX: &str = "inn> ";
const INDENT: &str = "     ";
const LABEL_WIDTH: usize = 10;

const USER: Style = Style::new().fg(Color::Cyan);
const BOT: Style = Style::new();
const MUTED: Style = Style::new().fg(Color::DarkGray);
const LIVE: Style = Style::new().fg(Color::Yellow);
const FINAL: Style = Style::new().fg(Color::Green);

/// One line per paragraph of every node, in display order.
#[must_use]
pub fn lines(transcript: &Transcript) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for (_, node) in transcript.iter() {
        match node {
            Node::Message { author, text } => {
                let (style, prefix) = match author {
                    Author::User => (USER, USER_PREFIX),
                    Author::Bot => (BOT, BOT_PREFIX),
                };
                push_text(&mut out, style, prefix, text);
            }
            Node::Typing => out.push(
                Line::from(format!("{BOT_PREFIX}...")).style(MUTED.add_modifier(Modifier::ITALIC)),
            ),
            Node::Progress { text } => push_text(&mut out, MUTED, INDENT, text),
            Node::Summary(card) => push_card(&mut out, card),
        }
    }
    out
}

/// The unstyled text of a line.
#[must_use]
pub fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn push_text(out: &mut Vec<Line<'static>>, style: Style, prefix: &str, text: &str) {
    for (index, paragraph) in text.split('\n').enumerate() {
        let lead = if index == 0 { prefix } else { INDENT };
        out.push(Line::from(format!("{lead}{paragraph}")).style(style));
    }
}

fn push_card(out: &mut Vec<Line<'static>>, card: &SummaryCard) {
    let style = match card.key.slot {
        Slot::Live => LIVE,
        Slot::Final => FINAL,
    };
    out.push(
        Line::from(format!("{INDENT}== {} ==", card.title)).style(style.add_modifier(Modifier::BOLD)),
    );
    for field in &card.fields {
        out.push(
            Line::from(format!("{INDENT}{:<LABEL_WIDTH$}{}", field.label, field.value)).style(style),
        );
    }
}
