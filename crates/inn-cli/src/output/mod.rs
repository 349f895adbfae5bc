use inn_chat::Controller;
use inn_chat::transcript::Transcript;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::view;

/// What one-shot commands print.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub session_id: &'a str,
    pub transcript: &'a Transcript,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(controller: &'a Controller) -> Self {
        Self {
            session_id: controller.session_id(),
            transcript: controller.transcript(),
        }
    }
}

/// Render a report to a string in the requested format.
pub fn render(report: &Report<'_>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(view::lines(report.transcript)
            .iter()
            .map(view::plain)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Print a report in the requested format.
pub fn output(report: &Report<'_>, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}
