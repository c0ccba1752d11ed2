//! services/client/src/views/home.rs
//!
//! Text rendering of the Home view: the beautified notes, then the summary
//! and takeaways, then the status message.

use notes_beautifier_core::domain::WorkflowState;
use std::fmt::{Display, Write};

use super::plain;

pub const NO_TAKEAWAYS: &str = "No key takeaways found.";

pub fn render_home(state: &WorkflowState) -> String {
    let mut out = String::new();

    if state.is_loading {
        let _ = writeln!(out, "Processing...");
    }

    if !state.beautified_text.is_empty() {
        let _ = writeln!(out, "== Beautified Notes ==");
        let _ = writeln!(out, "{}", plain(&state.beautified_text).trim_end());
        let _ = writeln!(out);
    }

    if !state.summary.is_empty() {
        let _ = writeln!(out, "== Beautified and Summarized Notes ==");
        let _ = writeln!(out, "Summary:");
        let _ = writeln!(out, "{}", plain(&state.summary).trim_end());
        let _ = writeln!(out);
        let _ = writeln!(out, "Key Takeaways:");
        write_takeaways(&mut out, state.takeaways.iter().map(|t| plain(t)));
    }

    if !state.status_message.is_empty() {
        let _ = writeln!(out, "{}", state.status_message);
    }

    out
}

/// Writes one bullet per takeaway, or the placeholder bullet when there are none.
pub(crate) fn write_takeaways<I>(out: &mut String, takeaways: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut takeaways = takeaways.into_iter().peekable();
    if takeaways.peek().is_none() {
        let _ = writeln!(out, "  - {}", NO_TAKEAWAYS);
        return;
    }
    for takeaway in takeaways {
        let _ = writeln!(out, "  - {}", takeaway);
    }
}
