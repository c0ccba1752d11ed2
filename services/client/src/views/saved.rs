//! services/client/src/views/saved.rs
//!
//! Text rendering of the Saved Notes view. Saved text is shown as stored,
//! bold markers included.

use chrono::Local;
use notes_beautifier_core::domain::Note;
use notes_beautifier_core::notes_list::{NotesView, EMPTY_MESSAGE};
use std::fmt::Write;

use super::home::write_takeaways;

const DIVIDER: &str = "----------------------------------------";

pub fn render_saved(view: &NotesView) -> String {
    let mut out = String::from("== Saved Notes ==\n");
    match view {
        NotesView::Loading => out.push_str("Loading...\n"),
        NotesView::Failed(message) => {
            let _ = writeln!(out, "{}", message);
        }
        NotesView::Empty => {
            let _ = writeln!(out, "{}", EMPTY_MESSAGE);
        }
        NotesView::Loaded(notes) => {
            for (idx, note) in notes.iter().enumerate() {
                if idx > 0 {
                    let _ = writeln!(out, "{}", DIVIDER);
                }
                write_note(&mut out, note);
            }
        }
    }
    out
}

fn write_note(out: &mut String, note: &Note) {
    if let Some(created_at) = note.created_at {
        let _ = writeln!(
            out,
            "{}",
            created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }
    let _ = writeln!(out, "Raw Notes:\n{}", note.raw_text.trim_end());
    let _ = writeln!(out, "Beautified Notes:\n{}", note.beautified_text.trim_end());
    let _ = writeln!(out, "Summary:\n{}", note.summary_text.trim_end());
    let _ = writeln!(out, "Key Takeaways:");
    write_takeaways(out, &note.takeaways);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(raw: &str, takeaways: Vec<String>) -> Note {
        Note {
            id: None,
            raw_text: raw.into(),
            beautified_text: format!("# {raw}"),
            summary_text: format!("{raw} in short"),
            takeaways,
            created_at: None,
        }
    }

    #[test]
    fn each_state_has_its_own_text() {
        assert!(render_saved(&NotesView::Loading).contains("Loading..."));
        assert!(render_saved(&NotesView::Empty).contains(EMPTY_MESSAGE));
        assert!(render_saved(&NotesView::Failed("Mongo is down".into())).contains("Mongo is down"));
    }

    #[test]
    fn notes_are_listed_in_order_with_dividers_between() {
        let view = NotesView::Loaded(vec![
            note("cells", vec!["Mitochondria".into()]),
            note("atoms", vec![]),
        ]);

        let out = render_saved(&view);

        let cells = out.find("Raw Notes:\ncells").unwrap();
        let atoms = out.find("Raw Notes:\natoms").unwrap();
        assert!(cells < atoms);
        assert_eq!(out.matches(DIVIDER).count(), 1);
        assert!(out.contains("  - Mitochondria"));
        assert!(out.contains("No key takeaways found."));
    }

    #[test]
    fn saved_text_keeps_its_bold_markers() {
        let mut saved = note("cells", vec!["**Mitochondria** make ATP".into()]);
        saved.summary_text = "**Cells** are small.".into();

        let out = render_saved(&NotesView::Loaded(vec![saved]));

        assert!(out.contains("Summary:\n**Cells** are small.\n"));
        assert!(out.contains("  - **Mitochondria** make ATP\n"));
    }
}
