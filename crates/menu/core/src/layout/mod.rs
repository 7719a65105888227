//! Text layout for menu nodes.
//!
//! [`format_node`] is a pure function: node text and option rows in, the
//! final page out. The node text is dedented and framed by rules; options are
//! packed into a column-balanced table sized to the terminal width.
//!
//! ```text
//! ______________________________________
//!
//! This is a node text
//! ______________________________________
//!
//!  testing: Select this to go to node 2
//!  2: Go to node 3.
//! ```

pub mod table;
pub mod text;

use crate::options::OptionRow;

pub use table::{COLUMN_GAP, Cell, OptionTable};
pub use text::display_width;

/// Host hook for decorating option labels, e.g. to make them clickable.
///
/// The decorated label must render as wide as the plain label; widths are
/// always measured on the undecorated text.
pub trait LabelMarkup: Send + Sync {
    fn decorate(&self, label: &str) -> String;
}

/// Leaves labels untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainMarkup;

impl LabelMarkup for PlainMarkup {
    fn decorate(&self, label: &str) -> String {
        label.to_string()
    }
}

impl<F> LabelMarkup for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn decorate(&self, label: &str) -> String {
        self(label)
    }
}

/// Formats node text plus its option table into the page shown to a player.
pub fn format_node(
    node_text: &str,
    rows: &[OptionRow],
    width_budget: usize,
    markup: &dyn LabelMarkup,
) -> String {
    let node_text = text::normalize(node_text);
    let text_width = text::max_line_width(&node_text);

    if rows.is_empty() {
        if text_width == 0 {
            return node_text;
        }
        let rule = text::rule(text_width);
        return format!("{rule}\n\n{node_text}\n{rule}");
    }

    let cells = rows.iter().map(|row| option_cell(row, markup)).collect();
    let table = OptionTable::pack(cells, width_budget);
    let rule = text::rule(table.width().max(text_width));

    let mut page = String::new();
    if text_width > 0 {
        page.push_str(&rule);
        page.push_str("\n\n");
        page.push_str(&node_text);
    }
    page.push('\n');
    page.push_str(&rule);
    page.push_str("\n\n");
    page.push_str(&table.render());
    page
}

fn option_cell(row: &OptionRow, markup: &dyn LabelMarkup) -> Cell {
    let label = single_line(&row.label);
    let desc = single_line(&row.desc);
    let plain = format!(" {label}: {desc}");
    Cell::new(format!(" {}: {desc}", markup.decorate(&label)), &plain)
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_node_is_framed_by_its_own_width() {
        let page = format_node("  Goodbye.\n  See you.  ", &[], 78, &PlainMarkup);
        assert_eq!(page, "________\n\nGoodbye.\nSee you.\n________");
    }

    #[test]
    fn empty_terminal_node_renders_nothing() {
        assert_eq!(format_node("   \n  ", &[], 78, &PlainMarkup), "");
    }

    #[test]
    fn options_render_below_a_shared_rule() {
        let rows = vec![
            OptionRow::new("testing", "Select this to go to node 2"),
            OptionRow::new("2", "Go to node 3."),
        ];
        let page = format_node("This is a node text", &rows, 78, &PlainMarkup);

        let rule = "_".repeat(" testing: Select this to go to node 2".len() + COLUMN_GAP);
        assert_eq!(
            page,
            format!(
                "{rule}\n\nThis is a node text\n{rule}\n\n testing: Select this to go to node 2\n 2: Go to node 3."
            )
        );
    }

    #[test]
    fn options_without_text_start_on_a_blank_line() {
        let rows = vec![OptionRow::new("1", "a long description")];
        let page = format_node("  \n ", &rows, 78, &PlainMarkup);

        let rule = "_".repeat(" 1: a long description".len() + COLUMN_GAP);
        assert_eq!(page, format!("\n{rule}\n\n 1: a long description"));
    }

    #[test]
    fn markup_does_not_change_alignment() {
        let rows = vec![OptionRow::new("a", "first"), OptionRow::new("b", "second")];
        let plain = format_node("Pick", &rows, 78, &PlainMarkup);
        let linked = format_node("Pick", &rows, 78, &|label: &str| format!("<{label}>"));

        assert_eq!(plain.lines().count(), linked.lines().count());
        assert!(linked.contains(" <a>: first"));
        assert_eq!(
            plain.lines().next().map(str::len),
            linked.lines().next().map(str::len)
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let rows: Vec<_> = (1..=11)
            .map(|i| OptionRow::new(i.to_string(), format!("option number {i}")))
            .collect();
        let first = format_node("Many choices", &rows, 60, &PlainMarkup);
        let second = format_node("Many choices", &rows, 60, &PlainMarkup);
        assert_eq!(first, second);
    }
}
