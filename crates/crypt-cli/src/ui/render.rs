//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text.trim_start_matches("Hint: "))
    } else {
        format!("hint={}", text.trim_start_matches("Hint: "))
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge plus indented key-value pairs
/// Plain mode: `status=ok` plus `key=value` lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render a warning line.
pub fn warning(ctx: &UiContext, message: &str) -> String {
    if ctx.mode.is_pretty() {
        badge(ctx, Badge::Warn, message)
    } else {
        format!("warning={}", message)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim headers, padded columns
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] Error: message" with optional "Hint: ..." below
/// Plain mode: "Error: message" with optional "hint=..." below
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    let text = format!("Error: {}", message);

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, &text));
    } else {
        lines.push(text);
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            mode: OutputMode::Pretty,
            ..plain_ctx()
        }
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain_ctx(), "Source File", "a.txt"), "source_file=a.txt");
        assert_eq!(kv(&pretty_ctx(), "Name", "a"), "Name: a");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&plain_ctx(), "Stored", &[("Name", "notes.txt")]);
        assert_eq!(out, "status=ok\nname=notes.txt");
    }

    #[test]
    fn test_receipt_pretty() {
        let out = receipt(&pretty_ctx(), "Stored", &[("Name", "notes.txt")]);
        assert_eq!(out, "[OK] Stored\n  Name: notes.txt");
    }

    #[test]
    fn test_simple_table_plain_has_no_header() {
        let rows = vec![
            vec!["a".to_string(), "h1".to_string()],
            vec!["b".to_string(), String::new()],
        ];
        let out = simple_table(&plain_ctx(), &[Column::new("Path")], &rows);
        assert_eq!(out, "a\th1\nb\t");
    }

    #[test]
    fn test_simple_table_pretty_has_header() {
        let rows = vec![vec!["notes.txt".to_string(), "fav".to_string()]];
        let out = simple_table(
            &pretty_ctx(),
            &[Column::new("Path"), Column::new("Hint")],
            &rows,
        );
        assert!(out.contains("Path"));
        assert!(out.contains("notes.txt"));
    }

    #[test]
    fn test_error_message_always_says_error() {
        let plain = error_message(&plain_ctx(), "Wrong password", Some("Hint: try again"));
        assert_eq!(plain, "Error: Wrong password\nhint=try again");

        let pretty = error_message(&pretty_ctx(), "Wrong password", None);
        assert_eq!(pretty, "[ERR] Error: Wrong password");
    }
}
