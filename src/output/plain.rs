use super::{column_widths, detail_sections, pad, row_cells, stat_cards, Renderer, COLUMNS, TITLE};
use crate::directory::{DirectoryView, PatientDetail};

/// Undecorated text: aligned columns, no color.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_view(&self, view: &DirectoryView) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push('\n');

        let cards = stat_cards(view)
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&cards);
        out.push_str("\n\n");

        out.push_str(&format!(
            "Search: \"{}\"  Status: {}\n\n",
            view.search_term,
            view.status_filter.label()
        ));

        let cells: Vec<[String; 6]> = view.rows.iter().map(row_cells).collect();
        let widths = column_widths(&cells);

        let header = COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(header.trim_end());
        out.push('\n');
        let rule_len: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');

        for row in cells.iter() {
            let line = row
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| pad(c, *w))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        if let Some(message) = view.empty_message() {
            out.push_str(&message);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&view.showing_line());
        out.push('\n');
        out.push_str(&pagination_line(view));
        out.push('\n');

        if let Some(detail) = view.detail.as_ref() {
            out.push('\n');
            out.push_str(&render_detail(detail));
        }
        out
    }
}

fn pagination_line(view: &DirectoryView) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(if view.has_previous {
        "< Previous".to_string()
    } else {
        "(Previous)".to_string()
    });
    for page in view.page_numbers.iter() {
        if *page == view.current_page {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(if view.has_next {
        "Next >".to_string()
    } else {
        "(Next)".to_string()
    });
    parts.join(" ")
}

pub(crate) fn render_detail(detail: &PatientDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== {} ({}) :: ID {} :: {} ==\n",
        detail.full_name, detail.initials, detail.id, detail.status
    ));
    for section in detail_sections(detail) {
        out.push_str(section.title);
        out.push('\n');
        for (label, values) in section.fields.iter() {
            let lead = format!("  {label}: ");
            let indent = " ".repeat(lead.chars().count());
            for (idx, value) in values.iter().enumerate() {
                if idx == 0 {
                    out.push_str(&lead);
                } else {
                    out.push_str(&indent);
                }
                out.push_str(value);
                out.push('\n');
            }
        }
    }
    out.push_str("[Close] [Edit Patient]\n");
    out
}
