use colored::{ColoredString, Colorize};

use super::{column_widths, detail_sections, pad, row_cells, stat_cards, Renderer, COLUMNS, TITLE};
use crate::directory::{DirectoryView, PatientDetail};
use crate::display::AvatarColor;
use crate::patient::PatientStatus;

type Rgb = (u8, u8, u8);

const HEADER_FROM: Rgb = (37, 99, 235);
const HEADER_TO: Rgb = (147, 51, 234);

/// Gradient-styled terminal output.
pub struct VividRenderer;

fn avatar_rgb(color: AvatarColor) -> (Rgb, Rgb) {
    match color {
        AvatarColor::VioletIndigo => ((124, 58, 237), (79, 70, 229)),
        AvatarColor::CyanBlue => ((6, 182, 212), (37, 99, 235)),
        AvatarColor::GreenEmerald => ((34, 197, 94), (5, 150, 105)),
        AvatarColor::AmberOrange => ((245, 158, 11), (234, 88, 12)),
        AvatarColor::PinkRose => ((236, 72, 153), (225, 29, 72)),
        AvatarColor::PurpleViolet => ((168, 85, 247), (124, 58, 237)),
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Colors each character along a linear gradient.
pub(crate) fn gradient(text: &str, from: Rgb, to: Rgb) -> String {
    let n = text.chars().count();
    let mut out = String::new();
    for (i, ch) in text.chars().enumerate() {
        let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        let piece = ch
            .to_string()
            .truecolor(lerp(from.0, to.0, t), lerp(from.1, to.1, t), lerp(from.2, to.2, t))
            .bold();
        out.push_str(&piece.to_string());
    }
    out
}

fn status_badge(status: PatientStatus, text: &str) -> ColoredString {
    match status {
        PatientStatus::Active => text.white().on_green().bold(),
        PatientStatus::Inactive => text.white().on_red().bold(),
        PatientStatus::Pending => text.black().on_yellow().bold(),
    }
}

fn avatar_badge(color: AvatarColor, text: &str) -> ColoredString {
    let ((r, g, b), _) = avatar_rgb(color);
    text.white().on_truecolor(r, g, b).bold()
}

impl Renderer for VividRenderer {
    fn render_view(&self, view: &DirectoryView) -> String {
        let mut out = String::new();
        out.push_str(&gradient(TITLE, HEADER_FROM, HEADER_TO));
        out.push('\n');

        let cards = stat_cards(view)
            .iter()
            .map(|(label, value)| format!("{} {}", label.dimmed(), value.to_string().bold()))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&cards);
        out.push_str("\n\n");

        out.push_str(&format!(
            "{} {}  {} {}\n\n",
            "search".cyan(),
            format!("\"{}\"", view.search_term).bold(),
            "status".cyan(),
            view.status_filter.label().bold()
        ));

        let cells: Vec<[String; 6]> = view.rows.iter().map(row_cells).collect();
        let widths = column_widths(&cells);

        let header = COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| pad(&c.to_uppercase(), *w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&gradient(header.trim_end(), HEADER_FROM, HEADER_TO));
        out.push('\n');

        for (row, cells) in view.rows.iter().zip(cells.iter()) {
            let mut line: Vec<String> = Vec::with_capacity(cells.len());
            for (idx, (cell, w)) in cells.iter().zip(widths.iter()).enumerate() {
                let padded = pad(cell, *w);
                let styled = match idx {
                    0 => {
                        let initials = format!("[{}]", row.initials);
                        let rest = padded.strip_prefix(initials.as_str()).unwrap_or(&padded);
                        format!("{}{}", avatar_badge(row.avatar, &initials), rest.bold())
                    }
                    4 => {
                        let name = row.status.as_str();
                        let rest = padded.strip_prefix(name).unwrap_or(&padded);
                        format!("{}{}", status_badge(row.status, name), rest)
                    }
                    5 if row.last_visit == crate::display::NEVER => {
                        padded.italic().dimmed().to_string()
                    }
                    _ => padded,
                };
                line.push(styled);
            }
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
        if let Some(message) = view.empty_message() {
            out.push_str(&message.yellow().to_string());
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&view.showing_line().dimmed().to_string());
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
    let previous = "< Previous";
    parts.push(if view.has_previous {
        previous.bold().to_string()
    } else {
        previous.dimmed().to_string()
    });
    for page in view.page_numbers.iter() {
        let label = format!(" {page} ");
        if *page == view.current_page {
            parts.push(
                label
                    .white()
                    .on_truecolor(HEADER_TO.0, HEADER_TO.1, HEADER_TO.2)
                    .bold()
                    .to_string(),
            );
        } else {
            parts.push(label);
        }
    }
    let next = "Next >";
    parts.push(if view.has_next {
        next.bold().to_string()
    } else {
        next.dimmed().to_string()
    });
    parts.join(" ")
}

fn render_detail(detail: &PatientDetail) -> String {
    let mut out = String::new();
    let (from, to) = avatar_rgb(detail.avatar);
    out.push_str(&format!(
        "{} {} {} {}\n",
        avatar_badge(detail.avatar, &format!(" {} ", detail.initials)),
        gradient(&detail.full_name, from, to),
        format!("Patient ID: {}", detail.id).dimmed(),
        status_badge(detail.status, &format!(" {} ", detail.status))
    ));
    for section in detail_sections(detail) {
        out.push_str(&gradient(section.title, HEADER_FROM, HEADER_TO));
        out.push('\n');
        for (label, values) in section.fields.iter() {
            let lead = format!("  {label}: ");
            let indent = " ".repeat(lead.chars().count());
            for (idx, value) in values.iter().enumerate() {
                if idx == 0 {
                    out.push_str(&lead.dimmed().to_string());
                } else {
                    out.push_str(&indent);
                }
                out.push_str(&value.bold().to_string());
                out.push('\n');
            }
        }
    }
    out.push_str(&format!("{} {}\n", "[Close]".dimmed(), "[Edit Patient]".magenta().bold()));
    out
}
