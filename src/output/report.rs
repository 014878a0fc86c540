use super::{detail_sections, stat_cards, Renderer, COLUMNS, TITLE};
use crate::directory::{DirectoryView, PatientDetail, StatusFilter};
use crate::display::{AvatarColor, NEVER};
use crate::patient::PatientStatus;

/// Self-contained HTML page.
///
/// Every interaction (search, status filter, page buttons, view and close)
/// is a plain link or GET form back to `base_path`, so the page works both
/// when served and when opened from disk.
#[derive(Clone, Debug)]
pub struct HtmlRenderer {
    pub base_path: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

pub(crate) fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub(crate) fn percent_encode(input: &str) -> String {
    let mut out = String::new();
    for b in input.as_bytes() {
        match *b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'~' | b'.' => {
                out.push(*b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

fn status_class(status: PatientStatus) -> &'static str {
    match status {
        PatientStatus::Active => {
            "bg-gradient-to-r from-emerald-400 to-emerald-600 text-white shadow-emerald-200 shadow-lg"
        }
        PatientStatus::Inactive => {
            "bg-gradient-to-r from-red-400 to-red-600 text-white shadow-red-200 shadow-lg"
        }
        PatientStatus::Pending => {
            "bg-gradient-to-r from-amber-400 to-amber-600 text-white shadow-amber-200 shadow-lg"
        }
    }
}

fn avatar_class(color: AvatarColor) -> &'static str {
    match color {
        AvatarColor::VioletIndigo => "from-violet-600 to-indigo-600",
        AvatarColor::CyanBlue => "from-cyan-500 to-blue-600",
        AvatarColor::GreenEmerald => "from-green-500 to-emerald-600",
        AvatarColor::AmberOrange => "from-amber-500 to-orange-600",
        AvatarColor::PinkRose => "from-pink-500 to-rose-600",
        AvatarColor::PurpleViolet => "from-purple-500 to-violet-600",
    }
}

fn stat_gradient(idx: usize) -> &'static str {
    match idx {
        0 => "from-blue-500 to-cyan-600",
        1 => "from-emerald-500 to-green-600",
        2 => "from-amber-500 to-orange-600",
        _ => "from-red-500 to-pink-600",
    }
}

impl HtmlRenderer {
    fn link(&self, view: &DirectoryView, page: usize, patient: Option<&str>) -> String {
        let mut query = vec![
            format!("search={}", percent_encode(&view.search_term)),
            format!("status={}", view.status_filter.as_str()),
            format!("page={page}"),
        ];
        if let Some(id) = patient {
            query.push(format!("view={}", percent_encode(id)));
        }
        escape_html(&format!("{}?{}", self.base_path, query.join("&")))
    }

    fn render_filters(&self, view: &DirectoryView) -> String {
        let mut options = String::new();
        for filter in StatusFilter::OPTIONS {
            let selected = if filter == view.status_filter {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                filter.as_str(),
                filter.label()
            ));
        }
        format!(
            r#"<form method="get" action="{action}" class="bg-white/70 backdrop-blur-xl rounded-3xl shadow-xl border border-white/20 p-6 mb-8 flex flex-col md:flex-row gap-4">
      <input name="search" type="text" value="{search}" placeholder="Search patients by name, email, or phone..." class="flex-1 px-5 py-3 rounded-2xl border border-gray-200 focus:ring-2 focus:ring-blue-500"/>
      <select name="status" class="px-5 py-3 rounded-2xl border border-gray-200">{options}</select>
      <button type="submit" class="px-6 py-3 text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl font-semibold">Apply</button>
    </form>"#,
            action = escape_html(&self.base_path),
            search = escape_html(&view.search_term),
        )
    }

    fn render_rows(&self, view: &DirectoryView) -> String {
        let mut rows = String::new();
        for row in view.rows.iter() {
            let last_visit = if row.last_visit == NEVER {
                format!(r#"<span class="italic text-gray-400">{NEVER}</span>"#)
            } else {
                escape_html(&row.last_visit)
            };
            rows.push_str(&format!(
                r#"<tr class="hover:bg-gradient-to-r hover:from-blue-50 hover:to-purple-50 transition-all duration-300">
          <td class="px-6 py-5"><div class="flex items-center gap-4"><div class="w-12 h-12 bg-gradient-to-br {avatar} rounded-2xl flex items-center justify-center text-white font-bold text-lg shadow-lg">{initials}</div><div><div class="font-bold text-gray-900">{name}</div><div class="text-xs text-gray-500">ID: {id}</div></div></div></td>
          <td class="px-6 py-5 text-sm text-gray-700"><div>{email}</div><div>{phone}</div></td>
          <td class="px-6 py-5 text-sm text-gray-700"><div class="font-semibold">{age}</div><div class="text-gray-500">{gender}</div></td>
          <td class="px-6 py-5"><span class="px-3 py-1 rounded-full text-sm font-bold bg-gradient-to-r from-red-100 to-pink-100 text-red-700">{blood}</span></td>
          <td class="px-6 py-5"><span class="inline-flex px-4 py-2 rounded-full text-xs font-bold {status_class}">{status}</span></td>
          <td class="px-6 py-5 text-sm text-gray-700">{last_visit}</td>
          <td class="px-6 py-5"><a href="{view_link}" class="px-3 py-2 rounded-xl text-blue-600 hover:bg-blue-50 font-semibold">View</a></td>
        </tr>
"#,
                avatar = avatar_class(row.avatar),
                initials = escape_html(&row.initials),
                name = escape_html(&row.name),
                id = escape_html(&row.id),
                email = escape_html(&row.email),
                phone = escape_html(&row.phone),
                age = escape_html(&row.age_label()),
                gender = row.gender,
                blood = escape_html(&row.blood_type),
                status_class = status_class(row.status),
                status = row.status,
                view_link = self.link(view, view.current_page, Some(&row.id)),
            ));
        }
        if let Some(message) = view.empty_message() {
            rows.push_str(&format!(
                r#"<tr><td colspan="{}" class="px-6 py-10 text-center text-gray-500 font-semibold">{}</td></tr>
"#,
                COLUMNS.len() + 1,
                escape_html(&message)
            ));
        }
        rows
    }

    fn render_pagination(&self, view: &DirectoryView) -> String {
        let mut out = String::new();
        let inactive = "px-4 py-2 rounded-xl border border-gray-300 text-gray-700 bg-white/80 hover:bg-gradient-to-r hover:from-blue-500 hover:to-purple-600 hover:text-white";
        let disabled = "px-4 py-2 rounded-xl border border-gray-200 text-gray-300 cursor-not-allowed";

        if view.has_previous {
            out.push_str(&format!(
                r#"<a href="{}" class="{inactive}">Previous</a>"#,
                self.link(view, view.current_page - 1, None)
            ));
        } else {
            out.push_str(&format!(r#"<span class="{disabled}">Previous</span>"#));
        }
        for page in view.page_numbers.iter().copied() {
            if page == view.current_page {
                out.push_str(&format!(
                    r#"<span class="px-4 py-2 rounded-xl bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg">{page}</span>"#
                ));
            } else {
                out.push_str(&format!(
                    r#"<a href="{}" class="{inactive}">{page}</a>"#,
                    self.link(view, page, None)
                ));
            }
        }
        if view.has_next {
            out.push_str(&format!(
                r#"<a href="{}" class="{inactive}">Next</a>"#,
                self.link(view, view.current_page + 1, None)
            ));
        } else {
            out.push_str(&format!(r#"<span class="{disabled}">Next</span>"#));
        }
        out
    }

    fn render_detail(&self, view: &DirectoryView, detail: &PatientDetail) -> String {
        let mut sections = String::new();
        for section in detail_sections(detail) {
            let mut fields = String::new();
            for (label, values) in section.fields.iter() {
                let value = values
                    .iter()
                    .map(|v| escape_html(v))
                    .collect::<Vec<_>>()
                    .join("<br/>");
                fields.push_str(&format!(
                    r#"<div class="p-4 bg-white/60 rounded-2xl"><p class="text-sm font-semibold text-gray-600">{label}</p><p class="text-gray-900 font-bold">{value}</p></div>"#
                ));
            }
            sections.push_str(&format!(
                r#"<section class="bg-gradient-to-br from-blue-50 to-purple-50 rounded-3xl p-6"><h3 class="text-xl font-bold text-gray-900 mb-4">{}</h3><div class="grid grid-cols-1 md:grid-cols-2 gap-4">{fields}</div></section>"#,
                section.title
            ));
        }

        format!(
            r#"<div id="patient-modal" class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center p-4 z-50">
    <div class="bg-white rounded-3xl shadow-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto">
      <div class="p-8 bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 rounded-t-3xl flex items-center gap-6">
        <div class="w-20 h-20 bg-gradient-to-br {avatar} rounded-3xl flex items-center justify-center text-white text-2xl font-bold shadow-xl">{initials}</div>
        <div class="text-white"><h2 class="text-3xl font-bold">{name}</h2><p class="opacity-80">Patient ID: {id}</p></div>
        <span class="ml-auto inline-flex px-4 py-2 rounded-full text-sm font-bold {status_class}">{status}</span>
      </div>
      <div class="p-8 grid grid-cols-1 gap-6">{sections}</div>
      <div class="p-6 border-t border-gray-100 flex justify-end gap-4">
        <a href="{close}" class="px-6 py-3 border border-gray-300 rounded-2xl text-gray-700 font-semibold">Close</a>
        <span class="px-6 py-3 text-white bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl font-semibold opacity-60 cursor-not-allowed" title="Editing is not available">Edit Patient</span>
      </div>
    </div>
  </div>"#,
            avatar = avatar_class(detail.avatar),
            initials = escape_html(&detail.initials),
            name = escape_html(&detail.full_name),
            id = escape_html(&detail.id),
            status_class = status_class(detail.status),
            status = detail.status,
            close = self.link(view, view.current_page, None),
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_view(&self, view: &DirectoryView) -> String {
        let mut cards = String::new();
        for (idx, (label, value)) in stat_cards(view).iter().enumerate() {
            cards.push_str(&format!(
                r#"<div class="bg-white/70 backdrop-blur-xl rounded-3xl shadow-xl border border-white/20 p-6 flex items-center justify-between"><div><p class="text-sm font-semibold text-gray-600">{label}</p><p class="text-3xl font-bold text-gray-900">{value}</p></div><div class="w-14 h-14 bg-gradient-to-r {} rounded-2xl shadow-lg"></div></div>"#,
                stat_gradient(idx)
            ));
        }

        let headers = COLUMNS
            .iter()
            .chain(std::iter::once(&"Actions"))
            .map(|h| {
                format!(
                    r#"<th class="px-6 py-4 text-left text-xs font-bold text-gray-700 uppercase tracking-wider">{h}</th>"#
                )
            })
            .collect::<Vec<_>>()
            .join("");

        let detail = view
            .detail
            .as_ref()
            .map(|d| self.render_detail(view, d))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="min-h-screen bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50">
  <header class="bg-white/70 backdrop-blur-xl border-b border-white/20 shadow-lg px-8 py-6">
    <h1 class="text-3xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent">{title}</h1>
  </header>
  <main class="max-w-7xl mx-auto px-8 py-8">
    <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-8">{cards}</div>
    {filters}
    <div class="bg-white/70 backdrop-blur-xl rounded-3xl shadow-xl border border-white/20 overflow-hidden">
      <table class="min-w-full">
        <thead class="bg-gradient-to-r from-gray-50 to-blue-50"><tr>{headers}</tr></thead>
        <tbody class="divide-y divide-gray-100">
{rows}        </tbody>
      </table>
      <div class="px-6 py-4 flex flex-col md:flex-row items-center justify-between gap-4 border-t border-gray-100">
        <p class="text-sm text-gray-600 font-medium">{showing}</p>
        <nav class="flex gap-2">{pagination}</nav>
      </div>
    </div>
  </main>
  {detail}
</body>
</html>
"#,
            title = TITLE,
            filters = self.render_filters(view),
            rows = self.render_rows(view),
            showing = escape_html(&view.showing_line()),
            pagination = self.render_pagination(view),
        )
    }
}
