use chrono::NaiveDate;

use crate::directory::{
    DirectoryError, DirectoryEvent, DirectoryState, PageResetPolicy, StatusFilter,
};
use crate::display::AvatarColor;
use crate::output::{OutputFormat, Renderer};
use crate::patient::{seed_patients, PatientRoster, PatientStatus};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    day(2024, 7, 20)
}

fn seeded() -> DirectoryState {
    DirectoryState::new(PatientRoster::seeded())
}

fn roster_of(n: usize) -> PatientRoster {
    let seed = seed_patients();
    let patients = (0..n)
        .map(|i| {
            let mut p = seed[i % seed.len()].clone();
            p.id = format!("p{i}");
            p
        })
        .collect();
    PatientRoster::new(patients).unwrap()
}

fn visible_names(state: &DirectoryState) -> Vec<String> {
    state.visible_patients().iter().map(|p| p.full_name()).collect()
}

#[test]
fn visibility_is_filter_and_search_conjunction() {
    let terms = ["", "john", "CHEN", "555", "@email.com", "(555) 456", "nobody"];
    for filter in StatusFilter::OPTIONS {
        for term in terms {
            let mut state = seeded();
            state.apply(DirectoryEvent::Search(term.to_string())).unwrap();
            state.apply(DirectoryEvent::FilterStatus(filter)).unwrap();
            let visible: Vec<&str> = state
                .visible_patients()
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            let expected: Vec<&str> = state
                .roster()
                .patients()
                .iter()
                .filter(|p| {
                    filter.matches(p.status) && crate::directory::filters::matches_search(p, term)
                })
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(visible, expected, "filter={filter:?} term={term:?}");
        }
    }
}

#[test]
fn search_is_case_insensitive_for_names_and_email() {
    let mut upper = seeded();
    upper.apply(DirectoryEvent::Search("JOHN".to_string())).unwrap();
    let mut lower = seeded();
    lower.apply(DirectoryEvent::Search("john".to_string())).unwrap();
    assert_eq!(visible_names(&upper), visible_names(&lower));
    assert_eq!(visible_names(&lower), vec!["John Doe", "Sarah Johnson"]);

    let mut email = seeded();
    email
        .apply(DirectoryEvent::Search("EMILY.WILLIAMS@".to_string()))
        .unwrap();
    assert_eq!(visible_names(&email), vec!["Emily Williams"]);
}

#[test]
fn phone_search_is_literal() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::Search("(555) 345".to_string()))
        .unwrap();
    assert_eq!(visible_names(&state), vec!["Michael Chen"]);

    state
        .apply(DirectoryEvent::Search("5553456789".to_string()))
        .unwrap();
    assert!(state.visible_patients().is_empty());

    state.apply(DirectoryEvent::Search("+1 (555".to_string())).unwrap();
    assert_eq!(state.visible_patients().len(), 4);
}

#[test]
fn empty_search_shows_every_status_filtered_patient() {
    let mut state = seeded();
    state.apply(DirectoryEvent::Search(String::new())).unwrap();
    assert_eq!(state.visible_patients().len(), 4);
    state
        .apply(DirectoryEvent::FilterStatus(StatusFilter::Active))
        .unwrap();
    assert_eq!(visible_names(&state), vec!["John Doe", "Sarah Johnson"]);
}

#[test]
fn page_count_is_ceiling_of_visible_over_page_size() {
    assert_eq!(crate::directory::page_count(0, 10), 0);
    assert_eq!(crate::directory::page_count(4, 10), 1);
    assert_eq!(crate::directory::page_count(10, 10), 1);
    assert_eq!(crate::directory::page_count(25, 10), 3);
    assert_eq!(seeded().page_count(), 1);
    assert_eq!(DirectoryState::new(roster_of(25)).page_count(), 3);
}

#[test]
fn pagination_slices_and_clamps() {
    let mut state = DirectoryState::new(roster_of(25));
    let first = state.view(today());
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.page_numbers, vec![1, 2, 3]);
    assert!(!first.has_previous);
    assert!(first.has_next);
    assert_eq!(first.showing_line(), "Showing 1 to 10 of 25 results");

    state.apply(DirectoryEvent::GoToPage(3)).unwrap();
    let last = state.view(today());
    assert_eq!(last.rows.len(), 5);
    assert_eq!((last.first_row, last.last_row), (21, 25));
    assert_eq!(last.rows[0].id, "p20");
    assert!(last.has_previous);
    assert!(!last.has_next);

    state.apply(DirectoryEvent::NextPage).unwrap();
    assert_eq!(state.current_page(), 3);
    state.apply(DirectoryEvent::PreviousPage).unwrap();
    state.apply(DirectoryEvent::PreviousPage).unwrap();
    state.apply(DirectoryEvent::PreviousPage).unwrap();
    assert_eq!(state.current_page(), 1);

    assert_eq!(
        state.apply(DirectoryEvent::GoToPage(4)),
        Err(DirectoryError::PageOutOfRange {
            page: 4,
            last_page: 3
        })
    );
    assert!(state.apply(DirectoryEvent::GoToPage(0)).is_err());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn next_page_with_no_visible_rows_stays_on_first_page() {
    let mut state = seeded();
    state.apply(DirectoryEvent::Search("nobody".to_string())).unwrap();
    state.apply(DirectoryEvent::NextPage).unwrap();
    assert_eq!(state.current_page(), 1);
    let view = state.view(today());
    assert_eq!(view.page_count, 0);
    assert!(!view.page_out_of_range);
    assert_eq!(view.showing_line(), "Showing 0 of 0 results");
    assert_eq!(
        view.empty_message().as_deref(),
        Some("No patients match the current search")
    );
}

#[test]
fn filter_change_keeps_page_by_default_and_flags_it() {
    let mut state = DirectoryState::new(roster_of(25));
    state.apply(DirectoryEvent::GoToPage(3)).unwrap();
    state
        .apply(DirectoryEvent::FilterStatus(StatusFilter::Pending))
        .unwrap();
    let view = state.view(today());
    assert_eq!(view.visible_count, 6);
    assert_eq!(view.current_page, 3);
    assert!(view.rows.is_empty());
    assert!(view.page_out_of_range);
    assert!(view
        .empty_message()
        .unwrap()
        .contains("past the last page (1)"));
}

#[test]
fn filter_change_resets_page_when_configured() {
    let mut state =
        DirectoryState::new(roster_of(25)).with_reset_policy(PageResetPolicy::FirstPage);
    state.apply(DirectoryEvent::GoToPage(3)).unwrap();
    state
        .apply(DirectoryEvent::Search("michael".to_string()))
        .unwrap();
    let view = state.view(today());
    assert_eq!(view.current_page, 1);
    assert!(!view.page_out_of_range);
    assert_eq!(view.rows.len(), 6);
}

#[test]
fn age_counts_completed_birthdays() {
    use crate::display::{age, age_on};
    assert_eq!(age_on(day(1985, 6, 15), day(2024, 7, 20)), 39);
    assert_eq!(age_on(day(2000, 1, 1), day(2024, 1, 1)), 24);
    assert_eq!(age_on(day(2000, 1, 2), day(2024, 1, 1)), 23);
    assert_eq!(age_on(day(2000, 2, 29), day(2024, 2, 28)), 23);
    assert_eq!(age("1985-06-15", today()), Some(39));
    assert_eq!(age("15/06/1985", today()), None);
}

#[test]
fn dates_render_as_short_month_day_year() {
    use crate::display::format_date;
    assert_eq!(format_date(Some("2024-07-20")), "Jul 20, 2024");
    assert_eq!(format_date(Some("2024-07-05")), "Jul 5, 2024");
    assert_eq!(format_date(None), "Never");
    assert_eq!(format_date(Some("not a date")), "Invalid date");
}

#[test]
fn never_visited_patient_shows_never() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::Search("chen".to_string()))
        .unwrap();
    let view = state.view(today());
    assert_eq!(view.rows[0].last_visit, "Never");
    let plain = crate::output::render(OutputFormat::Plain, &view);
    assert!(plain.contains("Never"));
}

#[test]
fn avatar_is_initials_and_stable_palette_entry() {
    use crate::display::{avatar_initials, avatar_palette_index};
    assert_eq!(avatar_initials("John", "Doe"), "JD");
    assert_eq!(avatar_initials("", "Doe"), "D");
    assert_eq!(avatar_palette_index("John", "Doe"), (74 + 68) % 6);
    assert_eq!(AvatarColor::for_names("John", "Doe"), AvatarColor::PinkRose);
    assert_eq!(AvatarColor::for_names("Sarah", "Johnson"), AvatarColor::CyanBlue);
    assert_eq!(AvatarColor::for_names("Michael", "Chen"), AvatarColor::VioletIndigo);
}

#[test]
fn viewing_binds_detail_and_closing_hides_it() {
    let mut state = seeded();
    state.apply(DirectoryEvent::View("1".to_string())).unwrap();
    assert!(state.is_modal_visible());
    let view = state.view(today());
    let detail = view.detail.expect("detail should be open");
    assert_eq!(detail.id, "1");
    assert_eq!(detail.full_name, "John Doe");
    assert_eq!(detail.age, "39 years old");
    assert_eq!(detail.date_of_birth, "Jun 15, 1985");
    assert_eq!(
        detail.address_lines,
        vec!["123 Main St", "New York, NY 10001", "USA"]
    );

    state.apply(DirectoryEvent::Close).unwrap();
    assert!(!state.is_modal_visible());
    assert!(state.view(today()).detail.is_none());
    assert_eq!(state.selected_patient().map(|p| p.id.as_str()), Some("1"));

    assert_eq!(
        state.apply(DirectoryEvent::View("42".to_string())),
        Err(DirectoryError::UnknownPatient {
            id: "42".to_string()
        })
    );
    assert!(!state.is_modal_visible());
}

#[test]
fn pending_filter_shows_only_michael_chen() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::FilterStatus(StatusFilter::Pending))
        .unwrap();
    let view = state.view(today());
    assert_eq!(view.visible_count, 1);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "Michael Chen");
    assert_eq!(view.rows[0].status, PatientStatus::Pending);
}

#[test]
fn unwired_actions_fail_loudly_without_side_effects() {
    let mut state = seeded();
    for event in [
        DirectoryEvent::Add,
        DirectoryEvent::Edit("1".to_string()),
        DirectoryEvent::Delete("1".to_string()),
        DirectoryEvent::Export,
    ] {
        let err = state.apply(event).unwrap_err();
        assert!(matches!(err, DirectoryError::NotImplemented { .. }));
        assert!(err.to_string().ends_with("is not implemented"));
    }
    assert_eq!(state.roster().len(), 4);
    assert_eq!(state.current_page(), 1);
    assert!(!state.is_modal_visible());
}

#[test]
fn stats_cover_the_whole_roster() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::FilterStatus(StatusFilter::Inactive))
        .unwrap();
    let stats = state.view(today()).stats;
    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.inactive, 1);
}

#[test]
fn detail_sections_fall_back_for_empty_lists_and_missing_visit() {
    let mut state = seeded();
    state.apply(DirectoryEvent::View("4".to_string())).unwrap();
    let emily = crate::output::plain::render_detail(state.view(today()).detail.as_ref().unwrap());
    assert!(emily.contains("No medical history recorded"));
    assert!(emily.contains("No known allergies"));
    assert!(emily.contains("Last Visit: Feb 10, 2024"));

    state.apply(DirectoryEvent::View("3".to_string())).unwrap();
    let michael =
        crate::output::plain::render_detail(state.view(today()).detail.as_ref().unwrap());
    assert!(michael.contains("High Cholesterol"));
    assert!(!michael.contains("Last Visit"));
}

#[test]
fn roster_rejects_duplicate_ids() {
    let mut patients = seed_patients();
    patients[1].id = "1".to_string();
    let err = PatientRoster::new(patients).unwrap_err();
    assert_eq!(err.to_string(), "duplicate patient id: 1");
}

#[test]
fn patients_load_from_json_and_yaml_files() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("patients.json");
    let json = serde_json::to_string_pretty(&seed_patients()).unwrap();
    assert!(json.contains("\"firstName\": \"John\""));
    assert!(json.contains("\"status\": \"PENDING\""));
    std::fs::write(&json_path, json).unwrap();
    let roster = crate::patient::load_patients(&json_path).unwrap();
    assert_eq!(roster.patients(), seed_patients().as_slice());

    let yaml_path = dir.path().join("patients.yaml");
    std::fs::write(&yaml_path, serde_yaml::to_string(&seed_patients()).unwrap()).unwrap();
    let roster = crate::patient::load_patients(&yaml_path).unwrap();
    assert_eq!(roster.get("3").unwrap().last_visit, None);

    let csv_path = dir.path().join("patients.csv");
    std::fs::write(&csv_path, "id,firstName").unwrap();
    assert!(matches!(
        crate::patient::load_patients(&csv_path),
        Err(crate::patient::PatientLoadError::UnsupportedExtension { .. })
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        crate::patient::load_patients(&missing),
        Err(crate::patient::PatientLoadError::FileRead { .. })
    ));
}

#[test]
fn plain_renderer_lists_columns_rows_and_pages() {
    let view = seeded().view(today());
    let out = crate::output::render(OutputFormat::Plain, &view);
    for header in crate::output::COLUMNS {
        assert!(out.contains(header), "missing column {header}");
    }
    assert!(out.contains("Total Patients: 4 | Active Patients: 2 | Pending: 1 | Inactive: 1"));
    assert!(out.contains("[JD] John Doe"));
    assert!(out.contains("39 years / MALE"));
    assert!(out.contains("Showing 1 to 4 of 4 results"));
    assert!(out.contains("(Previous) [1] (Next)"));
}

#[test]
fn vivid_renderer_shares_the_same_rows() {
    let mut state = seeded();
    state.apply(DirectoryEvent::View("2".to_string())).unwrap();
    let out = crate::output::vivid::VividRenderer.render_view(&state.view(today()));
    assert!(out.contains("sarah.johnson@email.com"));
    assert!(out.contains("Emergency Contact") || out.contains("Relationship"));
    assert!(out.contains("Father"));
}

#[test]
fn json_renderer_serializes_the_view_model() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::FilterStatus(StatusFilter::Pending))
        .unwrap();
    let out = crate::output::render(OutputFormat::Json, &state.view(today()));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status_filter"], "PENDING");
    assert_eq!(value["visible_count"], 1);
    assert_eq!(value["rows"][0]["last_visit"], "Never");
    assert_eq!(value["rows"][0]["avatar"], "violet-indigo");
}

#[test]
fn html_renderer_escapes_and_links_every_action() {
    let mut state = seeded();
    state
        .apply(DirectoryEvent::Search("<b>&".to_string()))
        .unwrap();
    let out = crate::output::render(OutputFormat::Html, &state.view(today()));
    assert!(out.contains("value=\"&lt;b&gt;&amp;\""));
    assert!(!out.contains("<b>&"));
    assert_eq!(
        crate::output::report::percent_encode("<b>& x"),
        "%3Cb%3E%26%20x"
    );

    let out = crate::output::render(OutputFormat::Html, &seeded().view(today()));
    assert!(out.contains("view=3"));
    assert!(out.contains("<option value=\"ALL\" selected>All Status</option>"));
    assert!(!out.contains("patient-modal"));
    assert!(!out.contains("name=\"page\""));
}

#[test]
fn output_format_parsing_and_inference() {
    use crate::output::infer_format_from_path;
    assert_eq!(OutputFormat::parse("VIVID"), Some(OutputFormat::Vivid));
    assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Plain));
    assert_eq!(OutputFormat::parse("pdf"), None);
    assert_eq!(infer_format_from_path("out/report.HTM"), Some(OutputFormat::Html));
    assert_eq!(infer_format_from_path("view.json"), Some(OutputFormat::Json));
    assert_eq!(infer_format_from_path("view"), None);
}

#[test]
fn browse_commands_parse_into_events() {
    use crate::browse::{parse_command, BrowseCommand, BrowseError};
    assert_eq!(parse_command("   ").unwrap(), None);
    assert_eq!(
        parse_command("search  Mary Ann ").unwrap(),
        Some(BrowseCommand::Event(DirectoryEvent::Search(
            "Mary Ann".to_string()
        )))
    );
    assert_eq!(
        parse_command("search").unwrap(),
        Some(BrowseCommand::Event(DirectoryEvent::Search(String::new())))
    );
    assert_eq!(
        parse_command("STATUS Pending").unwrap(),
        Some(BrowseCommand::Event(DirectoryEvent::FilterStatus(
            StatusFilter::Pending
        )))
    );
    assert_eq!(
        parse_command("page 2").unwrap(),
        Some(BrowseCommand::Event(DirectoryEvent::GoToPage(2)))
    );
    assert_eq!(parse_command("quit").unwrap(), Some(BrowseCommand::Quit));
    assert_eq!(
        parse_command("page two"),
        Err(BrowseError::InvalidPage {
            value: "two".to_string()
        })
    );
    assert!(matches!(
        parse_command("view"),
        Err(BrowseError::MissingArgument { .. })
    ));
    assert!(matches!(
        parse_command("status archived"),
        Err(BrowseError::InvalidStatus { .. })
    ));
    assert!(matches!(
        parse_command("dance"),
        Err(BrowseError::UnknownCommand { .. })
    ));
}

#[test]
fn browse_session_applies_events_and_reports_rejections() {
    let input = "status pending\nview 3\nclose\nedit 3\npage 9\nbogus\nstats\nquit\n\
                 search never-read\n";
    let mut state = seeded();
    let mut out: Vec<u8> = Vec::new();
    crate::browse::run_session(
        &mut state,
        &crate::output::plain::PlainRenderer,
        &crate::display::FixedClock(today()),
        input.as_bytes(),
        &mut out,
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("== Michael Chen (MC) :: ID 3 :: PENDING =="));
    assert!(out.contains("error: editing patient '3' is not implemented"));
    assert!(out.contains("error: page 9 is out of range, expected 1-1"));
    assert!(out.contains("error: unknown command 'bogus'"));
    assert!(out.contains("Total Patients: 4 | Active Patients: 2 | Pending: 1 | Inactive: 1\n"));
    assert_eq!(state.status_filter(), StatusFilter::Pending);
    assert_eq!(state.search_term(), "");
    assert!(!state.is_modal_visible());
}

fn page_link(html: &str, page: usize) -> String {
    let anchor = format!("\">{page}</a>");
    let anchor_at = html.find(&anchor).expect("page link should be rendered");
    let href_start = html[..anchor_at].rfind("href=\"").unwrap() + "href=\"".len();
    let href_end = href_start + html[href_start..].find('"').unwrap();
    html[href_start..href_end].replace("&amp;", "&")
}

fn query_from(link: &str) -> crate::server::BrowseQuery {
    let uri: axum::http::Uri = link.parse().unwrap();
    let axum::extract::Query(query) = axum::extract::Query::try_from_uri(&uri).unwrap();
    query
}

fn html_of(state: &DirectoryState) -> String {
    crate::output::render(OutputFormat::Html, &state.view(today()))
}

#[test]
fn server_replays_query_as_events() {
    use crate::server::{replay, BrowseQuery};
    let template = DirectoryState::new(roster_of(25));
    let query = BrowseQuery {
        search: Some(String::new()),
        status: Some("PENDING".to_string()),
        page: Some(1),
        view: Some("p2".to_string()),
    };
    let state = replay(&template, &query).unwrap();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.status_filter(), StatusFilter::Pending);
    assert!(state.is_modal_visible());
    assert_eq!(state.view(today()).rows.len(), 6);

    let past_end = BrowseQuery {
        page: Some(3),
        ..query
    };
    let err = replay(&template, &past_end).unwrap_err();
    assert_eq!(err, "page 3 is out of range, expected 1-1");

    let bad = BrowseQuery {
        status: Some("archived".to_string()),
        ..Default::default()
    };
    assert!(replay(&template, &bad).is_err());
}

#[test]
fn unchanged_criteria_do_not_reset_the_page() {
    let mut template =
        DirectoryState::new(roster_of(25)).with_reset_policy(PageResetPolicy::FirstPage);
    template.apply(DirectoryEvent::GoToPage(3)).unwrap();
    let query = crate::server::BrowseQuery {
        search: Some(String::new()),
        status: Some("all".to_string()),
        ..Default::default()
    };
    let state = crate::server::replay(&template, &query).unwrap();
    assert_eq!(state.current_page(), 3);

    let narrowed = crate::server::BrowseQuery {
        search: Some("chen".to_string()),
        ..query
    };
    let state = crate::server::replay(&template, &narrowed).unwrap();
    assert_eq!(state.current_page(), 1);
}

#[test]
fn rendered_page_links_replay_to_their_page_under_both_policies() {
    for policy in [PageResetPolicy::Keep, PageResetPolicy::FirstPage] {
        let template = DirectoryState::new(roster_of(25)).with_reset_policy(policy);

        let link = page_link(&html_of(&template), 2);
        assert!(link.contains("page=2"), "{link}");
        let second = crate::server::replay(&template, &query_from(&link)).unwrap();
        assert_eq!(second.current_page(), 2, "{policy:?}");
        assert_eq!(
            second.view(today()).showing_line(),
            "Showing 11 to 20 of 25 results"
        );

        let link = page_link(&html_of(&second), 3);
        let third = crate::server::replay(&template, &query_from(&link)).unwrap();
        assert_eq!(third.current_page(), 3, "{policy:?}");
    }
}

#[test]
fn broader_page_link_replays_on_a_narrowed_template() {
    let broad = DirectoryState::new(roster_of(25));
    let link = page_link(&html_of(&broad), 2);
    assert!(link.contains("status=ALL"), "{link}");

    for policy in [PageResetPolicy::Keep, PageResetPolicy::FirstPage] {
        let mut template = DirectoryState::new(roster_of(25)).with_reset_policy(policy);
        template
            .apply(DirectoryEvent::FilterStatus(StatusFilter::Pending))
            .unwrap();
        let state = crate::server::replay(&template, &query_from(&link)).unwrap();
        assert_eq!(state.status_filter(), StatusFilter::All, "{policy:?}");
        assert_eq!(state.current_page(), 2, "{policy:?}");
        assert_eq!(state.view(today()).visible_count, 25);
    }
}

#[tokio::test]
async fn route_follows_rendered_page_links() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    let template =
        DirectoryState::new(roster_of(25)).with_reset_policy(PageResetPolicy::FirstPage);
    let link = page_link(&html_of(&template), 2);
    let app = crate::server::router(crate::server::AppState::new(
        template,
        Arc::new(crate::display::FixedClock(today())),
    ));

    let response = app
        .oneshot(Request::builder().uri(link).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Showing 11 to 20 of 25 results"));
}

#[tokio::test]
async fn root_route_serves_the_html_directory() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    let app = crate::server::router(crate::server::AppState::new(
        seeded(),
        Arc::new(crate::display::FixedClock(today())),
    ));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/?status=PENDING&view=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Michael Chen"));
    assert!(html.contains("patient-modal"));
    assert!(html.contains("45 years old"));
    assert!(!html.contains("John Doe"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?view=99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn verbosity_flags_win_over_configured_log_level() {
    use crate::logging::default_directive;
    assert_eq!(default_directive(0, None), "warn");
    assert_eq!(default_directive(0, Some(" debug ")), "debug");
    assert_eq!(default_directive(0, Some("")), "warn");
    assert_eq!(default_directive(1, Some("error")), "info");
    assert_eq!(default_directive(2, None), "debug");
    assert_eq!(default_directive(5, None), "trace");
}
