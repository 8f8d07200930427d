use course_listing::{
    render::{badge_style, empty_state_text, reference, status_badge, Body, CourseRow},
    CourseList,
};
use pretty_assertions::assert_eq;
use ratatui::prelude::*;

mod common;
use common::{course, FakeApi, Recorder};

fn list_of(api: &FakeApi) -> CourseList {
    let mut list = CourseList::new();
    list.load_all(api, &Recorder::default());
    list
}

#[test]
fn test_scenario_row() {
    let row = CourseRow::from(&course("a1b2c3d4e5f6", "Intro", "Published", 30));

    assert_eq!(
        row,
        CourseRow {
            id: "a1b2c3d4e5f6".to_string(),
            title: "Intro".to_string(),
            reference: "d4e5f6".to_string(),
            duration: "30 min".to_string(),
            status: "Published".to_string(),
            badge_class: "published".to_string(),
        }
    );
}

#[test]
fn test_reference() {
    assert_eq!(reference("a1b2c3d4e5f6"), "d4e5f6");
    assert_eq!(reference("abcdef"), "abcdef");
    assert_eq!(reference("abc"), "abc");
    assert_eq!(reference(""), "");
    assert_eq!(reference("ééééééé"), "éééééé");
}

#[test]
fn test_badge_keeps_raw_status() {
    let row = CourseRow::from(&course("1", "a", " Published ", 1));

    assert_eq!(row.status, " Published ");
    assert_eq!(row.badge_class, " published ");
    assert_eq!(
        status_badge(&row),
        Span::styled(" Published ", badge_style("published"))
    );
}

#[test]
fn test_badge_styles() {
    assert_eq!(
        badge_style("published"),
        Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)
    );
    assert_eq!(
        badge_style("draft"),
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    );
    assert_eq!(badge_style("archived"), Style::default());
    assert_eq!(badge_style(""), Style::default());
}

#[test]
fn test_body_loading() {
    assert_eq!(Body::of(&CourseList::new()), Body::Loading);
}

#[test]
fn test_body_empty() {
    let list = list_of(&FakeApi::default());

    assert_eq!(Body::of(&list), Body::Empty);
}

#[test]
fn test_body_empty_after_failure() {
    let api = FakeApi {
        fail_list: true,
        ..FakeApi::serving(vec![course("1", "a", "draft", 1)])
    };

    assert_eq!(Body::of(&list_of(&api)), Body::Empty);
}

#[test]
fn test_body_rows_keep_server_order() {
    let api = FakeApi::serving(vec![
        course("zzzzzz", "Zebra", "draft", 10),
        course("aaaaaa", "Aardvark", "published", 20),
    ]);

    let Body::Rows(rows) = Body::of(&list_of(&api)) else {
        panic!("expected rows");
    };
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();

    assert_eq!(titles, vec!["Zebra", "Aardvark"]);
}

#[test]
fn test_empty_state_call_to_action() {
    let text = empty_state_text();
    let lines: Vec<String> = text
        .lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();

    assert_eq!(
        lines,
        vec![
            "No courses found",
            "Get started by creating your first course",
            "",
            "n Create Course",
        ]
    );
}
