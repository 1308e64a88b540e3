use shared_types::filter_employees;

use crate::common;

#[test]
fn test_roster_parses_the_backend_wire_shape() {
    let roster = common::sample_roster();

    assert_eq!(roster.len(), 3);
    assert_eq!(roster[0].salary, 95_000.0);
    assert_eq!(roster[1].salary, 62_500.5, "string salaries should parse");
    assert_eq!(roster[2].salary, 0.0, "null salaries should read as zero");
    assert_eq!(roster[2].hire_date, "2023-11-20");
}

#[test]
fn test_search_matches_each_text_field_case_insensitively() {
    let roster = common::sample_roster();

    let by_name = filter_employees(&roster, "JOHNSON");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Alice Johnson");

    let by_email = filter_employees(&roster, "bob@");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Bob Martinez");

    let by_position = filter_employees(&roster, "recruiter");
    assert_eq!(by_position.len(), 1);
    assert_eq!(by_position[0].name, "Carol White");

    let by_department = filter_employees(&roster, "sales");
    assert_eq!(by_department.len(), 1);
    assert_eq!(by_department[0].name, "Bob Martinez");
}

#[test]
fn test_search_by_id_digits() {
    let roster = common::sample_roster();

    let hits = filter_employees(&roster, "3");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);
}

#[test]
fn test_whitespace_only_search_shows_the_full_roster() {
    let roster = common::sample_roster();

    assert_eq!(filter_employees(&roster, "").len(), 3);
    assert_eq!(filter_employees(&roster, "   ").len(), 3);
}

#[test]
fn test_no_hits_yields_an_empty_view_not_an_error() {
    let roster = common::sample_roster();

    let hits = filter_employees(&roster, "warehouse");
    assert!(hits.is_empty());
}

#[test]
fn test_filtering_leaves_the_source_roster_untouched() {
    let roster = common::sample_roster();
    let before = roster.clone();

    let _ = filter_employees(&roster, "alice");
    assert_eq!(roster, before, "filtering must not consume or reorder rows");
}
