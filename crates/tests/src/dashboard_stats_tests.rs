use shared_types::DashboardStats;

use crate::common;

#[test]
fn test_stats_aggregate_the_wire_roster() {
    let roster = common::sample_roster();

    let stats = DashboardStats::from_employees(&roster);
    assert_eq!(stats.total_employees, 3);
    assert_eq!(stats.total_salary, 157_500.5);
    assert_eq!(stats.departments, 3);
    assert_eq!(stats.average_salary, 157_500.5 / 3.0);
}

#[test]
fn test_null_salary_rows_still_count_toward_headcount() {
    let roster = common::sample_roster();

    // Carol's salary arrived as null and reads as zero, but she divides
    // the average all the same.
    let stats = DashboardStats::from_employees(&roster);
    assert!(stats.average_salary < 95_000.0);
    assert_eq!(stats.total_employees, 3);
}

#[test]
fn test_shared_department_counts_once() {
    let mut roster = common::sample_roster();
    for employee in &mut roster {
        employee.department = "Engineering".to_string();
    }

    let stats = DashboardStats::from_employees(&roster);
    assert_eq!(stats.departments, 1);
}

#[test]
fn test_empty_roster_yields_a_zeroed_dashboard() {
    let stats = DashboardStats::from_employees(&[]);
    assert_eq!(stats, DashboardStats::default());
}
