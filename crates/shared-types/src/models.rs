use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Employee record as delivered by the REST API.
///
/// `salary` can arrive as a JSON number, a numeric string, or null depending
/// on how the backend serialized the row; anything non-numeric reads as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "flexible_salary")]
    pub salary: f64,
    #[serde(default)]
    pub hire_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Employee {
    /// Case-insensitive substring match against name, email, position and
    /// department, plus a raw substring match against the decimal id.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.position.to_lowercase().contains(&needle)
            || self.department.to_lowercase().contains(&needle)
            || self.id.to_string().contains(term)
    }
}

fn flexible_salary<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Ok(s.trim().parse().unwrap_or(0.0)),
        _ => Ok(0.0),
    }
}

/// Derived roster view. A term that is blank after trimming yields the full
/// collection; anything else keeps only matching employees.
pub fn filter_employees(employees: &[Employee], term: &str) -> Vec<Employee> {
    if term.trim().is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| employee.matches(term))
        .cloned()
        .collect()
}

/// The fixed set of departments offered by the creation form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    HumanResources,
    Finance,
    Operations,
    Design,
    CustomerSupport,
}

pub const ALL_DEPARTMENTS: [Department; 8] = [
    Department::Engineering,
    Department::Marketing,
    Department::Sales,
    Department::HumanResources,
    Department::Finance,
    Department::Operations,
    Department::Design,
    Department::CustomerSupport,
];

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::HumanResources => "Human Resources",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Design => "Design",
            Department::CustomerSupport => "Customer Support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "engineering" => Some(Department::Engineering),
            "marketing" => Some(Department::Marketing),
            "sales" => Some(Department::Sales),
            "human resources" => Some(Department::HumanResources),
            "finance" => Some(Department::Finance),
            "operations" => Some(Department::Operations),
            "design" => Some(Department::Design),
            "customer support" => Some(Department::CustomerSupport),
            _ => None,
        }
    }
}

/// Aggregates shown on the dashboard, reduced client-side from one roster
/// fetch. Never kept in sync with mutations made elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_salary: f64,
    pub departments: usize,
    pub average_salary: f64,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let total_employees = employees.len();
        let total_salary: f64 = employees.iter().map(|employee| employee.salary).sum();
        let departments = employees
            .iter()
            .map(|employee| employee.department.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_salary = if total_employees > 0 {
            total_salary / total_employees as f64
        } else {
            0.0
        };

        Self {
            total_employees,
            total_salary,
            departments,
            average_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str, email: &str, position: &str, department: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: email.to_string(),
            position: position.to_string(),
            department: department.to_string(),
            salary: 50_000.0,
            hire_date: "2023-01-15".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn deserializes_salary_from_number() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":1,"name":"Ann","email":"ann@corp.test","position":"Engineer","department":"Engineering","salary":75000.5,"hire_date":"2023-01-15"}"#,
        )
        .unwrap();
        assert_eq!(employee.salary, 75000.5);
    }

    #[test]
    fn deserializes_salary_from_numeric_string() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":1,"name":"Ann","email":"ann@corp.test","salary":"50000"}"#,
        )
        .unwrap();
        assert_eq!(employee.salary, 50_000.0);
        assert_eq!(employee.position, "");
    }

    #[test]
    fn unreadable_salary_reads_as_zero() {
        let null_salary: Employee =
            serde_json::from_str(r#"{"id":1,"name":"Ann","email":"a@b.c","salary":null}"#).unwrap();
        let word_salary: Employee =
            serde_json::from_str(r#"{"id":2,"name":"Bo","email":"b@c.d","salary":"lots"}"#).unwrap();
        let absent_salary: Employee =
            serde_json::from_str(r#"{"id":3,"name":"Cy","email":"c@d.e"}"#).unwrap();

        assert_eq!(null_salary.salary, 0.0);
        assert_eq!(word_salary.salary, 0.0);
        assert_eq!(absent_salary.salary, 0.0);
    }

    #[test]
    fn filter_with_blank_term_returns_everything() {
        let roster = vec![
            employee(1, "Ann", "ann@corp.test", "Rep", "Sales"),
            employee(2, "Bo", "bo@corp.test", "Engineer", "Engineering"),
        ];
        assert_eq!(filter_employees(&roster, "").len(), 2);
        assert_eq!(filter_employees(&roster, "   ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive_on_text_fields() {
        let roster = vec![
            employee(1, "Ann", "ann@corp.test", "Rep", "Sales"),
            employee(2, "Bo", "bo@corp.test", "Engineer", "Engineering"),
        ];
        let hits = filter_employees(&roster, "ENG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bo");
    }

    #[test]
    fn filter_matches_decimal_id_substring() {
        let roster = vec![
            employee(1, "Ann", "ann@corp.test", "Rep", "Sales"),
            employee(10, "Bo", "bo@corp.test", "Engineer", "Engineering"),
        ];
        assert_eq!(filter_employees(&roster, "1").len(), 2);
        assert_eq!(filter_employees(&roster, "10").len(), 1);
    }

    #[test]
    fn department_list_matches_wire_labels() {
        assert_eq!(ALL_DEPARTMENTS.len(), 8);
        assert_eq!(Department::HumanResources.as_str(), "Human Resources");
        assert_eq!(
            Department::parse("human resources"),
            Some(Department::HumanResources)
        );
        assert_eq!(
            Department::parse("  Customer Support "),
            Some(Department::CustomerSupport)
        );
        assert_eq!(Department::parse("Legal"), None);
    }

    #[test]
    fn stats_reduce_count_sum_departments_and_mean() {
        let mut ann = employee(1, "Ann", "ann@corp.test", "Rep", "Sales");
        ann.salary = 50_000.0;
        let mut bo = employee(2, "Bo", "bo@corp.test", "Engineer", "Engineering");
        bo.salary = 70_000.0;

        let stats = DashboardStats::from_employees(&[ann, bo]);
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.total_salary, 120_000.0);
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.average_salary, 60_000.0);
    }

    #[test]
    fn stats_mean_is_zero_for_empty_collection() {
        let stats = DashboardStats::from_employees(&[]);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.average_salary, 0.0);
    }
}
