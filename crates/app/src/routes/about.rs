use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageSubtitle, PageTitle,
};

const API_ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/employees", "Get all employees"),
    ("POST", "/api/employees", "Create new employee"),
    ("GET", "/api/employees/{id}", "Get employee by ID"),
    ("DELETE", "/api/employees/{id}", "Delete employee by ID"),
];

/// Static reference page: feature overview, stack, and the HTTP surface
/// the client talks to.
#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./about.css") }

        div { class: "about-page",
            PageHeader {
                PageTitle { "About Employer Dashboard" }
                PageSubtitle { "Your comprehensive employee management solution" }
            }

            Card {
                CardHeader {
                    CardTitle { "Features" }
                }
                CardContent {
                    ul { class: "feature-list",
                        li {
                            strong { "Employee Management:" }
                            " Add, view, and delete employee records"
                        }
                        li {
                            strong { "Department Organization:" }
                            " Organize employees by departments"
                        }
                        li {
                            strong { "Salary Tracking:" }
                            " Monitor individual and total payroll expenses"
                        }
                        li {
                            strong { "Dashboard Overview:" }
                            " Get quick insights into your workforce"
                        }
                        li {
                            strong { "Responsive Design:" }
                            " Access from any device"
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Technology Stack" }
                }
                CardContent {
                    div { class: "tech-stack",
                        div { class: "tech-column",
                            h3 { "Frontend" }
                            ul {
                                li { "Dioxus 0.7" }
                                li { "Dioxus Router" }
                                li { "Modern CSS" }
                                li { "Responsive Design" }
                            }
                        }
                        div { class: "tech-column",
                            h3 { "Backend" }
                            ul {
                                li { "Python" }
                                li { "Tornado Framework" }
                                li { "MySQL Database" }
                                li { "RESTful APIs" }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Getting Started" }
                }
                CardContent {
                    ol { class: "getting-started",
                        li { "Set up your MySQL database connection" }
                        li { "Start the backend server (Python Tornado)" }
                        li { "Launch the frontend application (Dioxus)" }
                        li { "Begin adding employees through the Employees page" }
                        li { "Monitor your workforce through the Dashboard" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "API Endpoints" }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Method" }
                            DataTableColumn { "Endpoint" }
                            DataTableColumn { "Description" }
                        }
                        DataTableBody {
                            for (method, endpoint, description) in API_ENDPOINTS {
                                DataTableRow {
                                    DataTableCell {
                                        code { class: "endpoint-method", "{method}" }
                                    }
                                    DataTableCell {
                                        code { "{endpoint}" }
                                    }
                                    DataTableCell { "{description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
