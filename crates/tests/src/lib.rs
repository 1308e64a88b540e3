#[cfg(test)]
mod common;

#[cfg(test)]
mod session_store_tests;

#[cfg(test)]
mod roster_filter_tests;

#[cfg(test)]
mod dashboard_stats_tests;

#[cfg(test)]
mod employee_validation_tests;

#[cfg(test)]
mod api_error_tests;
