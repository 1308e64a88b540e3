pub mod employee_form;
