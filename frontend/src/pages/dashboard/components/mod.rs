pub mod attendance_form;
pub mod attendance_query;
pub mod employee_form;
pub mod employee_list;
pub mod summary;

pub use attendance_form::AttendanceForm;
pub use attendance_query::AttendanceQueryPanel;
pub use employee_form::EmployeeForm;
pub use employee_list::EmployeeList;
pub use summary::SummarySection;
