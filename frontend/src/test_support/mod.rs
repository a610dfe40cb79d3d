#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{Employee, EmployeeId};
    use serde_json::{json, Value};

    pub fn employee(id: EmployeeId, code: &str, name: &str) -> Employee {
        Employee {
            id,
            employee_id: code.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.com", code.to_lowercase()),
            department: "Engineering".to_string(),
        }
    }

    pub fn employee_json(id: EmployeeId, code: &str, name: &str) -> Value {
        json!({
            "id": id,
            "employee_id": code,
            "full_name": name,
            "email": format!("{}@example.com", code.to_lowercase()),
            "department": "Engineering"
        })
    }

    pub fn attendance_json(id: i64, employee_id: EmployeeId, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "date": date,
            "status": status
        })
    }
}
