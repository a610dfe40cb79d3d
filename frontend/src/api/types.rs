use chrono::NaiveDate;
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EmployeeId = i64;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// External employee code, e.g. `E001`.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl Employee {
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Inclusive date bounds sent as `start_date` / `end_date` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub total_employees: u64,
    pub total_attendance_rows: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentDays {
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub present_days: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{}", .detail.as_deref().unwrap_or("Not authorized"))]
    Auth { status: u16, detail: Option<String> },
    #[error("{}", .detail.as_deref().unwrap_or("Request was rejected"))]
    Validation { status: u16, detail: Option<String> },
    #[error("Server error ({status})")]
    Server { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// Maps an HTTP failure status onto the error taxonomy.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::Auth { status, detail },
            400..=499 => ApiError::Validation { status, detail },
            _ => ApiError::Server { status, detail },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Auth { .. } => "AUTH_ERROR",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Server { .. } => "SERVER_ERROR",
            ApiError::Decode(_) => "DECODE_ERROR",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Auth { detail, .. }
            | ApiError::Validation { detail, .. }
            | ApiError::Server { detail, .. } => detail.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Server-supplied detail when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|detail| !detail.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
