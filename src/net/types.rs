//! Wire types for the campus API.
//!
//! Mirrors the backend's response and payload schemas. Update payloads use
//! optional fields and omit the `None`s so a partial update only touches
//! the fields the caller set. Timestamps stay as the server's ISO-8601
//! strings; the client never does date math on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLES
// =============================================================================

/// Role names as stored by the backend. Compared case-sensitively.
pub const ROLE_ADMIN: &str = "Administrador";
pub const ROLE_TEACHER: &str = "Docente";
pub const ROLE_STUDENT: &str = "Estudiante";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

// =============================================================================
// AUTH
// =============================================================================

/// The authenticated account as reported by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: String,
    /// Role names; the sole authorization input.
    pub roles: HashSet<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

// =============================================================================
// SUBJECTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub teacher_full_name: Option<String>,
    #[serde(default)]
    pub students_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectCreate {
    pub code: String,
    pub name: String,
    pub credits: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// =============================================================================
// PERIODS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodCreate {
    pub code: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// =============================================================================
// ENROLLMENTS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub subject_id: i64,
    pub name: String,
    pub period_id: i64,
    pub is_active: bool,
    pub enrolled_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentCreate {
    pub user_id: i64,
    pub subject_id: i64,
    pub period_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrollmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// =============================================================================
// GRADES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub value: f64,
    pub user_name: String,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeCreate {
    pub enrollment_id: i64,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GradeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// USERS (admin management)
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<i64>>,
}

// =============================================================================
// STUDENTS
// =============================================================================

/// Account listing restricted to the student role; no role set attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: String,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminMetrics {
    pub total_users: i64,
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_subjects: i64,
    pub active_periods: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherMetrics {
    pub total_subjects: i64,
    pub total_students: i64,
    pub active_periods: i64,
    pub total_users: i64,
}

/// Per-student dashboard counters, headed by the student's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentMetrics {
    pub name: String,
    pub enrolled_subjects: i64,
    pub active_periods: i64,
    pub grades_count: i64,
}
