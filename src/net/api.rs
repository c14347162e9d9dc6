//! Typed endpoint wrappers.
//!
//! Thin request/response glue: each function is one call through the shared
//! [`Transport`], which owns credential attachment and failure handling.
//! Deletes are soft — the API answers them with the deactivated record.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{
    AdminMetrics, Enrollment, EnrollmentCreate, EnrollmentUpdate, Grade, GradeCreate, GradeUpdate,
    LoginRequest, LoginResponse, Period, PeriodCreate, PeriodUpdate, Role, Student, StudentMetrics,
    Subject, SubjectCreate, SubjectUpdate, TeacherMetrics, User, UserCreate, UserUpdate,
};

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`. Returns the issued bearer credential.
///
/// # Errors
///
/// Classified per [`ApiError`]; bad credentials surface as
/// `Unauthorized` with the server's detail message.
pub async fn login(t: &Transport, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    t.post_json("/auth/login", &payload).await
}

/// `POST /auth/logout` (204).
///
/// # Errors
///
/// Classified per [`ApiError`].
pub async fn logout(t: &Transport) -> Result<(), ApiError> {
    t.post_unit("/auth/logout").await
}

/// `GET /auth/me` — the "who am I" endpoint.
///
/// # Errors
///
/// Classified per [`ApiError`].
pub async fn current_user(t: &Transport) -> Result<User, ApiError> {
    t.get_json("/auth/me").await
}

// =============================================================================
// SUBJECTS
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_subjects(t: &Transport) -> Result<Vec<Subject>, ApiError> {
    t.get_json("/subjects").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn create_subject(t: &Transport, payload: &SubjectCreate) -> Result<Subject, ApiError> {
    t.post_json("/subjects", payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn update_subject(
    t: &Transport,
    id: i64,
    payload: &SubjectUpdate,
) -> Result<Subject, ApiError> {
    t.put_json(&format!("/subjects/{id}"), payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn deactivate_subject(t: &Transport, id: i64) -> Result<Subject, ApiError> {
    t.delete_json(&format!("/subjects/{id}")).await
}

// =============================================================================
// PERIODS
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_periods(t: &Transport) -> Result<Vec<Period>, ApiError> {
    t.get_json("/periods").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn create_period(t: &Transport, payload: &PeriodCreate) -> Result<Period, ApiError> {
    t.post_json("/periods", payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn update_period(
    t: &Transport,
    id: i64,
    payload: &PeriodUpdate,
) -> Result<Period, ApiError> {
    t.put_json(&format!("/periods/{id}"), payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn deactivate_period(t: &Transport, id: i64) -> Result<Period, ApiError> {
    t.delete_json(&format!("/periods/{id}")).await
}

/// Reactivate a period (`PUT` with `is_active: true`).
///
/// # Errors
/// Classified per [`ApiError`].
pub async fn activate_period(t: &Transport, id: i64) -> Result<Period, ApiError> {
    let payload = PeriodUpdate { is_active: Some(true), ..PeriodUpdate::default() };
    t.put_json(&format!("/periods/{id}"), &payload).await
}

// =============================================================================
// ENROLLMENTS
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_enrollments(t: &Transport) -> Result<Vec<Enrollment>, ApiError> {
    t.get_json("/enrollments").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn create_enrollment(
    t: &Transport,
    payload: &EnrollmentCreate,
) -> Result<Enrollment, ApiError> {
    t.post_json("/enrollments", payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn update_enrollment(
    t: &Transport,
    id: i64,
    payload: &EnrollmentUpdate,
) -> Result<Enrollment, ApiError> {
    t.put_json(&format!("/enrollments/{id}"), payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn deactivate_enrollment(t: &Transport, id: i64) -> Result<Enrollment, ApiError> {
    t.delete_json(&format!("/enrollments/{id}")).await
}

// =============================================================================
// GRADES
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_grades(t: &Transport) -> Result<Vec<Grade>, ApiError> {
    t.get_json("/grades").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn create_grade(t: &Transport, payload: &GradeCreate) -> Result<Grade, ApiError> {
    t.post_json("/grades", payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn update_grade(t: &Transport, id: i64, payload: &GradeUpdate) -> Result<Grade, ApiError> {
    t.put_json(&format!("/grades/{id}"), payload).await
}

// =============================================================================
// USERS (admin management)
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_users(t: &Transport) -> Result<Vec<User>, ApiError> {
    t.get_json("/users").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn create_user(t: &Transport, payload: &UserCreate) -> Result<User, ApiError> {
    t.post_json("/users", payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn update_user(t: &Transport, id: i64, payload: &UserUpdate) -> Result<User, ApiError> {
    t.put_json(&format!("/users/{id}"), payload).await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn deactivate_user(t: &Transport, id: i64) -> Result<User, ApiError> {
    t.delete_json(&format!("/users/{id}")).await
}

// =============================================================================
// STUDENTS
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_students(t: &Transport) -> Result<Vec<Student>, ApiError> {
    t.get_json("/students").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn get_student(t: &Transport, id: i64) -> Result<Student, ApiError> {
    t.get_json(&format!("/students/{id}")).await
}

/// Subjects the authenticated student is enrolled in.
///
/// # Errors
/// Classified per [`ApiError`].
pub async fn student_subjects(t: &Transport) -> Result<Vec<Subject>, ApiError> {
    t.get_json("/student/subjects").await
}

// =============================================================================
// ROLES & DASHBOARD
// =============================================================================

/// # Errors
/// Classified per [`ApiError`].
pub async fn list_roles(t: &Transport) -> Result<Vec<Role>, ApiError> {
    t.get_json("/roles").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn admin_metrics(t: &Transport) -> Result<AdminMetrics, ApiError> {
    t.get_json("/dashboard/admin").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn teacher_metrics(t: &Transport) -> Result<TeacherMetrics, ApiError> {
    t.get_json("/dashboard/teacher").await
}

/// # Errors
/// Classified per [`ApiError`].
pub async fn student_metrics(t: &Transport) -> Result<StudentMetrics, ApiError> {
    t.get_json("/dashboard/student").await
}
