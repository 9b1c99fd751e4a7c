use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::db::models::StudentId;
use crate::types::student::StudentDto;
use crate::{StudentError, router::StudentsState};

/// GET /api/students
pub async fn list_students(
    State(state): State<StudentsState>,
) -> Result<Json<Vec<StudentDto>>, StudentError> {
    Ok(Json(state.service.list_all().await?))
}

/// GET /api/students/{id} -> 404 with empty body when absent.
pub async fn get_student(
    State(state): State<StudentsState>,
    Path(id): Path<StudentId>,
) -> Result<Json<StudentDto>, StudentError> {
    Ok(Json(state.service.get_by_id(id).await?))
}

/// POST /api/students -> 201 with the stored student and its new id.
pub async fn create_student(
    State(state): State<StudentsState>,
    Json(body): Json<StudentDto>,
) -> Result<impl IntoResponse, StudentError> {
    let created = state.service.create(body).await?;
    info!(id = ?created.id, "student created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_student(
    State(state): State<StudentsState>,
    Path(id): Path<StudentId>,
    Json(body): Json<StudentDto>,
) -> Result<Json<StudentDto>, StudentError> {
    let updated = state.service.update(id, body).await?;
    info!(id, "student updated");
    Ok(Json(updated))
}

/// DELETE /api/students/{id} -> 204, or 404 if nothing was removed.
pub async fn delete_student(
    State(state): State<StudentsState>,
    Path(id): Path<StudentId>,
) -> Result<StatusCode, StudentError> {
    if !state.service.delete(id).await? {
        return Err(StudentError::NotFound(id));
    }
    info!(id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}
