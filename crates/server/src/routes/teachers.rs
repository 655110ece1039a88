use crate::dtos::student::DeleteParams;
use crate::dtos::teacher::{CreateTeacherRequest, TeacherResponse, UpdateTeacherRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use database::entities::teachers;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, QueryOrder};
use uuid::Uuid;

/// List teachers ordered by name
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "Teachers retrieved successfully", body = Vec<TeacherResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherResponse>>, ApiError> {
    let teachers = teachers::Entity::find()
        .order_by_asc(teachers::Column::Name)
        .all(&state.db)
        .await
        .map_err(database::error::ServiceError::from)?;

    Ok(Json(teachers.into_iter().map(TeacherResponse::from).collect()))
}

/// Add a teacher
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = TeacherResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(body): Json<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>), ApiError> {
    let teacher = teachers::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(body.name),
        email: Set(body.email),
        subject: Set(body.subject),
    };

    let teacher = teacher
        .insert(&state.db)
        .await
        .map_err(database::error::ServiceError::from)?;

    Ok((StatusCode::CREATED, Json(TeacherResponse::from(teacher))))
}

/// Update a teacher's details
#[utoipa::path(
    put,
    path = "/teachers",
    request_body = UpdateTeacherRequest,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Json(body): Json<UpdateTeacherRequest>,
) -> Result<Json<TeacherResponse>, ApiError> {
    let teacher = teachers::Entity::find_by_id(body.id)
        .one(&state.db)
        .await
        .map_err(database::error::ServiceError::from)?
        .ok_or_else(|| ApiError::NotFound("teacher not found".to_owned()))?;

    let mut active: teachers::ActiveModel = teacher.into();
    if let Some(name) = body.name {
        active.name = Set(name);
    }
    if let Some(email) = body.email {
        active.email = Set(email);
    }
    if let Some(subject) = body.subject {
        active.subject = Set(subject);
    }

    let teacher = active
        .update(&state.db)
        .await
        .map_err(database::error::ServiceError::from)?;

    Ok(Json(TeacherResponse::from(teacher)))
}

/// Remove a teacher
#[utoipa::path(
    delete,
    path = "/teachers",
    params(DeleteParams),
    responses(
        (status = 200, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    let result = teachers::Entity::delete_by_id(params.id)
        .exec(&state.db)
        .await
        .map_err(database::error::ServiceError::from)?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("teacher not found".to_owned()));
    }

    Ok(StatusCode::OK)
}
