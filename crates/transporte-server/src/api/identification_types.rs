use axum::{
    extract::{Form, Path, State},
    response::{Json, Redirect},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use transporte_identification_types::{IdentificationType, IdentificationTypeError};

use crate::{error::ApiError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Wire shape of an identification type
#[derive(Debug, Serialize)]
pub struct IdentificationTypeView {
    pub id: i64,
    pub name: String,
}

impl From<IdentificationType> for IdentificationTypeView {
    fn from(t: IdentificationType) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListIdentificationTypesResponse {
    pub identification_types: Vec<IdentificationTypeView>,
}

/// Form body submitted by the edit screen
#[derive(Debug, Deserialize)]
pub struct EditIdentificationTypeForm {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /identification-types
pub async fn list_identification_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListIdentificationTypesResponse>, ApiError> {
    let rows = state.identification_types.list_all().await?;

    Ok(Json(ListIdentificationTypesResponse {
        identification_types: rows.into_iter().map(Into::into).collect(),
    }))
}

/// GET /identification-types/{id}/edit
pub async fn edit_identification_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<IdentificationTypeView>, ApiError> {
    let row = state.identification_types.get_by_id(id).await?;

    Ok(Json(row.into()))
}

/// POST /identification-types/{id}/edit
pub async fn update_identification_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<EditIdentificationTypeForm>,
) -> Result<Redirect, ApiError> {
    // A form targeting one row must carry that row's id.
    if id != form.id {
        return Err(ApiError::NotFound(format!("identification type {}", id)));
    }

    match state.identification_types.update_name(id, &form.name).await {
        Ok(_) => Ok(Redirect::to("/identification-types")),
        Err(IdentificationTypeError::Validation { field, message }) => Err(ApiError::Validation {
            field,
            message,
            submitted: Some(serde_json::json!({
                "id": form.id,
                "name": form.name,
            })),
        }),
        Err(e) => Err(e.into()),
    }
}

/// POST /identification-types/{id}/delete
pub async fn delete_identification_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    state.identification_types.delete(id).await?;

    Ok(Redirect::to("/identification-types"))
}
