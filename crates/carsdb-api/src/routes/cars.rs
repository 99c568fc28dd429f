//! # Car CRUD Endpoints
//!
//! | Method   | Path        | Handler      |
//! |----------|-------------|--------------|
//! | `GET`    | `/cars`     | `list_cars`  |
//! | `GET`    | `/cars/:id` | `get_car`    |
//! | `POST`   | `/cars`     | `create_car` |
//! | `PUT`    | `/cars/:id` | `update_car` |
//! | `DELETE` | `/cars/:id` | `delete_car` |
//!
//! Each handler invokes exactly one store operation and maps the
//! outcome to an HTTP response. An identifier that cannot address any
//! record — unknown or syntactically malformed — surfaces as 404.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::CarFields;
use crate::error::AppError;
use crate::state::AppState;

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Build the car CRUD router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", get(get_car).put(update_car).delete(delete_car))
}

/// Reject blank text fields before they reach the store.
fn validate(fields: &CarFields) -> Result<(), AppError> {
    if fields.make.trim().is_empty() {
        return Err(AppError::Validation(
            "Поле make не може бути порожнім".to_string(),
        ));
    }
    if fields.model.trim().is_empty() {
        return Err(AppError::Validation(
            "Поле model не може бути порожнім".to_string(),
        ));
    }
    Ok(())
}

/// GET /cars — list all cars.
async fn list_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cars = state
        .cars
        .find_all()
        .await
        .map_err(|e| AppError::store("Помилка отримання списку автомобілів", e))?;
    Ok(Json(cars))
}

/// GET /cars/:id — fetch one car by identifier.
async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car = state
        .cars
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::store("Помилка при отриманні автомобіля за ID", e))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(car))
}

/// POST /cars — insert a new car.
async fn create_car(
    State(state): State<AppState>,
    Json(fields): Json<CarFields>,
) -> Result<impl IntoResponse, AppError> {
    validate(&fields)?;
    let car = state
        .cars
        .insert(fields)
        .await
        .map_err(|e| AppError::store("Помилка при додаванні автомобіля", e))?;
    Ok(Json(car))
}

/// DELETE /cars/:id — remove a car.
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state
        .cars
        .delete_by_id(&id)
        .await
        .map_err(|e| AppError::store("Помилка при видаленні автомобіля", e))?;
    if deleted == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(DeleteResponse {
        message: "Автомобіль успішно видалено",
    }))
}

/// PUT /cars/:id — replace make/model/year wholesale.
async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<CarFields>,
) -> Result<impl IntoResponse, AppError> {
    validate(&fields)?;
    let car = state
        .cars
        .replace_by_id(&id, fields)
        .await
        .map_err(|e| AppError::store("Помилка при оновленні автомобіля", e))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(car))
}
