//! Appointment handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use validator::Validate;

use crate::appointments::{AppointmentRepository, NewAppointment};

use super::super::state::AppState;
use super::super::types::response::AppointmentListResponse;
use super::super::types::{
    ApiError, ApiResult, BookAppointmentRequest, BookAppointmentResponse, created, ok,
};

/// Book an eye-exam slot
///
/// POST /api/v1/public/appointments
#[utoipa::path(
    post,
    path = "/api/v1/public/appointments",
    request_body = BookAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = BookAppointmentResponse),
        (status = 400, description = "Invalid fields"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Storefront"
)]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookAppointmentRequest>,
) -> ApiResult<BookAppointmentResponse> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let new = NewAppointment {
        full_name: req.full_name,
        phone: req.phone,
        email: req.email,
        preferred_date: req.preferred_date,
        time_slot: req.time_slot,
        note: req.note,
    };

    let appointment_id = AppointmentRepository::create(state.db.pool(), &new).await?;
    tracing::info!(appointment_id = %appointment_id, "Appointment booked");

    created(BookAppointmentResponse {
        ok: true,
        appointment_id,
    })
}

/// Back-office appointment list
///
/// GET /api/v1/admin/appointments
#[utoipa::path(
    get,
    path = "/api/v1/admin/appointments",
    responses(
        (status = 200, description = "Appointment list", body = AppointmentListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<AppointmentListResponse> {
    let appointments = AppointmentRepository::list(state.db.pool()).await?;
    ok(AppointmentListResponse {
        ok: true,
        appointments,
    })
}
