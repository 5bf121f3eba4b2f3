use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AuthGatewayPort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    // Shape problems are rejected here, before the domain is invoked
    let email =
        EmailAddress::new(body.email).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = RegisterCommand {
        email,
        password: body.password,
        full_name: body.full_name,
        phone: body.phone,
    };

    let session = state.auth_gateway.register(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        TokenResponseData::from(session),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    password: String,
    full_name: String,
    phone: Option<String>,
}
