use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::ProfilePatch;
use crate::domain::account::ports::AuthGatewayPort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
    Json(body): Json<UpdateProfileRequestBody>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let patch = ProfilePatch {
        full_name: body.full_name,
        phone: body.phone,
        bio: body.bio,
    };

    let account = state
        .auth_gateway
        .update_profile(&authenticated.account_id, patch)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, AccountData::from(&account)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfileRequestBody {
    full_name: Option<String>,
    phone: Option<String>,
    bio: Option<String>,
}
