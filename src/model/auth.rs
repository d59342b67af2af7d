use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupOtpDto {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginOtpDto {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyOtpDto {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OtpIssuedDto {
    pub success: bool,
    pub message: String,
    /// Only populated when the server is configured to echo codes (local development).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifiedDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeDto {
    pub success: bool,
    pub user: UserDto,
}
