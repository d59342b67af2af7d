use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreateOrderResponseDto, PaymentVerifiedDto, VerifyPaymentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::payment::VerifyPaymentParam,
        service::payment::PaymentService, state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Create a Razorpay order for the Pro upgrade.
///
/// # Returns
/// - `200 OK` - Order ready for checkout, with the public key id
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Razorpay request failed
#[utoipa::path(
    post,
    path = "/api/payments/create-order",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = PaymentService::new(&state.db, &state.http_client, &state.config)
        .create_order(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CreateOrderResponseDto {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: state.config.razorpay_key_id.clone(),
        }),
    ))
}

/// Verify a completed checkout and upgrade to Pro.
///
/// # Returns
/// - `200 OK` - Signature valid, user upgraded and usage reset
/// - `400 Bad Request` - Missing fields or invalid signature
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/payments/verify",
    tag = PAYMENT_TAG,
    request_body = VerifyPaymentDto,
    responses(
        (status = 200, description = "Payment verified", body = PaymentVerifiedDto),
        (status = 400, description = "Invalid signature", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<VerifyPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (Some(order_id), Some(payment_id), Some(signature)) = (
        payload.razorpay_order_id,
        payload.razorpay_payment_id,
        payload.razorpay_signature,
    ) else {
        return Err(AppError::BadRequest(
            "Missing payment verification fields".to_string(),
        ));
    };

    PaymentService::new(&state.db, &state.http_client, &state.config)
        .verify(
            user.id,
            VerifyPaymentParam {
                order_id,
                payment_id,
                signature,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentVerifiedDto {
            success: true,
            message: "Payment verified successfully. Welcome to Pro!".to_string(),
        }),
    ))
}
