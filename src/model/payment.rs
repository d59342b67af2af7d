use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponseDto {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
}

/// Fields posted back by the Razorpay checkout widget.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPaymentDto {
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentVerifiedDto {
    pub success: bool,
    pub message: String,
}
