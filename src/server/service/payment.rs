//! Pro plan checkout through Razorpay.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::payment::{Order, VerifyPaymentParam},
};

const RAZORPAY_ORDERS_URL: &str = "https://api.razorpay.com/v1/orders";

/// Pro plan price in paise.
pub const PRO_PLAN_AMOUNT: u64 = 49900;
pub const PRO_PLAN_CURRENCY: &str = "INR";

#[derive(Serialize)]
struct CreateOrderRequest {
    amount: u64,
    currency: &'static str,
    receipt: String,
    notes: OrderNotes,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderNotes {
    user_id: String,
    plan: &'static str,
}

#[derive(Deserialize)]
struct OrderResponse {
    id: String,
    amount: u64,
    currency: String,
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Creates a Razorpay order for the Pro upgrade.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order to hand to the checkout widget
    /// - `Err(AppError::ReqwestErr)` - Razorpay rejected the request or was unreachable
    pub async fn create_order(&self, user_id: i32) -> Result<Order, AppError> {
        let request = CreateOrderRequest {
            amount: PRO_PLAN_AMOUNT,
            currency: PRO_PLAN_CURRENCY,
            receipt: receipt_id(Utc::now().timestamp_millis()),
            notes: OrderNotes {
                user_id: user_id.to_string(),
                plan: "pro",
            },
        };

        let order: OrderResponse = self
            .http_client
            .post(RAZORPAY_ORDERS_URL)
            .basic_auth(
                &self.config.razorpay_key_id,
                Some(&self.config.razorpay_key_secret),
            )
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!("Created order {} for user {}", order.id, user_id);

        Ok(Order {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }

    /// Verifies a completed checkout and upgrades the user to Pro with a fresh quota.
    ///
    /// # Returns
    /// - `Ok(())` - User upgraded
    /// - `Err(AppError::BadRequest)` - Signature does not match
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn verify(&self, user_id: i32, param: VerifyPaymentParam) -> Result<(), AppError> {
        if !verify_signature(
            &self.config.razorpay_key_secret,
            &param.order_id,
            &param.payment_id,
            &param.signature,
        ) {
            tracing::warn!(
                "Rejected payment {} for user {}: invalid signature",
                param.payment_id,
                user_id
            );
            return Err(AppError::BadRequest("Invalid signature".to_string()));
        }

        let upgraded = UserRepository::new(self.db).upgrade_to_pro(user_id).await?;
        if !upgraded {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} upgraded to pro (payment {})", user_id, param.payment_id);

        Ok(())
    }
}

/// `rcpt_` followed by the last ten digits of the epoch milliseconds.
fn receipt_id(epoch_millis: i64) -> String {
    let digits = epoch_millis.to_string();
    let start = digits.len().saturating_sub(10);
    format!("rcpt_{}", &digits[start..])
}

/// Checks Razorpay's hex HMAC-SHA256 of `order_id|payment_id` in constant time.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };

    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn param(signature: String) -> VerifyPaymentParam {
        VerifyPaymentParam {
            order_id: "order_abc".to_string(),
            payment_id: "pay_xyz".to_string(),
            signature,
        }
    }

    #[test]
    fn accepts_valid_signature() {
        let signature = sign("secret", "order_abc", "pay_xyz");

        assert!(verify_signature("secret", "order_abc", "pay_xyz", &signature));
    }

    #[test]
    fn rejects_tampered_payloads() {
        let signature = sign("secret", "order_abc", "pay_xyz");

        assert!(!verify_signature("secret", "order_abc", "pay_other", &signature));
        assert!(!verify_signature("other", "order_abc", "pay_xyz", &signature));
        assert!(!verify_signature("secret", "order_abc", "pay_xyz", "not-hex"));
        assert!(!verify_signature("secret", "order_abc", "pay_xyz", ""));
    }

    #[test]
    fn receipt_keeps_last_ten_digits() {
        assert_eq!(receipt_id(1_712_345_678_901), "rcpt_2345678901");
        assert_eq!(receipt_id(42), "rcpt_42");
    }

    /// Expected: Ok, plan is pro and usage reset
    #[tokio::test]
    async fn verify_upgrades_user() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::UserFactory::new(db)
            .queries_used(50)
            .build()
            .await
            .unwrap();
        let client = reqwest::Client::new();
        let config = Config::for_tests();
        let signature = sign(&config.razorpay_key_secret, "order_abc", "pay_xyz");

        PaymentService::new(db, &client, &config)
            .verify(user.id, param(signature))
            .await
            .unwrap();

        let user = UserRepository::new(db)
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.plan.as_str(), "pro");
        assert_eq!(user.queries_used, 0);
    }

    /// Expected: Err(AppError::BadRequest) and plan unchanged
    #[tokio::test]
    async fn verify_rejects_bad_signature() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await.unwrap();
        let client = reqwest::Client::new();
        let config = Config::for_tests();
        let signature = sign("wrong-secret", "order_abc", "pay_xyz");

        let result = PaymentService::new(db, &client, &config)
            .verify(user.id, param(signature))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        let user = UserRepository::new(db)
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.plan.as_str(), "free");
    }
}
