/// Order created with the payment gateway, awaiting checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    /// Amount in the currency's minor unit (paise).
    pub amount: u64,
    pub currency: String,
}

/// Checkout result posted back by the browser.
#[derive(Debug, Clone)]
pub struct VerifyPaymentParam {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}
