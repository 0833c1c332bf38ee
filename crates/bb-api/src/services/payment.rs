use crate::client::endpoint::required;
use crate::{HttpClient, Required, endpoints};

use bb_core::Envelope;

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Gateway-specific fields passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Gateway callback fields, sent back verbatim for server-side signature checks
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone)]
pub struct PaymentService {
    http: Arc<HttpClient>,
}

impl PaymentService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn create_order(&self, order: &CreateOrderRequest) -> Required<Value> {
        let result = self
            .http
            .post::<_, Envelope<Value>>(endpoints::PAYMENTS_CREATE_ORDER, order)
            .await;
        required(result, "Failed to create payment order")
    }

    pub async fn verify(&self, payment: &VerifyPaymentRequest) -> Required<Value> {
        let result = self
            .http
            .post::<_, Envelope<Value>>(endpoints::PAYMENTS_VERIFY, payment)
            .await;
        required(result, "Failed to verify payment")
    }
}
