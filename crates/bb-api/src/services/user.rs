use crate::client::endpoint::required;
use crate::{HttpClient, Required, endpoints};

use bb_core::{BusinessType, Envelope};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

#[derive(Clone)]
pub struct UserService {
    http: Arc<HttpClient>,
}

impl UserService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Ask whether the logged-in account may run the given business type
    pub async fn check_eligibility(&self, business_type: BusinessType) -> Required<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct EligibilityRequest {
            business_type: BusinessType,
        }

        let result = self
            .http
            .post::<_, Envelope<Value>>(
                endpoints::USER_ELIGIBILITY,
                &EligibilityRequest { business_type },
            )
            .await;
        required(result, "Failed to check eligibility")
    }
}
