use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Length of the plan in days
    pub duration: u32,
    #[serde(default)]
    pub features: Vec<String>,
}
