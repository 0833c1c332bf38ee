use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Kirana,
    Restaurant,
}

impl BusinessType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Kirana => "KIRANA",
            Self::Restaurant => "RESTAURANT",
        }
    }
}

impl FromStr for BusinessType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_uppercase().as_str() {
            "KIRANA" => Ok(Self::Kirana),
            "RESTAURANT" => Ok(Self::Restaurant),
            _ => Err(CoreError::InvalidBusinessType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
