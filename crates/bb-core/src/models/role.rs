use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Roles allowed past the route guard
pub const ALLOWED_ROLES: [Role; 3] = [Role::Owner, Role::Admin, Role::Coordinator];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Admin,
    Coordinator,
    Shop,
    Staff,
    Waiter,
    Cashier,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Coordinator => "COORDINATOR",
            Self::Shop => "SHOP",
            Self::Staff => "STAFF",
            Self::Waiter => "WAITER",
            Self::Cashier => "CASHIER",
        }
    }

    pub fn is_dashboard_role(&self) -> bool {
        ALLOWED_ROLES.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "OWNER" => Ok(Self::Owner),
            "ADMIN" => Ok(Self::Admin),
            "COORDINATOR" => Ok(Self::Coordinator),
            "SHOP" => Ok(Self::Shop),
            "STAFF" => Ok(Self::Staff),
            "WAITER" => Ok(Self::Waiter),
            "CASHIER" => Ok(Self::Cashier),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
