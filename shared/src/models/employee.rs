//! Employee Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "OWNER")]
    Owner,
    #[serde(rename = "MANAGER")]
    Manager,
    #[serde(rename = "BARTENDER")]
    Bartender,
    #[serde(rename = "KITCHEN")]
    Kitchen,
    #[serde(rename = "SERVER")]
    Server,
}

/// Revenue bucket a role reports into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueSegment {
    #[serde(rename = "SERVICE")]
    Service,
    #[serde(rename = "BAR")]
    Bar,
}

impl Role {
    /// Which revenue bucket this role's individual revenue counts into.
    ///
    /// Kitchen staff never report revenue (the sheet disables the input).
    pub fn revenue_segment(&self) -> Option<RevenueSegment> {
        match self {
            Role::Owner | Role::Manager | Role::Server => Some(RevenueSegment::Service),
            Role::Bartender => Some(RevenueSegment::Bar),
            Role::Kitchen => None,
        }
    }
}

/// Work zone (used to filter schedule and reporting views)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "FLOOR_BAR")]
    FloorBar,
    #[serde(rename = "KITCHEN")]
    Kitchen,
}

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique slug identifier (derived from the name at creation)
    pub id: String,
    pub name: String,
    pub role: Role,
    pub zone: Zone,
    /// Gross hourly rate (before employer charges)
    pub hourly_rate: Decimal,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: Role,
    pub zone: Zone,
    pub hourly_rate: Decimal,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub zone: Option<Zone>,
    pub hourly_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_segments() {
        assert_eq!(Role::Owner.revenue_segment(), Some(RevenueSegment::Service));
        assert_eq!(
            Role::Manager.revenue_segment(),
            Some(RevenueSegment::Service)
        );
        assert_eq!(Role::Server.revenue_segment(), Some(RevenueSegment::Service));
        assert_eq!(Role::Bartender.revenue_segment(), Some(RevenueSegment::Bar));
        assert_eq!(Role::Kitchen.revenue_segment(), None);
    }

    #[test]
    fn test_role_serde_tags() {
        assert_eq!(serde_json::to_string(&Role::Bartender).unwrap(), "\"BARTENDER\"");
        assert_eq!(serde_json::to_string(&Zone::FloorBar).unwrap(), "\"FLOOR_BAR\"");
    }
}
