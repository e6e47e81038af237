//! Navigation surface
//!
//! Every view is addressed by a path. Everything under `/dashboard` sits
//! behind the auth guard.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unknown path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Leads,
    Sales,
    Employees,
    Leaves,
    PendingLeaves,
    Expenses,
    Warehouse,
    Returns,
    Trainers,
    DeliveryChallans,
}

impl Route {
    pub const ALL: [Self; 13] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Leads,
        Self::Sales,
        Self::Employees,
        Self::Leaves,
        Self::PendingLeaves,
        Self::Expenses,
        Self::Warehouse,
        Self::Returns,
        Self::Trainers,
        Self::DeliveryChallans,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::Dashboard => "/dashboard",
            Self::Leads => "/dashboard/leads",
            Self::Sales => "/dashboard/sales",
            Self::Employees => "/dashboard/employees",
            Self::Leaves => "/dashboard/leaves",
            Self::PendingLeaves => "/dashboard/leaves/pending",
            Self::Expenses => "/dashboard/expenses",
            Self::Warehouse => "/dashboard/warehouse",
            Self::Returns => "/dashboard/warehouse/returns",
            Self::Trainers => "/dashboard/trainers",
            Self::DeliveryChallans => "/dashboard/delivery-challans",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Leads => "Leads",
            Self::Sales => "Sales",
            Self::Employees => "Employees",
            Self::Leaves => "Leave requests",
            Self::PendingLeaves => "Pending leave requests",
            Self::Expenses => "Expenses",
            Self::Warehouse => "Warehouse",
            Self::Returns => "Returns",
            Self::Trainers => "Trainers",
            Self::DeliveryChallans => "Delivery challans",
        }
    }

    /// Behind the auth guard.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Visible only to roles that manage staff.
    pub fn requires_staff_role(self) -> bool {
        matches!(self, Self::Employees | Self::Expenses)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Accepts paths with or without the leading slash, a trailing slash and
    /// a query string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
        let normalized = format!("/{}", without_query.trim_matches('/')).to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| UnknownRoute(trimmed.to_string()))
    }
}
