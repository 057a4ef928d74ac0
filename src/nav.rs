//! Role-based navigation model, as data. The original duplicated its menu
//! markup on every page; here each page asks for the items its role can see.

use serde::Serialize;

use crate::session::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
}

const EMPLOYEE_NAV: &[NavItem] = &[
    NavItem { label: "Create Warehouse Receipt", route: "/wr/create" },
    NavItem { label: "View Warehouse Receipts", route: "/wr" },
    NavItem { label: "Create Purchase Order", route: "/po/create" },
    NavItem { label: "View Purchase Orders", route: "/po" },
    NavItem { label: "Create Material Receipt", route: "/mr/create" },
    NavItem { label: "View Material Receipts", route: "/mr" },
    NavItem { label: "Client Summary", route: "/clients/summary" },
];

const CLIENT_NAV: &[NavItem] = &[
    NavItem { label: "My Receipts", route: "/wr" },
    NavItem { label: "PO Fulfillment", route: "/po/fulfillment" },
];

pub fn items_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Employee => EMPLOYEE_NAV,
        Role::Client => CLIENT_NAV,
    }
}
