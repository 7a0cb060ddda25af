use serde::{Deserialize, Serialize};

pub type MemberName = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub name: String,
    pub members: Vec<MemberName>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub group_name: String,
    pub expense_name: String,
    pub payer: MemberName,
    pub amount: i64,
}

/// A directed transfer that reduces a net-balance debt. Derived from the
/// recorded expenses, never persisted.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Settlement {
    pub from: MemberName,
    pub to: MemberName,
    pub amount: i64,
}
