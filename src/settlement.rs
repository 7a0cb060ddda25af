use std::collections::HashMap;

use crate::schemas::{Expense, MemberName, Settlement};

/// Net balance per member: total paid minus the member's share of the group
/// total. Positive means the group owes the member.
pub type Balances = HashMap<MemberName, i64>;

#[derive(Clone, Debug)]
struct MemberBalance {
    member: MemberName,
    amount: i64,
}

pub fn compute_balances(members: &[MemberName], expenses: &[Expense]) -> Balances {
    if members.is_empty() {
        return Balances::new();
    }

    let total: i64 = expenses.iter().map(|e| e.amount).sum();
    let n = members.len() as i64;
    let base_share = total / n;
    let remainder = total % n;

    // The division remainder is borne one unit each by the first members in
    // name order, so every total splits into exact integer shares.
    let mut ordered: Vec<&MemberName> = members.iter().collect();
    ordered.sort();

    let mut balances = Balances::new();
    for (i, member) in ordered.into_iter().enumerate() {
        let share = if (i as i64) < remainder {
            base_share + 1
        } else {
            base_share
        };
        balances.insert(member.clone(), -share);
    }

    for expense in expenses {
        balances
            .entry(expense.payer.clone())
            .and_modify(|balance| *balance += expense.amount)
            .or_insert(expense.amount);
    }

    balances
}

// Largest balance last so the vector tails are the greedy pick; the name
// tie-break keeps equal inputs settling identically.
fn sort_for_matching(balances: &mut [MemberBalance]) {
    balances.sort_by(|a, b| {
        a.amount
            .cmp(&b.amount)
            .then_with(|| b.member.cmp(&a.member))
    });
}

fn match_transfers(
    mut debtors: Vec<MemberBalance>,
    mut creditors: Vec<MemberBalance>,
) -> Vec<Settlement> {
    let mut settlements = Vec::new();

    while let (Some(debtor), Some(creditor)) = (debtors.last_mut(), creditors.last_mut()) {
        let amount = debtor.amount.min(creditor.amount);
        settlements.push(Settlement {
            from: debtor.member.clone(),
            to: creditor.member.clone(),
            amount,
        });

        debtor.amount -= amount;
        creditor.amount -= amount;
        if debtor.amount == 0 {
            debtors.pop();
        }
        if creditor.amount == 0 {
            creditors.pop();
        }
    }

    settlements
}

/// Compute the transfers that zero out every member's net balance, matching
/// the largest creditor against the largest debtor until none remain.
pub fn settle(members: &[MemberName], expenses: &[Expense]) -> Vec<Settlement> {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (member, balance) in compute_balances(members, expenses) {
        let entry = MemberBalance {
            member,
            amount: balance.abs(),
        };
        if balance < 0 {
            debtors.push(entry);
        } else if balance > 0 {
            creditors.push(entry);
        }
    }

    sort_for_matching(&mut debtors);
    sort_for_matching(&mut creditors);
    match_transfers(debtors, creditors)
}
