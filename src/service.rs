use tracing::info;

use crate::error::AppError;
use crate::repository::{ExpenseRepository, GroupRepository};
use crate::schemas::{Expense, Group, Settlement};
use crate::settlement;

/// Group registry with name uniqueness.
#[derive(Clone)]
pub struct GroupService {
    repo: GroupRepository,
}

impl GroupService {
    pub fn new(repo: GroupRepository) -> Self {
        Self { repo }
    }

    pub fn get_groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(self.repo.load_groups()?)
    }

    pub fn get_group_by_name(&self, name: &str) -> Result<Option<Group>, AppError> {
        Ok(self
            .repo
            .load_groups()?
            .into_iter()
            .find(|group| group.name == name))
    }

    pub fn add_group(&self, group: Group) -> Result<(), AppError> {
        if self.get_group_by_name(&group.name)?.is_some() {
            return Err(AppError::DuplicateGroup(group.name));
        }
        info!("registering group {}", group.name);
        self.repo.save_group(group)?;
        Ok(())
    }
}

/// Expense recording and settlement queries. Write-time checks keep every
/// expense attached to an existing group and a payer who is a member of it.
#[derive(Clone)]
pub struct ExpenseService {
    repo: ExpenseRepository,
    groups: GroupService,
}

impl ExpenseService {
    pub fn new(repo: ExpenseRepository, groups: GroupService) -> Self {
        Self { repo, groups }
    }

    pub fn add_expense(&self, expense: Expense) -> Result<(), AppError> {
        let group = self
            .groups
            .get_group_by_name(&expense.group_name)?
            .ok_or_else(|| AppError::GroupNotFound(expense.group_name.clone()))?;

        if !group.members.contains(&expense.payer) {
            return Err(AppError::PayerNotMember {
                group: expense.group_name,
                payer: expense.payer,
            });
        }

        info!(
            "registering expense {} of {} paid by {}",
            expense.expense_name, expense.amount, expense.payer
        );
        self.repo.save_expense(expense)?;
        Ok(())
    }

    pub fn get_settlements(&self, group_name: &str) -> Result<Vec<Settlement>, AppError> {
        let group = self
            .groups
            .get_group_by_name(group_name)?
            .ok_or_else(|| AppError::GroupNotFound(group_name.to_string()))?;

        let expenses: Vec<Expense> = self
            .repo
            .load_expenses()?
            .into_iter()
            .filter(|expense| expense.group_name == group_name)
            .collect();

        let settlements = settlement::settle(&group.members, &expenses);
        info!(
            "settling {} expenses for group {} into {} transfers",
            expenses.len(),
            group_name,
            settlements.len()
        );
        Ok(settlements)
    }
}
