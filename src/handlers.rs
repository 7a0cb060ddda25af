use std::collections::HashSet;
use std::path::Path;

use actix_web::{get, post, web, HttpResponse};

use crate::error::AppError;
use crate::repository::{ExpenseRepository, GroupRepository};
use crate::schemas::{Expense, Group};
use crate::service::{ExpenseService, GroupService};

/// Shared application state: one service per entity, both reading the flat
/// files under the configured data directory.
pub struct AppState {
    pub groups: GroupService,
    pub expenses: ExpenseService,
}

impl AppState {
    pub fn new(data_dir: &Path) -> Self {
        let groups = GroupService::new(GroupRepository::new(data_dir.join("groups.json")));
        let expenses = ExpenseService::new(
            ExpenseRepository::new(data_dir.join("expenses.json")),
            groups.clone(),
        );
        Self { groups, expenses }
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(add_group)
        .service(get_group_list)
        .service(get_group_by_name)
        .service(add_expense)
        .service(get_settlements);
}

// One message per broken rule, in rule order, so a client can show them all
// at once.
fn validate_group(group: &Group) -> Vec<String> {
    let mut messages = Vec::new();
    if group.name.is_empty() {
        messages.push("group name is required".to_string());
    }
    if group.members.len() < 2 {
        messages.push("a group needs at least two members".to_string());
    }
    let unique: HashSet<&String> = group.members.iter().collect();
    if unique.len() != group.members.len() {
        messages.push("member names must be unique".to_string());
    }
    messages
}

fn validate_expense(expense: &Expense) -> Vec<String> {
    let mut messages = Vec::new();
    if expense.group_name.is_empty() {
        messages.push("group name is required".to_string());
    }
    if expense.expense_name.is_empty() {
        messages.push("expense name is required".to_string());
    }
    if expense.payer.is_empty() {
        messages.push("payer is required".to_string());
    }
    if expense.amount < 1 {
        messages.push("amount must be an integer of at least 1".to_string());
    }
    messages
}

#[post("/groups")]
async fn add_group(
    state: web::Data<AppState>,
    json: web::Json<Group>,
) -> Result<HttpResponse, AppError> {
    let group = json.into_inner();
    let messages = validate_group(&group);
    if !messages.is_empty() {
        return Err(AppError::Validation(messages));
    }

    state.groups.add_group(group)?;
    Ok(HttpResponse::Ok().body("group registered"))
}

#[get("/groups")]
async fn get_group_list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let groups = state.groups.get_groups()?;
    Ok(HttpResponse::Ok().json(groups))
}

#[get("/groups/{name}")]
async fn get_group_by_name(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = name.into_inner();
    match state.groups.get_group_by_name(&name)? {
        Some(group) => Ok(HttpResponse::Ok().json(group)),
        None => Err(AppError::GroupNotFound(name)),
    }
}

#[post("/expenses")]
async fn add_expense(
    state: web::Data<AppState>,
    json: web::Json<Expense>,
) -> Result<HttpResponse, AppError> {
    let expense = json.into_inner();
    let messages = validate_expense(&expense);
    if !messages.is_empty() {
        return Err(AppError::Validation(messages));
    }

    state.expenses.add_expense(expense)?;
    Ok(HttpResponse::Ok().body("expense registered"))
}

#[get("/expenses/{group_name}/settlements")]
async fn get_settlements(
    state: web::Data<AppState>,
    group_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let settlements = state.expenses.get_settlements(&group_name)?;
    Ok(HttpResponse::Ok().json(settlements))
}
