use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use shared::{
    CreateExpenseRequest, ErrorCode, ErrorResponse, Expense, ExpenseListResponse, TotalResponse,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::models::expense::Expense as DomainExpense;
use crate::domain::{AddExpenseCommand, ExpenseError, ExpenseStore, ExpenseTableService};

/// Application state shared across handlers.
///
/// The store itself is synchronous; the mutex serialises all operations so
/// id assignment and membership changes stay linearizable under concurrent
/// requests, and reads see a consistent snapshot.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ExpenseStore>>,
    pub table: ExpenseTableService,
}

impl AppState {
    pub fn new(table: ExpenseTableService) -> Self {
        Self {
            store: Arc::new(Mutex::new(ExpenseStore::new())),
            table,
        }
    }
}

/// The `/api` route tree, shared by `main` and the handler tests.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(create_expense).get(list_expenses))
        .route("/expenses/total", get(get_total))
        .route("/expenses/:id", delete(delete_expense))
}

/// Axum handler function for POST /api/expenses
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - title: {:?}", request.title);

    let command = AddExpenseCommand {
        title: request.title,
        amount: request.amount,
        category: request.category,
        date: None,
    };

    let mut store = state.store.lock().await;
    match store.add(command) {
        Ok(expense) => {
            let highlighted = store.is_highlighted(&expense);
            (StatusCode::CREATED, Json(to_dto(&expense, highlighted))).into_response()
        }
        Err(e) => {
            info!("Rejected expense: {}", e);
            error_response(e).into_response()
        }
    }
}

/// Axum handler function for DELETE /api/expenses/:id
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", id);

    let mut store = state.store.lock().await;
    match store.remove(id) {
        Ok(expense) => {
            let highlighted = store.is_highlighted(&expense);
            (StatusCode::OK, Json(to_dto(&expense, highlighted))).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

/// Axum handler function for GET /api/expenses
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    let store = state.store.lock().await;
    let expenses = state.table.format_expenses_for_table(&store.list(), &store);
    let response = ExpenseListResponse {
        count: expenses.len(),
        expenses,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Axum handler function for GET /api/expenses/total
pub async fn get_total(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses/total");

    let store = state.store.lock().await;
    let total = store.total();
    let response = TotalResponse {
        total,
        formatted: state.table.format_amount(total),
        count: store.len(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn to_dto(expense: &DomainExpense, highlighted: bool) -> Expense {
    Expense {
        id: expense.id,
        title: expense.title.clone(),
        amount: expense.amount,
        category: expense.category.clone(),
        date: expense.created_at.to_rfc3339(),
        highlighted,
    }
}

fn error_response(error: ExpenseError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match error {
        ExpenseError::InvalidTitle => (StatusCode::BAD_REQUEST, ErrorCode::InvalidTitle),
        ExpenseError::InvalidAmount => (StatusCode::BAD_REQUEST, ErrorCode::InvalidAmount),
        ExpenseError::InvalidCategory => (StatusCode::BAD_REQUEST, ErrorCode::InvalidCategory),
        ExpenseError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
    };
    (
        status,
        Json(ErrorResponse {
            code,
            message: error.to_string(),
        }),
    )
}
