//! Approval workflow demo: a validated request pipeline driving a
//! finite-state workflow, with the caller owning the workflow state.
//!
//! Run with: `cargo run --example approval_workflow`

use async_trait::async_trait;
use railyard::workflow::WorkflowEngine;
use railyard::{
    command_enum, state_enum, AuditTrail, Failure, Handler, Outcome, Pipeline, RequestLogger,
};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

state_enum! {
    pub enum ApprovalState {
        NotStarted,
        ApprovalRequested,
        Approved,
        Cancelled,
        Revoked,
        Expired,
    }
}

command_enum! {
    pub enum ApprovalCommand {
        Start,
        Approve,
        Reject,
        Cancel,
        Revoke,
        Expire,
    }
}

struct PurchaseOrder {
    description: String,
    amount: i64,
    state: Mutex<ApprovalState>,
}

impl PurchaseOrder {
    fn new(description: &str, amount: i64) -> Self {
        Self {
            description: description.to_string(),
            amount,
            state: Mutex::new(ApprovalState::NotStarted),
        }
    }

    fn state(&self) -> ApprovalState {
        self.state.lock().unwrap().clone()
    }

    fn set_state(&self, next: ApprovalState) {
        *self.state.lock().unwrap() = next;
    }
}

/// Orders under this amount need no human approval and short-circuit
/// straight to Approved: `Start` then `Approve`, chained with `and_then`.
const AUTO_APPROVE_LIMIT: i64 = 500;

struct RequestApproval {
    engine: Arc<WorkflowEngine<ApprovalState, ApprovalCommand>>,
}

#[async_trait]
impl Handler<PurchaseOrder, ApprovalState> for RequestApproval {
    async fn handle(
        &self,
        order: &PurchaseOrder,
        _cancel: &CancellationToken,
    ) -> Outcome<ApprovalState> {
        self.engine
            .get_next(&order.state(), &ApprovalCommand::Start)
            .tap_success(|next| order.set_state(next.clone()))
            .and_then(|requested| {
                if order.amount < AUTO_APPROVE_LIMIT {
                    self.engine
                        .get_next(&requested, &ApprovalCommand::Approve)
                        .tap_success(|next| order.set_state(next.clone()))
                } else {
                    Outcome::success(requested)
                }
            })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let engine = Arc::new(
        WorkflowEngine::builder()
            .add_transition(
                ApprovalState::NotStarted,
                ApprovalCommand::Start,
                ApprovalState::ApprovalRequested,
            )
            .add_transition(
                ApprovalState::NotStarted,
                ApprovalCommand::Cancel,
                ApprovalState::Cancelled,
            )
            .add_transition(
                ApprovalState::ApprovalRequested,
                ApprovalCommand::Approve,
                ApprovalState::Approved,
            )
            .add_transition(
                ApprovalState::ApprovalRequested,
                ApprovalCommand::Reject,
                ApprovalState::NotStarted,
            )
            .add_transition(
                ApprovalState::ApprovalRequested,
                ApprovalCommand::Cancel,
                ApprovalState::Cancelled,
            )
            .add_transition(
                ApprovalState::Approved,
                ApprovalCommand::Revoke,
                ApprovalState::Revoked,
            )
            .add_transition(
                ApprovalState::Approved,
                ApprovalCommand::Expire,
                ApprovalState::Expired,
            )
            .build()
            .expect("approval table is unambiguous"),
    );

    let trail = AuditTrail::new();
    let pipeline = Pipeline::new(RequestApproval {
        engine: Arc::clone(&engine),
    })
    .add_request_validator(|order: &PurchaseOrder| {
        if order.description.is_empty() {
            Outcome::fail(Failure::for_field("Description must not be empty", "description"))
        } else {
            Outcome::success(())
        }
    })
    .add_request_validator(|order: &PurchaseOrder| {
        if order.amount <= 0 {
            Outcome::fail(Failure::for_field("Amount must be positive", "amount"))
        } else {
            Outcome::success(())
        }
    })
    .add_post_processor(RequestLogger::new("request_approval"))
    .add_post_processor(trail.clone());

    let cancel = CancellationToken::new();

    // A small order auto-approves.
    let coffee = PurchaseOrder::new("office coffee", 120);
    pipeline.handle(&coffee, &cancel).await;
    println!("coffee order ended in state {:?}", coffee.state());

    // A large order waits for approval.
    let laptops = PurchaseOrder::new("team laptops", 12_000);
    pipeline.handle(&laptops, &cancel).await;
    println!("laptop order ended in state {:?}", laptops.state());

    // An invalid order is rejected with every problem reported at once.
    let bogus = PurchaseOrder::new("", -5);
    let rejected = pipeline.handle(&bogus, &cancel).await;
    for failure in rejected.failures() {
        println!("rejected: {failure}");
    }

    // Revoking an approved order is a plain engine query plus a tap.
    engine
        .get_next(&coffee.state(), &ApprovalCommand::Revoke)
        .tap_success(|next| coffee.set_state(next.clone()));
    println!("coffee order after revoke: {:?}", coffee.state());

    println!("audit trail holds {} records", trail.records().len());
}
