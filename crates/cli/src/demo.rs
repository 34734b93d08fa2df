//! The scripted booking walkthrough.

use serde::Serialize;

use boxoffice_inventory::{InventoryLedger, RejectionReason, SlotSnapshot};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Reserve,
    Release,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub slot: &'static str,
    pub quantity: i64,
}

const fn step(action: Action, slot: &'static str, quantity: i64) -> Step {
    Step {
        action,
        slot,
        quantity,
    }
}

/// Bookings and cancellations applied by `boxoffice demo`, in order.
pub const SCRIPT: [Step; 5] = [
    step(Action::Reserve, "10:00 AM", 5),
    step(Action::Reserve, "1:00 PM", 100),
    step(Action::Reserve, "1:00 PM", 2),
    step(Action::Release, "10:00 AM", 3),
    step(Action::Release, "1:00 PM", 5),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub action: Action,
    pub slot: String,
    pub quantity: i64,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub before: Vec<SlotSnapshot>,
    pub steps: Vec<StepOutcome>,
    pub after: Vec<SlotSnapshot>,
}

/// Apply one step and describe the result.
pub fn apply(ledger: &mut InventoryLedger, step: Step) -> StepOutcome {
    let result = match step.action {
        Action::Reserve => ledger.try_reserve(step.slot, step.quantity),
        Action::Release => ledger.try_release(step.slot, step.quantity),
    };

    let (reason, message) = match result {
        Ok(_) => {
            let verb = match step.action {
                Action::Reserve => "booked",
                Action::Release => "cancelled",
            };
            (
                None,
                format!(
                    "{} tickets successfully {verb} for {}",
                    step.quantity, step.slot
                ),
            )
        }
        Err(err) => (Some(err.reason()), err.to_string()),
    };

    StepOutcome {
        action: step.action,
        slot: step.slot.to_string(),
        quantity: step.quantity,
        accepted: reason.is_none(),
        reason,
        message,
    }
}

/// Run [`SCRIPT`] against `ledger`, capturing the listing before and after.
pub fn run(ledger: &mut InventoryLedger) -> DemoReport {
    let before = ledger.list_slots();
    let steps = SCRIPT.iter().map(|&s| apply(ledger, s)).collect();
    let after = ledger.list_slots();

    DemoReport {
        before,
        steps,
        after,
    }
}
