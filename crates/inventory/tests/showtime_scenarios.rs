use boxoffice_core::Capacity;
use boxoffice_inventory::{InventoryLedger, RejectionReason};

const SHOWTIMES: [&str; 4] = ["10:00 AM", "1:00 PM", "4:00 PM", "7:00 PM"];

fn showtimes() -> InventoryLedger {
    InventoryLedger::uniform(SHOWTIMES, Capacity::DEFAULT).expect("default showtimes are valid")
}

#[test]
fn book_five_for_the_morning_show() {
    let mut ledger = showtimes();
    assert!(ledger.reserve("10:00 AM", 5));
    assert_eq!(ledger.remaining("10:00 AM"), Some(45));
}

#[test]
fn booking_more_than_capacity_is_rejected() {
    let mut ledger = showtimes();
    assert!(!ledger.reserve("1:00 PM", 100));
    assert_eq!(ledger.remaining("1:00 PM"), Some(50));

    assert!(!ledger.reserve("10:00 AM", 100));
    assert_eq!(ledger.remaining("10:00 AM"), Some(50));
}

#[test]
fn cancelling_part_of_a_booking_returns_tickets() {
    let mut ledger = showtimes();
    assert!(ledger.reserve("10:00 AM", 5));
    assert!(ledger.release("10:00 AM", 3));
    assert_eq!(ledger.remaining("10:00 AM"), Some(48));
}

#[test]
fn booking_another_show_is_independent() {
    let mut ledger = showtimes();
    assert!(ledger.reserve("1:00 PM", 2));
    assert_eq!(ledger.remaining("1:00 PM"), Some(48));
    assert_eq!(ledger.remaining("10:00 AM"), Some(50));
}

#[test]
fn cancelling_more_than_booked_is_rejected() {
    let mut ledger = showtimes();
    assert!(ledger.reserve("1:00 PM", 2));

    let err = ledger.try_release("1:00 PM", 5).unwrap_err();
    assert_eq!(err.reason(), RejectionReason::OverRelease);
    assert_eq!(ledger.remaining("1:00 PM"), Some(48));
}

#[test]
fn availability_for_known_and_unknown_showtimes() {
    let ledger = showtimes();
    assert!(ledger.is_available("10:00 AM"));
    assert!(!ledger.is_available("11:00 PM"));
}

#[test]
fn unknown_showtime_cannot_be_booked_or_cancelled() {
    let mut ledger = showtimes();
    assert!(!ledger.reserve("11:00 PM", 5));
    assert!(!ledger.release("11:00 PM", 2));
    assert_eq!(ledger.list_slots(), showtimes().list_slots());
}

#[test]
fn non_positive_bookings_are_rejected() {
    let mut ledger = showtimes();
    assert!(!ledger.reserve("10:00 AM", 0));
    assert!(!ledger.reserve("10:00 AM", -5));
    assert_eq!(ledger.remaining("10:00 AM"), Some(50));
}

#[test]
fn non_positive_cancellations_are_rejected() {
    let mut ledger = showtimes();
    assert!(ledger.reserve("10:00 AM", 5));

    assert!(!ledger.release("10:00 AM", 0));
    assert!(!ledger.release("10:00 AM", -3));
    assert_eq!(ledger.remaining("10:00 AM"), Some(45));
}
