use super::*;
use shared::models::TableShape;

fn test_config() -> PlannerConfig {
    PlannerConfig::builtin()
}

fn create_test_planner() -> SeatingPlanner {
    shared::logger::init_test_logger();
    SeatingPlanner::new(test_config())
}

// ========================================================================
// Helper: planner with tables and guests
// ========================================================================

fn add_table(planner: &mut SeatingPlanner, name: &str, seats: u32) -> String {
    planner
        .add_table(TableCreate::new(name, TableShape::Circle).with_seats(seats))
        .unwrap()
        .id
}

fn add_guest(planner: &mut SeatingPlanner, name: &str) -> String {
    planner.add_guest(name).unwrap().id
}

fn seat(planner: &mut SeatingPlanner, guest_id: &str, table_id: &str, seat: u32) {
    planner
        .assign_guest_to_seat(guest_id, table_id, seat)
        .unwrap_or_else(|e| panic!("Failed to seat {guest_id} at {table_id}/{seat}: {e}"));
}

/// Invariants checked after every mutation in the tests
fn assert_consistent(planner: &SeatingPlanner) {
    planner.verify().expect("seating invariants violated");
    for guest in planner.guests() {
        assert_eq!(
            guest.table_id.is_none(),
            guest.seat_position.is_none(),
            "guest {} has half a seat",
            guest.id
        );
    }
}

mod test_snapshot;
