use super::*;

fn table(id: &str, seats: u32) -> Table {
    Table {
        id: id.to_string(),
        name: id.to_uppercase(),
        shape: TableShape::Circle,
        seat_count: seats,
        position: Position::default(),
    }
}

fn seated(id: &str, table_id: &str, seat: u32) -> Guest {
    let mut guest = Guest::new(id, id);
    guest.table_id = Some(table_id.to_string());
    guest.seat_position = Some(seat);
    guest
}

#[test]
fn test_from_snapshot_roundtrip() {
    let snapshot = SeatingSnapshot {
        tables: vec![table("t1", 4), table("t2", 8)],
        guests: vec![seated("g1", "t1", 2), Guest::new("g2", "g2")],
    };

    let planner = SeatingPlanner::from_snapshot(test_config(), snapshot.clone()).unwrap();
    assert_eq!(planner.snapshot(), snapshot);
    assert_eq!(planner.unseated_guests().len(), 1);
    assert!(planner.is_seat_occupied("t1", 2));
}

#[test]
fn test_spec_scenario_from_seeded_data() {
    let snapshot = SeatingSnapshot {
        tables: vec![table("T1", 4), table("T2", 8)],
        guests: vec![seated("G1", "T1", 2)],
    };
    let mut planner = SeatingPlanner::from_snapshot(test_config(), snapshot).unwrap();

    assert!(matches!(
        planner.assign_guest_to_seat("G1", "T1", 5),
        Err(SeatingError::InvalidSeat { .. })
    ));
    assert_eq!(planner.guest("G1").unwrap().seat(), Some(("T1", 2)));

    assert!(planner.is_seated_elsewhere("G1", "T2"));
    planner.assign_guest_to_seat("G1", "T2", 1).unwrap();

    let guest = planner.guest("G1").unwrap();
    assert_eq!(guest.table_id.as_deref(), Some("T2"));
    assert_eq!(guest.seat_position, Some(1));
    assert!(
        planner
            .guests_at_table("T1")
            .unwrap()
            .iter()
            .all(|g| g.id != "G1")
    );
}

#[test]
fn test_new_tables_after_seed_continue_layout() {
    let snapshot = SeatingSnapshot {
        tables: vec![table("t1", 4), table("t2", 4)],
        guests: vec![],
    };
    let mut planner = SeatingPlanner::from_snapshot(test_config(), snapshot).unwrap();
    let t3 = add_table(&mut planner, "T3", 4);
    assert_eq!(planner.table(&t3).unwrap().position, Position::new(400.0, 0.0));
}

#[test]
fn test_from_snapshot_rejects_inconsistent_data() {
    let cases = vec![
        // duplicate seat
        SeatingSnapshot {
            tables: vec![table("t1", 4)],
            guests: vec![seated("g1", "t1", 1), seated("g2", "t1", 1)],
        },
        // seat out of range
        SeatingSnapshot {
            tables: vec![table("t1", 4)],
            guests: vec![seated("g1", "t1", 5)],
        },
        // dangling table
        SeatingSnapshot {
            tables: vec![],
            guests: vec![seated("g1", "t1", 1)],
        },
        // duplicate guest id
        SeatingSnapshot {
            tables: vec![],
            guests: vec![Guest::new("g1", "a"), Guest::new("g1", "b")],
        },
        // duplicate table id
        SeatingSnapshot {
            tables: vec![table("t1", 4), table("t1", 6)],
            guests: vec![],
        },
        // seatless table
        SeatingSnapshot {
            tables: vec![table("t1", 0)],
            guests: vec![],
        },
        // table without seat
        SeatingSnapshot {
            tables: vec![table("t1", 4)],
            guests: vec![{
                let mut g = Guest::new("g1", "a");
                g.table_id = Some("t1".into());
                g
            }],
        },
        // seat without table
        SeatingSnapshot {
            tables: vec![table("t1", 4)],
            guests: vec![{
                let mut g = Guest::new("g1", "a");
                g.seat_position = Some(1);
                g
            }],
        },
    ];

    for snapshot in cases {
        let err = SeatingPlanner::from_snapshot(test_config(), snapshot.clone()).unwrap_err();
        assert!(
            matches!(err, SeatingError::InvalidData(_)),
            "expected InvalidData for {snapshot:?}, got {err:?}"
        );
        let app: shared::AppError = err.into();
        assert_eq!(app.code, shared::ErrorCode::InvalidSeatingData);
    }
}
