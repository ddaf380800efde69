//! 방 목록 upsert/정렬 테스트.
use room_billing_toolbox::billing::{MeterReading, RateConfig, RoomReadings};
use room_billing_toolbox::ledger::UpsertOutcome;
use room_billing_toolbox::session::{RoomForm, Session};

fn save(session: &mut Session, name: &str, used: u64) -> UpsertOutcome {
    let form = RoomForm {
        name: name.to_string(),
        readings: RoomReadings {
            electricity: MeterReading::new(0, used),
            water: MeterReading::default(),
        },
    };
    session.save_room(&form).expect("room saved").0
}

fn names(session: &Session) -> Vec<String> {
    session
        .ledger()
        .all_records()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn plain_rooms_first_then_suffix_groups() {
    let mut s = Session::new(RateConfig::default());
    for name in ["2", "1A", "10", "1B", "3", "1"] {
        save(&mut s, name, 1);
    }
    assert_eq!(names(&s), vec!["1", "2", "3", "10", "1A", "1B"]);
}

#[test]
fn case_only_change_updates_in_place() {
    let mut s = Session::new(RateConfig::default());
    save(&mut s, "5b", 1);
    save(&mut s, "6", 1);
    assert_eq!(save(&mut s, "5B", 9), UpsertOutcome::Updated);
    assert_eq!(s.ledger().len(), 2);
    assert_eq!(s.ledger().insertion_order()[0].name, "5B");
    assert_eq!(s.ledger().insertion_order()[0].charges.electricity_used, 9);
}

#[test]
fn rank_follows_observed_suffixes() {
    let mut s = Session::new(RateConfig::default());
    for name in ["3C", "1", "2C", "9A"] {
        save(&mut s, name, 1);
    }
    // A가 C보다 먼저, 같은 묶음 안에서는 번호 순
    assert_eq!(names(&s), vec!["1", "9A", "2C", "3C"]);
}

#[test]
fn blank_name_is_not_saved() {
    let mut s = Session::new(RateConfig::default());
    let form = RoomForm {
        name: " \t ".into(),
        readings: RoomReadings::default(),
    };
    assert!(s.save_room(&form).is_err());
    assert!(s.ledger().is_empty());
}
