//! 세션 동안 유지되는 방별 청구 목록.

use crate::billing::{normalize_room_key, RoomRecord};
use crate::room_sort;

/// upsert 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// 새 방이 뒤에 추가됨
    Inserted,
    /// 같은 이름(대소문자 무시)의 방을 제자리에서 교체함
    Updated,
}

/// 입력 순서대로 레코드를 보관한다. 정렬은 읽을 때마다 다시 계산한다.
#[derive(Debug, Clone, Default)]
pub struct RoomLedger {
    records: Vec<RoomRecord>,
}

impl RoomLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이름이 같은 방이 있으면 그 위치에서 교체하고, 없으면 뒤에 추가한다.
    pub fn upsert(&mut self, record: RoomRecord) -> UpsertOutcome {
        self.upsert_and_get(record).0
    }

    /// [`upsert`](Self::upsert)와 같고, 저장된 레코드를 함께 돌려준다.
    pub fn upsert_and_get(&mut self, record: RoomRecord) -> (UpsertOutcome, &RoomRecord) {
        let key = record.key();
        match self.records.iter().position(|r| r.key() == key) {
            Some(idx) => {
                self.records[idx] = record;
                (UpsertOutcome::Updated, &self.records[idx])
            }
            None => {
                self.records.push(record);
                let idx = self.records.len() - 1;
                (UpsertOutcome::Inserted, &self.records[idx])
            }
        }
    }

    /// 정렬 규칙대로 정렬한 레코드 목록.
    pub fn all_records(&self) -> Vec<&RoomRecord> {
        let names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        room_sort::sorted_order(&names)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// 입력 순서 그대로의 레코드.
    pub fn insertion_order(&self) -> &[RoomRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&RoomRecord> {
        let key = normalize_room_key(name);
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 전체 방 합계 금액.
    pub fn grand_total(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{compute_bill, MeterReading, RateConfig, RoomReadings};

    fn record(name: &str, used: u64) -> RoomRecord {
        let readings = RoomReadings {
            electricity: MeterReading::new(0, used),
            water: MeterReading::default(),
        };
        compute_bill(name, &readings, &RateConfig::default(), false)
    }

    #[test]
    fn upsert_appends_new_names() {
        let mut ledger = RoomLedger::new();
        assert_eq!(ledger.upsert(record("1", 10)), UpsertOutcome::Inserted);
        assert_eq!(ledger.upsert(record("2", 10)), UpsertOutcome::Inserted);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn upsert_replaces_case_insensitively_in_place() {
        let mut ledger = RoomLedger::new();
        ledger.upsert(record("3a", 10));
        ledger.upsert(record("5", 10));
        assert_eq!(ledger.upsert(record("3A", 40)), UpsertOutcome::Updated);
        assert_eq!(ledger.len(), 2);
        let stored = &ledger.insertion_order()[0];
        assert_eq!(stored.name, "3A");
        assert_eq!(stored.charges.electricity_used, 40);
        assert!(ledger.get("3a").is_some());
    }

    #[test]
    fn all_records_are_sorted_at_read_time() {
        let mut ledger = RoomLedger::new();
        for name in ["2", "1A", "10", "1B", "3"] {
            ledger.upsert(record(name, 1));
        }
        let names: Vec<&str> = ledger.all_records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["2", "3", "10", "1A", "1B"]);
        // 저장 순서는 그대로다.
        assert_eq!(ledger.insertion_order()[0].name, "2");
        assert_eq!(ledger.insertion_order()[1].name, "1A");
    }

    #[test]
    fn grand_total_sums_every_room() {
        let mut ledger = RoomLedger::new();
        ledger.upsert(record("1", 0));
        ledger.upsert(record("2", 10));
        let expected: u64 = ledger.insertion_order().iter().map(|r| r.total()).sum();
        assert_eq!(ledger.grand_total(), expected);
        assert!(RoomLedger::new().grand_total() == 0);
    }
}
