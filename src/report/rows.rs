//! 내보내기용으로 정렬·가공한 행 데이터.

use crate::billing::RoomRecord;
use crate::currency::format_currency;
use crate::ledger::RoomLedger;

use super::{ReportError, ReportLabels};

/// 영수증의 한 줄. 해당 없는 칸은 None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub label: String,
    pub previous: Option<u64>,
    pub current: Option<u64>,
    pub used: Option<u64>,
    pub unit_price: Option<u64>,
    pub amount: u64,
}

/// 방 하나의 영수증.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub room: String,
    pub lines: Vec<ReceiptLine>,
    pub total: u64,
}

/// 엑셀 첫 번째 시트(지침/사용량) 한 행.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRow {
    pub room: String,
    pub electricity_previous: u64,
    pub electricity_current: u64,
    pub electricity_used: u64,
    pub water_previous: u64,
    pub water_current: u64,
    pub water_used: u64,
}

/// 요약표 한 행. 비고 칸은 손으로 적도록 비워 둔다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub room: String,
    pub total: u64,
    pub total_display: String,
    pub note: String,
}

/// 정렬된 레코드 목록. 비어 있으면 내보내기를 거부한다.
pub fn export_records(ledger: &RoomLedger) -> Result<Vec<&RoomRecord>, ReportError> {
    if ledger.is_empty() {
        return Err(ReportError::EmptyLedger);
    }
    Ok(ledger.all_records())
}

pub fn receipt(record: &RoomRecord, labels: &ReportLabels) -> Receipt {
    let c = &record.charges;
    let mut lines = vec![
        ReceiptLine {
            label: labels.room_fee.clone(),
            previous: None,
            current: None,
            used: None,
            unit_price: Some(c.room_fee),
            amount: c.room_fee,
        },
        ReceiptLine {
            label: labels.electricity.clone(),
            previous: Some(record.electricity.previous),
            current: Some(record.electricity.current),
            used: Some(c.electricity_used),
            unit_price: Some(record.electricity_unit_price),
            amount: c.electricity_charge,
        },
        ReceiptLine {
            label: labels.water.clone(),
            previous: Some(record.water.previous),
            current: Some(record.water.current),
            used: Some(c.water_used),
            unit_price: Some(record.water_unit_price),
            amount: c.water_charge,
        },
        ReceiptLine {
            label: labels.trash.clone(),
            previous: None,
            current: None,
            used: None,
            unit_price: None,
            amount: c.trash_fee,
        },
    ];
    if let Some(surcharge) = c.surcharge {
        lines.push(ReceiptLine {
            label: labels.surcharge.clone(),
            previous: None,
            current: None,
            used: None,
            unit_price: None,
            amount: surcharge,
        });
    }
    Receipt {
        room: record.name.clone(),
        lines,
        total: c.total,
    }
}

pub fn receipts(ledger: &RoomLedger, labels: &ReportLabels) -> Result<Vec<Receipt>, ReportError> {
    Ok(export_records(ledger)?
        .into_iter()
        .map(|r| receipt(r, labels))
        .collect())
}

pub fn reading_rows(ledger: &RoomLedger) -> Result<Vec<ReadingRow>, ReportError> {
    Ok(export_records(ledger)?
        .into_iter()
        .map(|r| ReadingRow {
            room: r.name.clone(),
            electricity_previous: r.electricity.previous,
            electricity_current: r.electricity.current,
            electricity_used: r.charges.electricity_used,
            water_previous: r.water.previous,
            water_current: r.water.current,
            water_used: r.charges.water_used,
        })
        .collect())
}

pub fn summary_rows(ledger: &RoomLedger) -> Result<Vec<SummaryRow>, ReportError> {
    Ok(export_records(ledger)?
        .into_iter()
        .map(|r| SummaryRow {
            room: r.name.clone(),
            total: r.total(),
            total_display: format_currency(r.total()),
            note: String::new(),
        })
        .collect())
}
