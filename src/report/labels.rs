use crate::i18n::{keys, Translator};

/// 보고서에 찍히는 문구 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub receipt_title: String,
    pub col_item: String,
    pub col_previous: String,
    pub col_current: String,
    pub col_used: String,
    pub col_unit_price: String,
    pub col_amount: String,
    pub room_fee: String,
    pub electricity: String,
    pub water: String,
    pub trash: String,
    pub surcharge: String,
    pub total: String,
    pub summary_title: String,
    pub col_room: String,
    pub col_total: String,
    pub col_note: String,
    pub grand_total: String,
    pub sheet_readings: String,
    pub sheet_totals: String,
    pub electricity_previous: String,
    pub electricity_current: String,
    pub electricity_used: String,
    pub water_previous: String,
    pub water_current: String,
    pub water_used: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::from_translator(&Translator::new("en"))
    }
}

impl ReportLabels {
    pub fn from_translator(tr: &Translator) -> Self {
        let t = |key: &str| tr.t(key);
        Self {
            receipt_title: t(keys::REPORT_RECEIPT_TITLE),
            col_item: t(keys::REPORT_COL_ITEM),
            col_previous: t(keys::REPORT_COL_PREVIOUS),
            col_current: t(keys::REPORT_COL_CURRENT),
            col_used: t(keys::REPORT_COL_USED),
            col_unit_price: t(keys::REPORT_COL_UNIT_PRICE),
            col_amount: t(keys::REPORT_COL_AMOUNT),
            room_fee: t(keys::REPORT_ROOM_FEE),
            electricity: t(keys::REPORT_ELECTRICITY),
            water: t(keys::REPORT_WATER),
            trash: t(keys::REPORT_TRASH),
            surcharge: t(keys::REPORT_SURCHARGE),
            total: t(keys::REPORT_TOTAL),
            summary_title: t(keys::REPORT_SUMMARY_TITLE),
            col_room: t(keys::REPORT_COL_ROOM),
            col_total: t(keys::REPORT_COL_TOTAL),
            col_note: t(keys::REPORT_COL_NOTE),
            grand_total: t(keys::REPORT_GRAND_TOTAL),
            sheet_readings: t(keys::REPORT_SHEET_READINGS),
            sheet_totals: t(keys::REPORT_SHEET_TOTALS),
            electricity_previous: t(keys::REPORT_ELECTRICITY_PREVIOUS),
            electricity_current: t(keys::REPORT_ELECTRICITY_CURRENT),
            electricity_used: t(keys::REPORT_ELECTRICITY_USED),
            water_previous: t(keys::REPORT_WATER_PREVIOUS),
            water_current: t(keys::REPORT_WATER_CURRENT),
            water_used: t(keys::REPORT_WATER_USED),
        }
    }
}
