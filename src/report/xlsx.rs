//! 두 시트짜리 엑셀 파일을 만든다.

use rust_xlsxwriter::{Format, Workbook};

use crate::ledger::RoomLedger;

use super::{rows, ReportError, ReportLabels};

/// 1번 시트: 방별 지침/사용량, 2번 시트: 방/합계/비고.
pub fn render_workbook(ledger: &RoomLedger, labels: &ReportLabels) -> Result<Vec<u8>, ReportError> {
    let readings = rows::reading_rows(ledger)?;
    let summary = rows::summary_rows(ledger)?;
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(&labels.sheet_readings)?;
    let columns = [
        &labels.col_room,
        &labels.electricity_previous,
        &labels.electricity_current,
        &labels.electricity_used,
        &labels.water_previous,
        &labels.water_current,
        &labels.water_used,
    ];
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, title.as_str(), &header)?;
    }
    for (i, row) in readings.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.room)?;
        let values = [
            row.electricity_previous,
            row.electricity_current,
            row.electricity_used,
            row.water_previous,
            row.water_current,
            row.water_used,
        ];
        for (offset, value) in values.iter().enumerate() {
            sheet.write_number(r, offset as u16 + 1, *value as f64)?;
        }
    }
    sheet.set_column_width(0, 14)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(&labels.sheet_totals)?;
    let columns = [&labels.col_room, &labels.col_total, &labels.col_note];
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, title.as_str(), &header)?;
    }
    for (i, row) in summary.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.room)?;
        sheet.write_string(r, 1, &row.total_display)?;
        sheet.write_string(r, 2, &row.note)?;
    }
    sheet.set_column_width(0, 14)?;
    sheet.set_column_width(1, 16)?;
    sheet.set_column_width(2, 30)?;

    Ok(workbook.save_to_buffer()?)
}
