//! PDF 영수증/요약표와 엑셀 내보내기.

pub mod labels;
pub mod layout;
pub mod pdf;
pub mod rows;
pub mod xlsx;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};

pub use labels::ReportLabels;

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ReportError {
    /// 저장된 방이 하나도 없음
    EmptyLedger,
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// PDF 생성 오류
    Pdf(printpdf::Error),
    /// 엑셀 생성 오류
    Xlsx(rust_xlsxwriter::XlsxError),
    /// 내장 PDF 글꼴로 찍을 수 없는 글자가 포함된 문자열
    MissingGlyphs(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::EmptyLedger => write!(f, "내보낼 방 데이터가 없습니다."),
            ReportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ReportError::Pdf(e) => write!(f, "PDF 생성 오류: {e}"),
            ReportError::Xlsx(e) => write!(f, "엑셀 생성 오류: {e}"),
            ReportError::MissingGlyphs(text) => write!(
                f,
                "내장 PDF 글꼴로 표시할 수 없는 글자가 있습니다: '{text}'. 설정에서 TTF 글꼴을 지정하세요."
            ),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        ReportError::Io(value)
    }
}

impl From<printpdf::Error> for ReportError {
    fn from(value: printpdf::Error) -> Self {
        ReportError::Pdf(value)
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Xlsx(value)
    }
}

/// 영수증 배치 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptLayout {
    /// 항목/이전/현재/사용량/단가/금액 표
    #[default]
    Table,
    /// 항목마다 한 줄씩 문장형으로
    Paragraph,
}

/// 내보내기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Receipts,
    Summary,
    Spreadsheet,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Receipts | ExportKind::Summary => "pdf",
            ExportKind::Spreadsheet => "xlsx",
        }
    }

    /// 기준 날짜의 월-연도를 붙인 기본 파일명.
    pub fn default_file_name(&self, date: NaiveDate) -> String {
        let stem = match self {
            ExportKind::Receipts => "room_receipts",
            ExportKind::Summary => "room_summary",
            ExportKind::Spreadsheet => "room_billing",
        };
        format!(
            "{stem}_{:02}-{}.{}",
            date.month(),
            date.year(),
            self.extension()
        )
    }

    /// 오늘 날짜 기준 기본 경로.
    pub fn default_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.default_file_name(chrono::Local::now().date_naive()))
    }
}

/// 생성한 바이트를 파일로 쓴다.
pub fn write_export(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    info!("export written to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_carry_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            ExportKind::Receipts.default_file_name(date),
            "room_receipts_03-2026.pdf"
        );
        assert_eq!(
            ExportKind::Spreadsheet.default_file_name(date),
            "room_billing_03-2026.xlsx"
        );
    }
}
