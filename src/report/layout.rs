//! PDF에 그릴 요소를 페이지 단위로 배치한다. 좌표는 mm, 원점은 왼쪽 아래.

use crate::currency::format_currency;

use super::rows::{Receipt, ReceiptLine, SummaryRow};
use super::{ReceiptLayout, ReportLabels};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 10.0;
const ROW_HEIGHT_MM: f32 = 7.0;
const TITLE_GAP_MM: f32 = 10.0;
const BLOCK_GAP_MM: f32 = 12.0;
/// 한 장에 들어가는 영수증 수.
pub const RECEIPTS_PER_PAGE: usize = 2;

/// 영수증 표의 열 시작 위치.
const RECEIPT_COLUMNS_MM: [f32; 6] = [20.0, 52.0, 73.0, 94.0, 115.0, 143.0];
const RECEIPT_RIGHT_MM: f32 = 180.0;
/// 요약표의 열 시작 위치(방, 합계, 비고).
const SUMMARY_COLUMNS_MM: [f32; 3] = [20.0, 70.0, 120.0];
const SUMMARY_RIGHT_MM: f32 = 190.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: String,
    },
    /// 수평선
    Rule { x1: f32, x2: f32, y: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageModel {
    pub items: Vec<DrawItem>,
}

impl PageModel {
    /// 페이지에 찍힌 글자만 모은다.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text { text, .. } => Some(text.as_str()),
            DrawItem::Rule { .. } => None,
        })
    }
}

/// 위에서 아래로 내려가며 요소를 쌓고, 공간이 모자라면 새 페이지를 연다.
struct PageBuilder {
    pages: Vec<PageModel>,
    y: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: vec![PageModel::default()],
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(PageModel::default());
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn ensure_space(&mut self, height: f32) {
        let page_has_content = self
            .pages
            .last()
            .map(|p| !p.items.is_empty())
            .unwrap_or(false);
        if self.y - height < MARGIN_MM && page_has_content {
            self.new_page();
        }
    }

    fn push(&mut self, item: DrawItem) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn text(&mut self, x: f32, size: f32, bold: bool, text: impl Into<String>) {
        let y = self.y;
        self.push(DrawItem::Text {
            x,
            y,
            size,
            bold,
            text: text.into(),
        });
    }

    fn rule(&mut self, x1: f32, x2: f32) {
        let y = self.y;
        self.push(DrawItem::Rule { x1, x2, y });
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn finish(self) -> Vec<PageModel> {
        self.pages
    }
}

fn opt_number(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "-".into())
}

fn opt_money(v: Option<u64>) -> String {
    v.map(format_currency).unwrap_or_else(|| "-".into())
}

fn receipt_height(receipt: &Receipt, layout: ReceiptLayout) -> f32 {
    // 제목 + (표 머리) + 항목들 + 합계
    let header_rows = match layout {
        ReceiptLayout::Table => 1.0,
        ReceiptLayout::Paragraph => 0.0,
    };
    TITLE_GAP_MM + (header_rows + receipt.lines.len() as f32 + 1.0) * ROW_HEIGHT_MM + BLOCK_GAP_MM
}

/// 문장형 한 줄. 계량 항목이면 지침과 단가를 함께 적는다.
pub fn paragraph_line(line: &ReceiptLine) -> String {
    match (line.previous, line.current, line.used, line.unit_price) {
        (Some(prev), Some(cur), Some(used), Some(price)) => format!(
            "{}: {prev} -> {cur} = {used} x {} = {}",
            line.label,
            format_currency(price),
            format_currency(line.amount)
        ),
        _ => format!("{}: {}", line.label, format_currency(line.amount)),
    }
}

fn table_receipt(b: &mut PageBuilder, receipt: &Receipt, labels: &ReportLabels) {
    let header = [
        labels.col_item.as_str(),
        labels.col_previous.as_str(),
        labels.col_current.as_str(),
        labels.col_used.as_str(),
        labels.col_unit_price.as_str(),
        labels.col_amount.as_str(),
    ];
    b.rule(RECEIPT_COLUMNS_MM[0], RECEIPT_RIGHT_MM);
    b.advance(ROW_HEIGHT_MM - 2.0);
    for (x, text) in RECEIPT_COLUMNS_MM.iter().zip(header) {
        b.text(x + 1.5, BODY_SIZE, true, text);
    }
    b.advance(2.0);
    b.rule(RECEIPT_COLUMNS_MM[0], RECEIPT_RIGHT_MM);
    for line in &receipt.lines {
        b.advance(ROW_HEIGHT_MM - 2.0);
        let cells = [
            line.label.clone(),
            opt_number(line.previous),
            opt_number(line.current),
            opt_number(line.used),
            opt_money(line.unit_price),
            format_currency(line.amount),
        ];
        for (x, text) in RECEIPT_COLUMNS_MM.iter().zip(cells) {
            b.text(x + 1.5, BODY_SIZE, false, text);
        }
        b.advance(2.0);
        b.rule(RECEIPT_COLUMNS_MM[0], RECEIPT_RIGHT_MM);
    }
    b.advance(ROW_HEIGHT_MM - 2.0);
    b.text(RECEIPT_COLUMNS_MM[0] + 1.5, BODY_SIZE, true, labels.total.as_str());
    b.text(
        RECEIPT_COLUMNS_MM[5] + 1.5,
        BODY_SIZE,
        true,
        format_currency(receipt.total),
    );
    b.advance(2.0);
    b.rule(RECEIPT_COLUMNS_MM[0], RECEIPT_RIGHT_MM);
}

fn paragraph_receipt(b: &mut PageBuilder, receipt: &Receipt, labels: &ReportLabels) {
    for line in &receipt.lines {
        b.advance(ROW_HEIGHT_MM);
        b.text(MARGIN_MM, BODY_SIZE, false, paragraph_line(line));
    }
    b.advance(ROW_HEIGHT_MM);
    b.text(
        MARGIN_MM,
        BODY_SIZE + 1.0,
        true,
        format!("{}: {}", labels.total, format_currency(receipt.total)),
    );
}

/// 방마다 영수증 한 구획씩, 한 장에 [`RECEIPTS_PER_PAGE`]개까지 배치한다.
pub fn layout_receipts(
    receipts: &[Receipt],
    layout: ReceiptLayout,
    labels: &ReportLabels,
) -> Vec<PageModel> {
    let mut b = PageBuilder::new();
    for (i, receipt) in receipts.iter().enumerate() {
        if i > 0 && i % RECEIPTS_PER_PAGE == 0 {
            b.new_page();
        }
        b.ensure_space(receipt_height(receipt, layout));
        b.advance(TITLE_SIZE * 0.35);
        b.text(
            MARGIN_MM,
            TITLE_SIZE,
            true,
            format!("{} {}", labels.receipt_title, receipt.room),
        );
        b.advance(TITLE_GAP_MM - TITLE_SIZE * 0.35);
        match layout {
            ReceiptLayout::Table => table_receipt(&mut b, receipt, labels),
            ReceiptLayout::Paragraph => paragraph_receipt(&mut b, receipt, labels),
        }
        b.advance(BLOCK_GAP_MM);
    }
    b.finish()
}

/// 방/합계/비고 3열 요약표를 배치한다.
pub fn layout_summary(rows: &[SummaryRow], grand_total: u64, labels: &ReportLabels) -> Vec<PageModel> {
    let mut b = PageBuilder::new();
    b.advance(TITLE_SIZE * 0.35);
    b.text(MARGIN_MM, TITLE_SIZE, true, labels.summary_title.as_str());
    b.advance(TITLE_GAP_MM);

    let header = [
        labels.col_room.as_str(),
        labels.col_total.as_str(),
        labels.col_note.as_str(),
    ];
    b.rule(SUMMARY_COLUMNS_MM[0], SUMMARY_RIGHT_MM);
    b.advance(ROW_HEIGHT_MM - 2.0);
    for (x, text) in SUMMARY_COLUMNS_MM.iter().zip(header) {
        b.text(x + 1.5, BODY_SIZE, true, text);
    }
    b.advance(2.0);
    b.rule(SUMMARY_COLUMNS_MM[0], SUMMARY_RIGHT_MM);

    for row in rows {
        b.ensure_space(ROW_HEIGHT_MM * 2.0);
        b.advance(ROW_HEIGHT_MM - 2.0);
        b.text(SUMMARY_COLUMNS_MM[0] + 1.5, BODY_SIZE, false, row.room.as_str());
        b.text(
            SUMMARY_COLUMNS_MM[1] + 1.5,
            BODY_SIZE,
            false,
            row.total_display.as_str(),
        );
        if !row.note.is_empty() {
            b.text(SUMMARY_COLUMNS_MM[2] + 1.5, BODY_SIZE, false, row.note.as_str());
        }
        b.advance(2.0);
        b.rule(SUMMARY_COLUMNS_MM[0], SUMMARY_RIGHT_MM);
    }

    b.ensure_space(ROW_HEIGHT_MM * 2.0);
    b.advance(ROW_HEIGHT_MM);
    b.text(
        SUMMARY_COLUMNS_MM[0] + 1.5,
        BODY_SIZE + 1.0,
        true,
        format!("{}: {}", labels.grand_total, format_currency(grand_total)),
    );
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(room: &str, with_surcharge: bool) -> Receipt {
        let mut lines = vec![
            ReceiptLine {
                label: "Room fee".into(),
                previous: None,
                current: None,
                used: None,
                unit_price: Some(2_100_000),
                amount: 2_100_000,
            },
            ReceiptLine {
                label: "Electricity".into(),
                previous: Some(900),
                current: Some(100),
                used: Some(200),
                unit_price: Some(3_000),
                amount: 600_000,
            },
        ];
        if with_surcharge {
            lines.push(ReceiptLine {
                label: "Surcharge".into(),
                previous: None,
                current: None,
                used: None,
                unit_price: None,
                amount: 50_000,
            });
        }
        Receipt {
            room: room.into(),
            lines,
            total: 2_750_000,
        }
    }

    #[test]
    fn table_layout_formats_cells() {
        let pages = layout_receipts(
            &[receipt("1A", false)],
            ReceiptLayout::Table,
            &ReportLabels::default(),
        );
        assert_eq!(pages.len(), 1);
        let texts: Vec<&str> = pages[0].texts().collect();
        assert!(texts.contains(&"ROOM 1A"));
        assert!(texts.contains(&"2.100.000"));
        assert!(texts.contains(&"200"));
        assert!(texts.contains(&"-"));
        assert!(texts.contains(&"2.750.000"));
    }

    #[test]
    fn paragraph_line_spells_out_meter_items() {
        let r = receipt("3", false);
        assert_eq!(
            paragraph_line(&r.lines[1]),
            "Electricity: 900 -> 100 = 200 x 3.000 = 600.000"
        );
        assert_eq!(paragraph_line(&r.lines[0]), "Room fee: 2.100.000");
    }

    fn titles_per_page(pages: &[PageModel]) -> Vec<usize> {
        pages
            .iter()
            .map(|p| p.texts().filter(|t| t.starts_with("ROOM ")).count())
            .collect()
    }

    #[test]
    fn two_receipts_per_page() {
        let receipts: Vec<Receipt> = (1..=12).map(|i| receipt(&i.to_string(), true)).collect();
        let pages = layout_receipts(&receipts, ReceiptLayout::Table, &ReportLabels::default());
        assert_eq!(titles_per_page(&pages), vec![2; 6]);
        for page in &pages {
            for item in &page.items {
                let y = match item {
                    DrawItem::Text { y, .. } | DrawItem::Rule { y, .. } => *y,
                };
                assert!(y >= MARGIN_MM - 0.01, "y={y}");
            }
        }

        // 짧은 영수증도 한 장에 두 개까지만
        let short: Vec<Receipt> = (1..=5).map(|i| receipt(&i.to_string(), false)).collect();
        let pages = layout_receipts(&short, ReceiptLayout::Paragraph, &ReportLabels::default());
        assert_eq!(titles_per_page(&pages), vec![2, 2, 1]);
    }

    #[test]
    fn summary_has_grand_total() {
        let rows = vec![SummaryRow {
            room: "1".into(),
            total: 2_000,
            total_display: "2.000".into(),
            note: String::new(),
        }];
        let pages = layout_summary(&rows, 2_000, &ReportLabels::default());
        let texts: Vec<&str> = pages[0].texts().collect();
        assert!(texts.contains(&"2.000"));
        assert!(texts.iter().any(|t| t.ends_with(": 2.000")));
    }
}
