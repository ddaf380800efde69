//! PDF/엑셀 내보내기 스모크 테스트.
use room_billing_toolbox::billing::{MeterReading, RateConfig, RoomReadings};
use room_billing_toolbox::i18n::Translator;
use room_billing_toolbox::ledger::RoomLedger;
use room_billing_toolbox::report::{
    pdf, rows, write_export, xlsx, ExportKind, ReceiptLayout, ReportError, ReportLabels,
};
use room_billing_toolbox::session::{RoomForm, Session};

fn session_with_rooms() -> Session {
    let mut s = Session::new(RateConfig {
        surcharge: 20_000,
        ..RateConfig::default()
    });
    for (name, prev, cur) in [("2", 100, 180), ("1A", 900, 50), ("1", 0, 30)] {
        s.set_surcharge_enabled(name == "1A");
        s.save_room(&RoomForm {
            name: name.into(),
            readings: RoomReadings {
                electricity: MeterReading::new(prev, cur),
                water: MeterReading::new(10, 13),
            },
        })
        .expect("saved");
    }
    s
}

#[test]
fn empty_ledger_is_rejected() {
    let ledger = RoomLedger::new();
    let labels = ReportLabels::default();
    assert!(matches!(
        pdf::render_receipts(&ledger, ReceiptLayout::Table, &labels, &pdf::PdfFont::Builtin),
        Err(ReportError::EmptyLedger)
    ));
    assert!(matches!(
        pdf::render_summary(&ledger, &labels, &pdf::PdfFont::Builtin),
        Err(ReportError::EmptyLedger)
    ));
    assert!(matches!(
        xlsx::render_workbook(&ledger, &labels),
        Err(ReportError::EmptyLedger)
    ));
}

#[test]
fn surcharge_line_only_when_applied() {
    let s = session_with_rooms();
    let receipts = rows::receipts(s.ledger(), &ReportLabels::default()).unwrap();
    let rooms: Vec<&str> = receipts.iter().map(|r| r.room.as_str()).collect();
    assert_eq!(rooms, vec!["1", "2", "1A"]);
    assert_eq!(receipts[0].lines.len(), 4);
    assert_eq!(receipts[2].lines.len(), 5);
    assert_eq!(receipts[2].lines[4].amount, 20_000);
}

#[test]
fn spreadsheet_rows_follow_ledger_order() {
    let s = session_with_rooms();
    let readings = rows::reading_rows(s.ledger()).unwrap();
    assert_eq!(readings[2].room, "1A");
    assert_eq!(readings[2].electricity_used, 150);
    let summary = rows::summary_rows(s.ledger()).unwrap();
    assert!(summary.iter().all(|r| r.note.is_empty()));
    assert_eq!(summary[0].total_display, "2.245.000");
}

#[test]
fn pdf_and_xlsx_bytes_are_produced() {
    let s = session_with_rooms();
    let labels = ReportLabels::default();
    for layout in [ReceiptLayout::Table, ReceiptLayout::Paragraph] {
        let bytes =
            pdf::render_receipts(s.ledger(), layout, &labels, &pdf::PdfFont::Builtin).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
    let summary = pdf::render_summary(s.ledger(), &labels, &pdf::PdfFont::Builtin).unwrap();
    assert!(summary.starts_with(b"%PDF"));
    let workbook = xlsx::render_workbook(s.ledger(), &labels).unwrap();
    assert!(workbook.starts_with(b"PK"));
}

#[test]
fn export_is_written_to_disk() {
    let s = session_with_rooms();
    let dir = std::env::temp_dir().join(format!("room_billing_export_{}", std::process::id()));
    let path = ExportKind::Spreadsheet.default_path(&dir);
    let bytes = xlsx::render_workbook(s.ledger(), &ReportLabels::default()).unwrap();
    write_export(&path, &bytes).unwrap();
    assert_eq!(std::fs::read(&path).unwrap().len(), bytes.len());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn builtin_font_never_writes_lossy_korean_or_vietnamese() {
    let s = session_with_rooms();
    for lang in ["vi", "ko"] {
        let labels = ReportLabels::from_translator(&Translator::new(lang));
        for layout in [ReceiptLayout::Table, ReceiptLayout::Paragraph] {
            let result = pdf::render_receipts(s.ledger(), layout, &labels, &pdf::PdfFont::Builtin);
            assert!(
                matches!(result, Err(ReportError::MissingGlyphs(_))),
                "{lang} {layout:?}"
            );
        }
        assert!(matches!(
            pdf::render_summary(s.ledger(), &labels, &pdf::PdfFont::Builtin),
            Err(ReportError::MissingGlyphs(_))
        ));
        // 엑셀은 글꼴과 무관하다.
        assert!(xlsx::render_workbook(s.ledger(), &labels).is_ok());
    }
}

#[test]
fn non_latin_room_name_is_caught_with_english_labels() {
    let mut s = Session::new(RateConfig::default());
    s.save_room(&RoomForm {
        name: "Tầng 2".into(),
        readings: RoomReadings::default(),
    })
    .expect("saved");
    match pdf::render_summary(s.ledger(), &ReportLabels::default(), &pdf::PdfFont::Builtin) {
        Err(ReportError::MissingGlyphs(text)) => assert_eq!(text, "Tầng 2"),
        other => panic!("unexpected: {other:?}"),
    }
}
