use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{error, warn};

use crate::app::AppError;
use crate::billing::{MeterReading, RateConfig, RoomReadings};
use crate::config::Config;
use crate::currency::format_currency;
use crate::i18n::{keys, Translator};
use crate::ledger::{RoomLedger, UpsertOutcome};
use crate::report::{self, pdf, xlsx, ExportKind, ReceiptLayout, ReportError, ReportLabels};
use crate::session::{RoomForm, Session, SessionError};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterRoom,
    Rates,
    ToggleSurcharge,
    ListRooms,
    ExportReceipts,
    ExportSummary,
    ExportSpreadsheet,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::APP_TITLE));
    for key in [
        keys::MAIN_MENU_ENTER_ROOM,
        keys::MAIN_MENU_RATES,
        keys::MAIN_MENU_SURCHARGE,
        keys::MAIN_MENU_LIST,
        keys::MAIN_MENU_EXPORT_RECEIPTS,
        keys::MAIN_MENU_EXPORT_SUMMARY,
        keys::MAIN_MENU_EXPORT_XLSX,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::EnterRoom),
        "2" => Some(MenuChoice::Rates),
        "3" => Some(MenuChoice::ToggleSurcharge),
        "4" => Some(MenuChoice::ListRooms),
        "5" => Some(MenuChoice::ExportReceipts),
        "6" => Some(MenuChoice::ExportSummary),
        "7" => Some(MenuChoice::ExportSpreadsheet),
        "8" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 방 입력 메뉴를 처리한다. 이름이 비어 있으면 경고만 하고 돌아간다.
pub fn handle_enter_room(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROOM_HEADING));
    println!("{}", tr.t(keys::ROOM_ROLLOVER_NOTE));
    let name = read_line(&tr.t(keys::PROMPT_ROOM_NAME))?;
    if name.trim().is_empty() {
        println!("{}", tr.t(keys::ROOM_EMPTY_NAME));
        return Ok(());
    }
    let electricity = MeterReading::new(
        read_u64(tr, &tr.t(keys::PROMPT_ELECTRICITY_PREVIOUS))?,
        read_u64(tr, &tr.t(keys::PROMPT_ELECTRICITY_CURRENT))?,
    );
    let water = MeterReading::new(
        read_u64(tr, &tr.t(keys::PROMPT_WATER_PREVIOUS))?,
        read_u64(tr, &tr.t(keys::PROMPT_WATER_CURRENT))?,
    );
    let form = RoomForm {
        name,
        readings: RoomReadings { electricity, water },
    };
    match session.save_room(&form) {
        Ok((outcome, record)) => {
            let key = match outcome {
                UpsertOutcome::Inserted => keys::ROOM_SAVED,
                UpsertOutcome::Updated => keys::ROOM_UPDATED,
            };
            println!(
                "{}",
                tr.t_with(
                    key,
                    &[
                        ("room", record.name.clone()),
                        ("total", format_currency(record.total())),
                    ],
                )
            );
        }
        Err(SessionError::EmptyRoomName) => println!("{}", tr.t(keys::ROOM_EMPTY_NAME)),
    }
    Ok(())
}

/// 단가 설정 메뉴. 빈 입력은 현재값을 유지한다.
pub fn handle_rates(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RATES_HEADING));
    println!("{}", tr.t(keys::RATES_KEEP_HINT));
    let cur = *session.rates();
    let rates = RateConfig {
        room_fee: read_u64_or(tr, keys::RATES_ROOM_FEE, cur.room_fee)?,
        electricity_unit_price: read_u64_or(
            tr,
            keys::RATES_ELECTRICITY,
            cur.electricity_unit_price,
        )?,
        water_unit_price: read_u64_or(tr, keys::RATES_WATER, cur.water_unit_price)?,
        trash_fee: read_u64_or(tr, keys::RATES_TRASH, cur.trash_fee)?,
        surcharge: read_u64_or(tr, keys::RATES_SURCHARGE, cur.surcharge)?,
    };
    session.set_rates(rates);
    Ok(())
}

pub fn handle_toggle_surcharge(tr: &Translator, session: &mut Session) {
    let enabled = !session.surcharge_enabled();
    session.set_surcharge_enabled(enabled);
    let key = if enabled {
        keys::SURCHARGE_ON
    } else {
        keys::SURCHARGE_OFF
    };
    println!(
        "{} ({})",
        tr.t(key),
        format_currency(session.rates().surcharge)
    );
}

/// 정렬된 방 목록과 전체 합계를 출력한다.
pub fn handle_list(tr: &Translator, session: &Session) {
    println!("{}", tr.t(keys::LIST_HEADING));
    if session.ledger().is_empty() {
        println!("{}", tr.t(keys::LIST_EMPTY));
        return;
    }
    for line in room_table_lines(session.ledger(), &ReportLabels::from_translator(tr)) {
        println!("{line}");
    }
    println!(
        "{} {}",
        tr.t(keys::LIST_GRAND_TOTAL),
        format_currency(session.ledger().grand_total())
    );
}

/// 방 목록 표를 줄 단위 문자열로 만든다. 첫 줄은 머리글.
pub fn room_table_lines(ledger: &RoomLedger, labels: &ReportLabels) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<8} {:>15} {:>15} {:>12} {:>12} {:>10} {:>10} {:>14}",
        labels.col_room,
        labels.electricity,
        labels.water,
        labels.room_fee,
        labels.col_amount,
        labels.trash,
        labels.surcharge,
        labels.total,
    )];
    for r in ledger.all_records() {
        let c = &r.charges;
        lines.push(format!(
            "{:<8} {:>15} {:>15} {:>12} {:>12} {:>10} {:>10} {:>14}",
            r.name,
            format!("{}→{} ({})", r.electricity.previous, r.electricity.current, c.electricity_used),
            format!("{}→{} ({})", r.water.previous, r.water.current, c.water_used),
            format_currency(c.room_fee),
            format_currency(c.electricity_charge.saturating_add(c.water_charge)),
            format_currency(c.trash_fee),
            c.surcharge.map(format_currency).unwrap_or_else(|| "-".into()),
            format_currency(c.total),
        ));
    }
    lines
}

pub fn handle_export_receipts(tr: &Translator, cfg: &Config, session: &Session) {
    let labels = ReportLabels::from_translator(tr);
    let font = pdf::PdfFont::from_config(cfg.pdf_font_path.as_deref());
    let result = pdf::render_receipts(session.ledger(), cfg.receipt_layout, &labels, &font);
    finish_export(tr, cfg, ExportKind::Receipts, result);
}

pub fn handle_export_summary(tr: &Translator, cfg: &Config, session: &Session) {
    let labels = ReportLabels::from_translator(tr);
    let font = pdf::PdfFont::from_config(cfg.pdf_font_path.as_deref());
    let result = pdf::render_summary(session.ledger(), &labels, &font);
    finish_export(tr, cfg, ExportKind::Summary, result);
}

pub fn handle_export_xlsx(tr: &Translator, cfg: &Config, session: &Session) {
    let labels = ReportLabels::from_translator(tr);
    let result = xlsx::render_workbook(session.ledger(), &labels);
    finish_export(tr, cfg, ExportKind::Spreadsheet, result);
}

/// 내보내기 결과를 파일로 쓰고 사용자에게 알린다. 실패해도 세션은 유지한다.
fn finish_export(
    tr: &Translator,
    cfg: &Config,
    kind: ExportKind,
    result: Result<Vec<u8>, ReportError>,
) {
    let outcome = result.and_then(|bytes| {
        let path = kind.default_path(Path::new(&cfg.export_dir));
        report::write_export(&path, &bytes).map(|_| path)
    });
    match outcome {
        Ok(path) => println!("{} {}", tr.t(keys::EXPORT_DONE), path.display()),
        Err(ReportError::EmptyLedger) => {
            warn!("export of {kind:?} requested with no rooms");
            println!("{}", tr.t(keys::EXPORT_EMPTY));
        }
        Err(e) => {
            error!("export of {kind:?} failed: {e}");
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
        }
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} language={}, layout={:?}, font={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.receipt_layout,
        cfg.pdf_font_path.as_deref().unwrap_or("-")
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => {
            let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim().to_lowercase();
            if matches!(lang.as_str(), "auto" | "ko" | "en" | "vi") {
                cfg.language = lang;
                return Ok(true);
            }
            println!("{}", tr.t(keys::SETTINGS_INVALID));
        }
        "2" => {
            let layout = read_line(&tr.t(keys::SETTINGS_PROMPT_LAYOUT))?;
            cfg.receipt_layout = match layout.trim() {
                "1" => ReceiptLayout::Table,
                "2" => ReceiptLayout::Paragraph,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    cfg.receipt_layout
                }
            };
        }
        "3" => {
            let font = read_line(&tr.t(keys::SETTINGS_PROMPT_FONT))?;
            let font = font.trim();
            cfg.pdf_font_path = (!font.is_empty()).then(|| font.to_string());
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(false)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면 재시도 루프가 돌지 않도록 `UnexpectedEof`.
fn read_line_from<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed",
        )));
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

fn read_u64(tr: &Translator, prompt: &str) -> Result<u64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_amount(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u64_or(tr: &Translator, label_key: &str, current: u64) -> Result<u64, AppError> {
    let prompt = format!("{} [{}]: ", tr.t(label_key), format_currency(current));
    loop {
        let s = read_line(&prompt)?;
        if s.trim().is_empty() {
            return Ok(current);
        }
        match parse_amount(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 0 이상의 정수를 읽는다. `2.100.000`처럼 세 자리마다 찍은 `.`/`,` 구분자는 허용한다.
fn parse_amount(s: &str) -> Option<u64> {
    let s = s.trim();
    let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    let Some(sep) = s.chars().find(|c| matches!(c, '.' | ',')) else {
        return if all_digits(s) { s.parse().ok() } else { None };
    };
    let mut groups = s.split(sep);
    let head = groups.next()?;
    if !all_digits(head) || head.len() > 3 {
        return None;
    }
    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice(" 1 "), Some(MenuChoice::EnterRoom));
        assert_eq!(parse_menu_choice("7"), Some(MenuChoice::ExportSpreadsheet));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("x"), None);
    }

    #[test]
    fn amounts_accept_grouped_input() {
        assert_eq!(parse_amount("2.100.000"), Some(2_100_000));
        assert_eq!(parse_amount("15,000"), Some(15_000));
        assert_eq!(parse_amount("3000\n"), Some(3_000));
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("+5"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn amounts_reject_misplaced_separators() {
        assert_eq!(parse_amount("1.5"), None);
        assert_eq!(parse_amount("12.34"), None);
        assert_eq!(parse_amount("1000.000"), None);
        assert_eq!(parse_amount(".100"), None);
        assert_eq!(parse_amount("1.000,000"), None);
        assert_eq!(parse_amount("1..000"), None);
    }

    #[test]
    fn closed_input_is_an_error_not_an_empty_line() {
        let mut input: &[u8] = b"12\n";
        assert_eq!(read_line_from(&mut input).unwrap(), "12");
        match read_line_from(&mut input) {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn table_lists_rooms_in_sorted_order() {
        let mut session = Session::new(RateConfig::default());
        for name in ["10", "2A", "2"] {
            session
                .save_room(&RoomForm {
                    name: name.into(),
                    readings: RoomReadings::default(),
                })
                .unwrap();
        }
        let lines = room_table_lines(session.ledger(), &ReportLabels::default());
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("2 "));
        assert!(lines[2].starts_with("10 "));
        assert!(lines[3].starts_with("2A "));
        assert!(lines[1].contains("2.110.000"));
    }
}
