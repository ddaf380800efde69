use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_ENTER_ROOM: &str = "main_menu.enter_room";
    pub const MAIN_MENU_RATES: &str = "main_menu.rates";
    pub const MAIN_MENU_SURCHARGE: &str = "main_menu.surcharge";
    pub const MAIN_MENU_LIST: &str = "main_menu.list";
    pub const MAIN_MENU_EXPORT_RECEIPTS: &str = "main_menu.export_receipts";
    pub const MAIN_MENU_EXPORT_SUMMARY: &str = "main_menu.export_summary";
    pub const MAIN_MENU_EXPORT_XLSX: &str = "main_menu.export_xlsx";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ROOM_HEADING: &str = "room.heading";
    pub const PROMPT_ROOM_NAME: &str = "prompt.room_name";
    pub const PROMPT_ELECTRICITY_PREVIOUS: &str = "prompt.electricity_previous";
    pub const PROMPT_ELECTRICITY_CURRENT: &str = "prompt.electricity_current";
    pub const PROMPT_WATER_PREVIOUS: &str = "prompt.water_previous";
    pub const PROMPT_WATER_CURRENT: &str = "prompt.water_current";
    pub const ROOM_EMPTY_NAME: &str = "room.empty_name";
    pub const ROOM_SAVED: &str = "room.saved";
    pub const ROOM_UPDATED: &str = "room.updated";
    pub const ROOM_ROLLOVER_NOTE: &str = "room.rollover_note";

    pub const RATES_HEADING: &str = "rates.heading";
    pub const RATES_ROOM_FEE: &str = "rates.room_fee";
    pub const RATES_ELECTRICITY: &str = "rates.electricity";
    pub const RATES_WATER: &str = "rates.water";
    pub const RATES_TRASH: &str = "rates.trash";
    pub const RATES_SURCHARGE: &str = "rates.surcharge";
    pub const RATES_KEEP_HINT: &str = "rates.keep_hint";
    pub const SURCHARGE_ON: &str = "surcharge.on";
    pub const SURCHARGE_OFF: &str = "surcharge.off";

    pub const LIST_HEADING: &str = "list.heading";
    pub const LIST_EMPTY: &str = "list.empty";
    pub const LIST_GRAND_TOTAL: &str = "list.grand_total";

    pub const EXPORT_EMPTY: &str = "export.empty";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_LAYOUT: &str = "settings.prompt_layout";
    pub const SETTINGS_PROMPT_FONT: &str = "settings.prompt_font";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_RECEIPT_TITLE: &str = "report.receipt_title";
    pub const REPORT_COL_ITEM: &str = "report.col_item";
    pub const REPORT_COL_PREVIOUS: &str = "report.col_previous";
    pub const REPORT_COL_CURRENT: &str = "report.col_current";
    pub const REPORT_COL_USED: &str = "report.col_used";
    pub const REPORT_COL_UNIT_PRICE: &str = "report.col_unit_price";
    pub const REPORT_COL_AMOUNT: &str = "report.col_amount";
    pub const REPORT_ROOM_FEE: &str = "report.room_fee";
    pub const REPORT_ELECTRICITY: &str = "report.electricity";
    pub const REPORT_WATER: &str = "report.water";
    pub const REPORT_TRASH: &str = "report.trash";
    pub const REPORT_SURCHARGE: &str = "report.surcharge";
    pub const REPORT_TOTAL: &str = "report.total";
    pub const REPORT_SUMMARY_TITLE: &str = "report.summary_title";
    pub const REPORT_COL_ROOM: &str = "report.col_room";
    pub const REPORT_COL_TOTAL: &str = "report.col_total";
    pub const REPORT_COL_NOTE: &str = "report.col_note";
    pub const REPORT_GRAND_TOTAL: &str = "report.grand_total";
    pub const REPORT_SHEET_READINGS: &str = "report.sheet_readings";
    pub const REPORT_SHEET_TOTALS: &str = "report.sheet_totals";
    pub const REPORT_ELECTRICITY_PREVIOUS: &str = "report.electricity_previous";
    pub const REPORT_ELECTRICITY_CURRENT: &str = "report.electricity_current";
    pub const REPORT_ELECTRICITY_USED: &str = "report.electricity_used";
    pub const REPORT_WATER_PREVIOUS: &str = "report.water_previous";
    pub const REPORT_WATER_CURRENT: &str = "report.water_current";
    pub const REPORT_WATER_USED: &str = "report.water_used";

    pub const GUI_APP_TITLE: &str = "gui.nav.app_title";
    pub const GUI_RATES_HEADING: &str = "gui.rates.heading";
    pub const GUI_RATES_APPLY_SURCHARGE: &str = "gui.rates.apply_surcharge";
    pub const GUI_RATES_NOTE: &str = "gui.rates.note";
    pub const GUI_FORM_HEADING: &str = "gui.form.heading";
    pub const GUI_FORM_SAVE: &str = "gui.form.save";
    pub const GUI_TABLE_HEADING: &str = "gui.table.heading";
    pub const GUI_EXPORT_RECEIPTS: &str = "gui.export.receipts";
    pub const GUI_EXPORT_SUMMARY: &str = "gui.export.summary";
    pub const GUI_EXPORT_XLSX: &str = "gui.export.xlsx";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_LANG: &str = "gui.settings.lang";
    pub const GUI_SETTINGS_LANG_AUTO: &str = "gui.settings.lang_auto";
    pub const GUI_SETTINGS_LAYOUT: &str = "gui.settings.layout";
    pub const GUI_SETTINGS_LAYOUT_TABLE: &str = "gui.settings.layout_table";
    pub const GUI_SETTINGS_LAYOUT_PARAGRAPH: &str = "gui.settings.layout_paragraph";
    pub const GUI_SETTINGS_FONT: &str = "gui.settings.font";
    pub const GUI_SETTINGS_ALPHA: &str = "gui.settings.alpha";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Vi,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("vi") {
            Language::Vi
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/vi)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: built_in_pack(lang_code),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Ko => ko(key),
            Language::En | Language::Vi => None,
        };
        builtin
            .or_else(|| en(key))
            .unwrap_or("[missing translation]")
            .to_string()
    }

    /// `{name}` 형태의 자리표시자를 채운 번역.
    pub fn t_with(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// `{key}` 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("vi") => Some("vi".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "vi" => Some("vi".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., vi-vn)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., vi)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "vi-vn" | "vi" => parse_toml_to_map(include_str!("../locales/vi-vn.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "\n=== 원룸 관리비 계산기 ===",
        MAIN_MENU_ENTER_ROOM => "1) 방 입력/수정",
        MAIN_MENU_RATES => "2) 단가 설정",
        MAIN_MENU_SURCHARGE => "3) 추가 요금 켜기/끄기",
        MAIN_MENU_LIST => "4) 방 목록",
        MAIN_MENU_EXPORT_RECEIPTS => "5) 영수증 PDF 내보내기",
        MAIN_MENU_EXPORT_SUMMARY => "6) 요약표 PDF 내보내기",
        MAIN_MENU_EXPORT_XLSX => "7) 엑셀 내보내기",
        MAIN_MENU_SETTINGS => "8) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "0 이상의 정수를 입력하세요.",
        ROOM_HEADING => "\n-- 방 입력 --",
        PROMPT_ROOM_NAME => "방 이름(숫자/문자 자유): ",
        PROMPT_ELECTRICITY_PREVIOUS => "전기 이전 지침: ",
        PROMPT_ELECTRICITY_CURRENT => "전기 현재 지침: ",
        PROMPT_WATER_PREVIOUS => "수도 이전 지침: ",
        PROMPT_WATER_CURRENT => "수도 현재 지침: ",
        ROOM_EMPTY_NAME => "방 이름을 먼저 입력해야 저장할 수 있습니다.",
        ROOM_SAVED => "{room} 방을 저장했습니다. 합계: {total}",
        ROOM_UPDATED => "{room} 방 정보를 갱신했습니다. 합계: {total}",
        ROOM_ROLLOVER_NOTE => "참고: 현재 지침이 이전보다 작으면 1000에서 한 바퀴 돈 것으로 계산합니다.",
        RATES_HEADING => "\n-- 단가 설정 --",
        RATES_ROOM_FEE => "고정 방세",
        RATES_ELECTRICITY => "전기 단가 (1 kWh)",
        RATES_WATER => "수도 단가 (1 m³)",
        RATES_TRASH => "쓰레기 처리비",
        RATES_SURCHARGE => "추가 요금",
        RATES_KEEP_HINT => "(엔터 = 현재값 유지)",
        SURCHARGE_ON => "추가 요금: 적용",
        SURCHARGE_OFF => "추가 요금: 미적용",
        LIST_HEADING => "\n-- 방별 요금표 --",
        LIST_EMPTY => "저장된 방이 없습니다.",
        LIST_GRAND_TOTAL => "전체 방 합계:",
        EXPORT_EMPTY => "내보낼 방이 없습니다. 먼저 방을 저장하세요.",
        EXPORT_DONE => "파일을 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 영수증 배치  3) PDF 글꼴",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en/vi): ",
        SETTINGS_PROMPT_LAYOUT => "영수증 배치 (1=표, 2=문장): ",
        SETTINGS_PROMPT_FONT => "PDF 글꼴 TTF 경로 (비우면 자동 검색): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        REPORT_RECEIPT_TITLE => "방 관리비",
        REPORT_COL_ITEM => "항목",
        REPORT_COL_PREVIOUS => "이전",
        REPORT_COL_CURRENT => "현재",
        REPORT_COL_USED => "사용량",
        REPORT_COL_UNIT_PRICE => "단가",
        REPORT_COL_AMOUNT => "금액",
        REPORT_ROOM_FEE => "방세",
        REPORT_ELECTRICITY => "전기 (kWh)",
        REPORT_WATER => "수도 (m³)",
        REPORT_TRASH => "쓰레기",
        REPORT_SURCHARGE => "추가 요금",
        REPORT_TOTAL => "합계",
        REPORT_SUMMARY_TITLE => "방별 합계",
        REPORT_COL_ROOM => "방",
        REPORT_COL_TOTAL => "합계",
        REPORT_COL_NOTE => "비고",
        REPORT_GRAND_TOTAL => "전체 합계",
        REPORT_SHEET_READINGS => "지침",
        REPORT_SHEET_TOTALS => "합계",
        REPORT_ELECTRICITY_PREVIOUS => "전기 이전",
        REPORT_ELECTRICITY_CURRENT => "전기 현재",
        REPORT_ELECTRICITY_USED => "전기 사용량 (kWh)",
        REPORT_WATER_PREVIOUS => "수도 이전",
        REPORT_WATER_CURRENT => "수도 현재",
        REPORT_WATER_USED => "수도 사용량 (m³)",
        GUI_APP_TITLE => "원룸 관리비 계산기",
        GUI_RATES_HEADING => "단가",
        GUI_RATES_APPLY_SURCHARGE => "추가 요금 적용",
        GUI_RATES_NOTE => "단가 변경은 이후에 저장하는 방부터 적용됩니다.",
        GUI_FORM_HEADING => "방 입력",
        GUI_FORM_SAVE => "방 저장",
        GUI_TABLE_HEADING => "방별 요금표",
        GUI_EXPORT_RECEIPTS => "영수증 PDF 내보내기",
        GUI_EXPORT_SUMMARY => "요약표 PDF 내보내기",
        GUI_EXPORT_XLSX => "엑셀 내보내기",
        GUI_SETTINGS_TITLE => "설정",
        GUI_SETTINGS_LANG => "언어",
        GUI_SETTINGS_LANG_AUTO => "시스템",
        GUI_SETTINGS_LAYOUT => "영수증 배치",
        GUI_SETTINGS_LAYOUT_TABLE => "표",
        GUI_SETTINGS_LAYOUT_PARAGRAPH => "문장",
        GUI_SETTINGS_FONT => "PDF 글꼴 (TTF)",
        GUI_SETTINGS_ALPHA => "창 투명도",
        GUI_SETTINGS_SAVE => "설정 저장",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "\n=== Room Billing Toolbox ===",
        MAIN_MENU_ENTER_ROOM => "1) Enter/update room",
        MAIN_MENU_RATES => "2) Rates",
        MAIN_MENU_SURCHARGE => "3) Toggle surcharge",
        MAIN_MENU_LIST => "4) Room list",
        MAIN_MENU_EXPORT_RECEIPTS => "5) Export receipts PDF",
        MAIN_MENU_EXPORT_SUMMARY => "6) Export summary PDF",
        MAIN_MENU_EXPORT_XLSX => "7) Export spreadsheet",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a non-negative whole number.",
        ROOM_HEADING => "\n-- Room entry --",
        PROMPT_ROOM_NAME => "Room name (free text): ",
        PROMPT_ELECTRICITY_PREVIOUS => "Previous electricity reading: ",
        PROMPT_ELECTRICITY_CURRENT => "Current electricity reading: ",
        PROMPT_WATER_PREVIOUS => "Previous water reading: ",
        PROMPT_WATER_CURRENT => "Current water reading: ",
        ROOM_EMPTY_NAME => "Enter a room name before saving.",
        ROOM_SAVED => "Saved room {room}. Total: {total}",
        ROOM_UPDATED => "Updated room {room}. Total: {total}",
        ROOM_ROLLOVER_NOTE => "Note: a current reading below the previous one is treated as a rollover at 1000.",
        RATES_HEADING => "\n-- Rates --",
        RATES_ROOM_FEE => "Fixed room fee",
        RATES_ELECTRICITY => "Electricity price (1 kWh)",
        RATES_WATER => "Water price (1 m³)",
        RATES_TRASH => "Trash fee",
        RATES_SURCHARGE => "Surcharge",
        RATES_KEEP_HINT => "(enter = keep current)",
        SURCHARGE_ON => "Surcharge: applied",
        SURCHARGE_OFF => "Surcharge: not applied",
        LIST_HEADING => "\n-- Room charges --",
        LIST_EMPTY => "No rooms saved yet.",
        LIST_GRAND_TOTAL => "Total collected from all rooms:",
        EXPORT_EMPTY => "Nothing to export. Save a room first.",
        EXPORT_DONE => "File saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Receipt layout  3) PDF font",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en/vi): ",
        SETTINGS_PROMPT_LAYOUT => "Receipt layout (1=table, 2=paragraph): ",
        SETTINGS_PROMPT_FONT => "PDF font TTF path (empty = auto-detect): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_RECEIPT_TITLE => "ROOM",
        REPORT_COL_ITEM => "Item",
        REPORT_COL_PREVIOUS => "Previous",
        REPORT_COL_CURRENT => "Current",
        REPORT_COL_USED => "Used",
        REPORT_COL_UNIT_PRICE => "Unit price",
        REPORT_COL_AMOUNT => "Amount",
        REPORT_ROOM_FEE => "Room fee",
        REPORT_ELECTRICITY => "Electricity (kWh)",
        REPORT_WATER => "Water (m3)",
        REPORT_TRASH => "Trash",
        REPORT_SURCHARGE => "Surcharge",
        REPORT_TOTAL => "TOTAL",
        REPORT_SUMMARY_TITLE => "Room totals",
        REPORT_COL_ROOM => "Room",
        REPORT_COL_TOTAL => "Total",
        REPORT_COL_NOTE => "Note",
        REPORT_GRAND_TOTAL => "Grand total",
        REPORT_SHEET_READINGS => "Readings",
        REPORT_SHEET_TOTALS => "Totals",
        REPORT_ELECTRICITY_PREVIOUS => "Electricity previous",
        REPORT_ELECTRICITY_CURRENT => "Electricity current",
        REPORT_ELECTRICITY_USED => "Electricity used (kWh)",
        REPORT_WATER_PREVIOUS => "Water previous",
        REPORT_WATER_CURRENT => "Water current",
        REPORT_WATER_USED => "Water used (m3)",
        GUI_APP_TITLE => "Room Billing Toolbox",
        GUI_RATES_HEADING => "Rates",
        GUI_RATES_APPLY_SURCHARGE => "Apply surcharge",
        GUI_RATES_NOTE => "Rate changes apply to rooms saved afterwards.",
        GUI_FORM_HEADING => "Room entry",
        GUI_FORM_SAVE => "Save room",
        GUI_TABLE_HEADING => "Room charges",
        GUI_EXPORT_RECEIPTS => "Export receipts PDF",
        GUI_EXPORT_SUMMARY => "Export summary PDF",
        GUI_EXPORT_XLSX => "Export Excel",
        GUI_SETTINGS_TITLE => "Settings",
        GUI_SETTINGS_LANG => "Language",
        GUI_SETTINGS_LANG_AUTO => "System",
        GUI_SETTINGS_LAYOUT => "Receipt layout",
        GUI_SETTINGS_LAYOUT_TABLE => "Table",
        GUI_SETTINGS_LAYOUT_PARAGRAPH => "Paragraph",
        GUI_SETTINGS_FONT => "PDF font (TTF)",
        GUI_SETTINGS_ALPHA => "Window transparency",
        GUI_SETTINGS_SAVE => "Save settings",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::REPORT_TOTAL), "합계");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn vietnamese_pack_is_bundled() {
        let tr = Translator::new("vi");
        assert_eq!(tr.language(), Language::Vi);
        assert_eq!(tr.t(keys::REPORT_RECEIPT_TITLE), "TIỀN PHÒNG");
    }

    #[test]
    fn gui_strings_exist_in_every_language() {
        for key in [
            keys::GUI_APP_TITLE,
            keys::GUI_FORM_HEADING,
            keys::GUI_EXPORT_XLSX,
            keys::GUI_SETTINGS_LAYOUT_PARAGRAPH,
        ] {
            assert!(ko(key).is_some(), "{key}");
            assert!(en(key).is_some(), "{key}");
            assert!(Translator::new("vi").lookup(key).is_some(), "{key}");
        }
        assert_eq!(Translator::new("ko").t(keys::GUI_FORM_HEADING), "방 입력");
    }

    #[test]
    fn template_fills_placeholders() {
        let tr = Translator::new("en");
        let msg = tr.t_with(
            keys::ROOM_SAVED,
            &[("room", "1A".into()), ("total", "2.100.000".into())],
        );
        assert_eq!(msg, "Saved room 1A. Total: 2.100.000");
    }

    #[test]
    fn language_resolution_prefers_cli_then_config() {
        assert_eq!(resolve_language("vi-VN", Some("ko")), "vi");
        assert_eq!(resolve_language("auto", Some("ko")), "ko");
    }
}
