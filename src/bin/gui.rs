#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use log::{info, warn};
use rfd::FileDialog;
use std::{fs, path::Path};
use room_billing_toolbox::{
    billing::{MeterReading, RateConfig, RoomReadings},
    config,
    currency::format_currency,
    i18n::{self, keys},
    ledger::UpsertOutcome,
    report::{self, pdf, xlsx, ExportKind, ReceiptLayout, ReportError, ReportLabels},
    session::{RoomForm, Session, SessionError},
};

/// 원룸 관리비 계산기
#[derive(Parser, Debug)]
#[command(name = "room_billing_toolbox", version, about)]
struct Args {
    /// 언어 코드 (auto/ko/en/vi)
    #[arg(short = 'L', long)]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Room Billing Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글/베트남어를 표시할 글꼴을 찾는다.
/// 1) PDF와 같은 후보(assets/fonts/, fonts/, Windows 맑은 고딕/Arial)
/// 2) Windows 굴림(TTC, 화면 전용)
/// 3) 모두 실패 시 Err. egui 기본 글꼴을 그대로 쓴다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = pdf::font_candidates();
    if let Some(windir) = std::env::var_os("WINDIR") {
        candidates.push(Path::new(&windir).join("Fonts").join("gulim.ttc"));
    }
    let p = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Font not found. Korean text may not render.".to_string())?;
    let bytes =
        fs::read(p).map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
    apply_font_bytes(ctx, bytes, "app_font");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Status {
    kind: StatusKind,
    text: String,
}

impl Status {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn color(&self) -> egui::Color32 {
        match self.kind {
            StatusKind::Success => egui::Color32::from_rgb(40, 150, 60),
            StatusKind::Info => egui::Color32::from_rgb(40, 110, 190),
            StatusKind::Warning => egui::Color32::from_rgb(200, 140, 0),
            StatusKind::Error => egui::Color32::from_rgb(200, 50, 50),
        }
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    session: Session,
    // 사이드바 단가 입력
    rates_input: RateConfig,
    surcharge_input: bool,
    // 방 입력 폼
    room_name: String,
    elec_prev: u64,
    elec_cur: u64,
    water_prev: u64,
    water_cur: u64,
    status: Option<Status>,
    // 설정 창
    show_settings: bool,
    lang_input: String,
    font_input: String,
    window_alpha: f32,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!("GUI started with language {lang_code}");
        Self {
            session: Session::new(config.rates),
            rates_input: config.rates,
            surcharge_input: false,
            room_name: String::new(),
            elec_prev: 0,
            elec_cur: 0,
            water_prev: 0,
            water_cur: 0,
            status: None,
            show_settings: false,
            lang_input: config.language.clone(),
            font_input: config.pdf_font_path.clone().unwrap_or_default(),
            window_alpha: config.window_alpha,
            settings_status: None,
            tr,
            config,
        }
    }

    fn readings(&self) -> RoomReadings {
        RoomReadings {
            electricity: MeterReading::new(self.elec_prev, self.elec_cur),
            water: MeterReading::new(self.water_prev, self.water_cur),
        }
    }

    /// 사이드바 입력을 세션에 반영한다. 이미 저장된 방은 그대로다.
    fn sync_rates(&mut self) {
        self.session.set_rates(self.rates_input);
        self.session.set_surcharge_enabled(self.surcharge_input);
    }

    fn save_room(&mut self) {
        self.sync_rates();
        let form = RoomForm {
            name: self.room_name.clone(),
            readings: self.readings(),
        };
        self.status = Some(match self.session.save_room(&form) {
            Ok((outcome, record)) => {
                let vars = [
                    ("room", record.name.clone()),
                    ("total", format_currency(record.total())),
                ];
                match outcome {
                    UpsertOutcome::Inserted => {
                        Status::new(StatusKind::Success, self.tr.t_with(keys::ROOM_SAVED, &vars))
                    }
                    UpsertOutcome::Updated => {
                        Status::new(StatusKind::Info, self.tr.t_with(keys::ROOM_UPDATED, &vars))
                    }
                }
            }
            Err(SessionError::EmptyRoomName) => {
                Status::new(StatusKind::Warning, self.tr.t(keys::ROOM_EMPTY_NAME))
            }
        });
    }

    fn render_export(&self, kind: ExportKind) -> Result<Vec<u8>, ReportError> {
        let labels = ReportLabels::from_translator(&self.tr);
        let font = pdf::PdfFont::from_config(self.config.pdf_font_path.as_deref());
        match kind {
            ExportKind::Receipts => pdf::render_receipts(
                self.session.ledger(),
                self.config.receipt_layout,
                &labels,
                &font,
            ),
            ExportKind::Summary => pdf::render_summary(self.session.ledger(), &labels, &font),
            ExportKind::Spreadsheet => xlsx::render_workbook(self.session.ledger(), &labels),
        }
    }

    /// 내보내기. 방이 없으면 파일 대화상자를 열지 않고 경고만 한다.
    fn export(&mut self, kind: ExportKind) {
        if self.session.ledger().is_empty() {
            self.status = Some(Status::new(StatusKind::Warning, self.tr.t(keys::EXPORT_EMPTY)));
            return;
        }
        let file_name = kind.default_file_name(chrono::Local::now().date_naive());
        let (filter_name, ext) = match kind {
            ExportKind::Spreadsheet => ("Excel", "xlsx"),
            ExportKind::Receipts | ExportKind::Summary => ("PDF", "pdf"),
        };
        let Some(path) = FileDialog::new()
            .set_file_name(file_name.as_str())
            .add_filter(filter_name, &[ext])
            .save_file()
        else {
            return;
        };
        let result = self
            .render_export(kind)
            .and_then(|bytes| report::write_export(&path, &bytes));
        self.status = Some(match result {
            Ok(()) => Status::new(
                StatusKind::Success,
                format!("{} {}", self.tr.t(keys::EXPORT_DONE), path.display()),
            ),
            Err(ReportError::EmptyLedger) => {
                Status::new(StatusKind::Warning, self.tr.t(keys::EXPORT_EMPTY))
            }
            Err(e) => Status::new(
                StatusKind::Error,
                format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
            ),
        });
    }

    fn apply_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        let font = self.font_input.trim();
        self.config.pdf_font_path = (!font.is_empty()).then(|| font.to_string());
        self.config.window_alpha = self.window_alpha;
        self.config.rates = self.rates_input;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    /// 단가/추가 요금 입력 사이드바.
    fn ui_rates(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_RATES_HEADING));
        ui.add_space(6.0);
        let tr = self.tr.clone();
        let mut changed = false;
        egui::Grid::new("rates_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (key, value, step) in [
                    (keys::RATES_ROOM_FEE, &mut self.rates_input.room_fee, 50_000.0),
                    (
                        keys::RATES_ELECTRICITY,
                        &mut self.rates_input.electricity_unit_price,
                        100.0,
                    ),
                    (keys::RATES_WATER, &mut self.rates_input.water_unit_price, 500.0),
                    (keys::RATES_TRASH, &mut self.rates_input.trash_fee, 1_000.0),
                    (keys::RATES_SURCHARGE, &mut self.rates_input.surcharge, 1_000.0),
                ] {
                    ui.label(tr.t(key));
                    changed |= ui.add(egui::DragValue::new(value).speed(step)).changed();
                    ui.end_row();
                }
            });
        ui.add_space(6.0);
        let surcharge_label = self.tr.t(keys::GUI_RATES_APPLY_SURCHARGE);
        changed |= ui.checkbox(&mut self.surcharge_input, surcharge_label).changed();
        if changed {
            self.sync_rates();
        }
        ui.add_space(6.0);
        ui.small(self.tr.t(keys::GUI_RATES_NOTE));
    }

    /// 방 입력 폼과 미리보기.
    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_FORM_HEADING));
        let tr = self.tr.clone();
        let label = |key: &str| tr.t(key).trim_end_matches([':', ' ']).to_string();
        egui::Grid::new("room_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(label(keys::PROMPT_ROOM_NAME));
                ui.text_edit_singleline(&mut self.room_name);
                ui.end_row();
                for (key, value) in [
                    (keys::PROMPT_ELECTRICITY_PREVIOUS, &mut self.elec_prev),
                    (keys::PROMPT_ELECTRICITY_CURRENT, &mut self.elec_cur),
                    (keys::PROMPT_WATER_PREVIOUS, &mut self.water_prev),
                    (keys::PROMPT_WATER_CURRENT, &mut self.water_cur),
                ] {
                    ui.label(label(key));
                    ui.add(egui::DragValue::new(value).speed(1.0));
                    ui.end_row();
                }
            });

        self.sync_rates();
        let readings = self.readings();
        let preview = self.session.preview(&readings);
        ui.add_space(4.0);
        ui.label(format!(
            "{} {} kWh → {} | {} {} m³ → {}",
            tr.t(keys::REPORT_ELECTRICITY),
            preview.electricity_used,
            format_currency(preview.electricity_charge),
            tr.t(keys::REPORT_WATER),
            preview.water_used,
            format_currency(preview.water_charge),
        ));
        if readings.electricity.is_rollover() || readings.water.is_rollover() {
            ui.small(tr.t(keys::ROOM_ROLLOVER_NOTE));
        }
        ui.strong(format!(
            "{}: {}",
            tr.t(keys::REPORT_TOTAL),
            format_currency(preview.total)
        ));
        ui.add_space(4.0);
        if ui.button(self.tr.t(keys::GUI_FORM_SAVE)).clicked() {
            self.save_room();
        }
        if let Some(status) = &self.status {
            ui.colored_label(status.color(), &status.text);
        }
    }

    /// 정렬된 방 목록 표.
    fn ui_table(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_TABLE_HEADING));
        let ledger = self.session.ledger();
        if ledger.is_empty() {
            ui.label(self.tr.t(keys::LIST_EMPTY));
            return;
        }
        let labels = ReportLabels::from_translator(&self.tr);
        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("room_table")
                .striped(true)
                .num_columns(10)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for title in [
                        &labels.col_room,
                        &labels.electricity,
                        &labels.col_used,
                        &labels.water,
                        &labels.col_used,
                        &labels.room_fee,
                        &labels.col_amount,
                        &labels.trash,
                        &labels.surcharge,
                        &labels.total,
                    ] {
                        ui.strong(title.as_str());
                    }
                    ui.end_row();
                    for r in ledger.all_records() {
                        let c = &r.charges;
                        ui.label(r.name.as_str());
                        ui.label(format!("{} → {}", r.electricity.previous, r.electricity.current));
                        ui.label(c.electricity_used.to_string());
                        ui.label(format!("{} → {}", r.water.previous, r.water.current));
                        ui.label(c.water_used.to_string());
                        ui.label(format_currency(c.room_fee));
                        ui.label(format_currency(
                            c.electricity_charge.saturating_add(c.water_charge),
                        ));
                        ui.label(format_currency(c.trash_fee));
                        ui.label(c.surcharge.map(format_currency).unwrap_or_else(|| "-".into()));
                        ui.strong(format_currency(c.total));
                        ui.end_row();
                    }
                });
        });
        ui.add_space(6.0);
        ui.heading(format!(
            "{} {}",
            self.tr.t(keys::LIST_GRAND_TOTAL),
            format_currency(ledger.grand_total())
        ));
    }

    fn ui_exports(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (kind, key) in [
                (ExportKind::Receipts, keys::GUI_EXPORT_RECEIPTS),
                (ExportKind::Summary, keys::GUI_EXPORT_SUMMARY),
                (ExportKind::Spreadsheet, keys::GUI_EXPORT_XLSX),
            ] {
                if ui.button(self.tr.t(key)).clicked() {
                    self.export(kind);
                }
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let mut save_clicked = false;
        egui::Window::new(self.tr.t(keys::GUI_SETTINGS_TITLE))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.tr.t(keys::GUI_SETTINGS_LANG));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            self.tr.t(keys::GUI_SETTINGS_LANG_AUTO),
                        );
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        ui.selectable_value(&mut self.lang_input, "vi".into(), "Tiếng Việt");
                    });
                ui.separator();
                ui.label(self.tr.t(keys::GUI_SETTINGS_LAYOUT));
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.config.receipt_layout,
                        ReceiptLayout::Table,
                        self.tr.t(keys::GUI_SETTINGS_LAYOUT_TABLE),
                    );
                    ui.selectable_value(
                        &mut self.config.receipt_layout,
                        ReceiptLayout::Paragraph,
                        self.tr.t(keys::GUI_SETTINGS_LAYOUT_PARAGRAPH),
                    );
                });
                ui.separator();
                ui.label(self.tr.t(keys::GUI_SETTINGS_FONT));
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.font_input);
                    if ui.button("…").clicked() {
                        if let Some(p) = FileDialog::new()
                            .add_filter("Font", &["ttf", "otf"])
                            .pick_file()
                        {
                            self.font_input = p.display().to_string();
                        }
                    }
                });
                ui.separator();
                ui.label(self.tr.t(keys::GUI_SETTINGS_ALPHA));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;
        if save_clicked {
            self.apply_settings();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::GUI_APP_TITLE));
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::SidePanel::left("rates")
            .resizable(true)
            .min_width(220.0)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.ui_rates(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_form(ui);
                    ui.separator();
                    self.ui_table(ui);
                    ui.separator();
                    self.ui_exports(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        let mut cfg = config::Config::default();
        cfg.language = "en".into();
        GuiApp::new(cfg)
    }

    #[test]
    fn saving_without_name_warns() {
        let mut app = app();
        app.room_name = "  ".into();
        app.save_room();
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Warning));
        assert!(app.session.ledger().is_empty());
    }

    #[test]
    fn resaving_same_room_reports_update() {
        let mut app = app();
        app.room_name = "2a".into();
        app.elec_cur = 10;
        app.save_room();
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Success));
        app.room_name = "2A".into();
        app.save_room();
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Info));
        assert_eq!(app.session.ledger().len(), 1);
    }

    #[test]
    fn sidebar_rates_apply_to_next_save_only() {
        let mut app = app();
        app.room_name = "1".into();
        app.elec_cur = 10;
        app.save_room();
        app.rates_input.electricity_unit_price = 5_000;
        app.room_name = "2".into();
        app.save_room();
        let ledger = app.session.ledger();
        assert_eq!(ledger.get("1").map(|r| r.charges.electricity_charge), Some(30_000));
        assert_eq!(ledger.get("2").map(|r| r.charges.electricity_charge), Some(50_000));
    }

    #[test]
    fn settings_save_failure_is_localized() {
        let dir = std::env::temp_dir().join(format!("room_billing_gui_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut cfg = config::load_or_create(&path).unwrap();
        // 설정 파일 자리에 디렉터리를 두어 저장이 실패하게 한다.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        cfg.language = "ko".into();
        let mut app = GuiApp::new(cfg);
        app.apply_settings();
        let msg = app.settings_status.clone().unwrap_or_default();
        assert!(msg.starts_with("오류: "), "{msg}");
        assert_eq!(app.tr.t(keys::GUI_FORM_HEADING), "방 입력");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_with_no_rooms_warns_without_dialog() {
        let mut app = app();
        app.export(ExportKind::Receipts);
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Warning));
    }
}
