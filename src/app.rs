use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::session::Session;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let mut session = Session::new(config.rates);
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::EnterRoom => ui_cli::handle_enter_room(tr, &mut session)?,
            MenuChoice::Rates => {
                ui_cli::handle_rates(tr, &mut session)?;
                config.rates = *session.rates();
                config.save()?;
            }
            MenuChoice::ToggleSurcharge => ui_cli::handle_toggle_surcharge(tr, &mut session),
            MenuChoice::ListRooms => ui_cli::handle_list(tr, &session),
            MenuChoice::ExportReceipts => ui_cli::handle_export_receipts(tr, config, &session),
            MenuChoice::ExportSummary => ui_cli::handle_export_summary(tr, config, &session),
            MenuChoice::ExportSpreadsheet => ui_cli::handle_export_xlsx(tr, config, &session),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let lang = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
                config.save()?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
