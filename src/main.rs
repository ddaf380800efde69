use std::path::PathBuf;

use clap::Parser;
use log::info;
use room_billing_toolbox::{app, config, i18n};

/// 원룸 관리비 계산기 (터미널 메뉴)
#[derive(Parser, Debug)]
#[command(name = "room_billing_toolbox_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto/ko/en/vi)
    #[arg(short = 'L', long)]
    lang: Option<String>,

    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_create(&cli.config)?;
    let lang = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or("auto"),
        Some(cfg.language.as_str()),
    );
    info!("starting CLI with language {lang}");
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &mut tr)?;
    Ok(())
}
