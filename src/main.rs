use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use resume_parser::{batch, cli, config, display, error, scanner, uploader};
use resume_parser_common::{ViewController, ViewState};
use cli::{Cli, Commands};
use config::Config;
use error::{ResumeParserError, Result};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use uploader::ResumeUploader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// サブコマンドを実行
///
/// 解析失敗はエラー画面として表示済みなので `ExitCode::FAILURE` で返す。
async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Parse { file, json, output } => {
            println!("📄 resume-parser - 履歴書解析\n");

            let config = Config::load()?;
            let api = config.api_config(cli.api_url.as_deref(), cli.timeout);
            let uploader = ResumeUploader::new(&api)?;
            let mut controller = ViewController::new();

            // 1. 入力検証
            let candidate = match scanner::load_candidate(&file) {
                Ok(candidate) => candidate,
                Err(ResumeParserError::Common(e)) if e.is_validation() => {
                    controller.reject(&e)?;
                    show_state(controller.state(), json);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e),
            };
            println!(
                "[1/2] {} ({} bytes) を送信中... → {}",
                candidate.file_name,
                candidate.size_bytes,
                uploader.upload_url()
            );

            // 2. アップロード
            let ticket = controller.begin_upload()?;
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("解析中...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let outcome = uploader.upload(&candidate).await;
            spinner.finish_and_clear();

            let failed = outcome.is_err();
            controller.complete(ticket, outcome)?;
            println!("[2/2] 完了\n");

            if let (Some(output), ViewState::Results { result, .. }) = (&output, controller.state()) {
                let content = serde_json::to_string_pretty(result)?;
                std::fs::write(output, content)?;
                println!("✔ 結果を保存: {}\n", output.display());
            }

            show_state(controller.state(), json);

            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Batch { folder, output, recursive } => {
            println!("📂 resume-parser - 一括解析\n");

            // 1. スキャン
            println!("[1/3] 履歴書をスキャン中...");
            let files = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {}件の履歴書を検出\n", files.len());

            if files.is_empty() {
                return Err(ResumeParserError::NoResumesFound(folder.display().to_string()));
            }

            // 2. 順番にアップロード
            println!("[2/3] 解析中...");
            let config = Config::load()?;
            let api = config.api_config(cli.api_url.as_deref(), cli.timeout);
            let uploader = ResumeUploader::new(&api)?;

            let bar = ProgressBar::new(files.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            let report = batch::parse_files(&uploader, &folder, &files, |current, _total, name| {
                bar.set_position(current as u64 - 1);
                bar.set_message(name.to_string());
            })
            .await;
            bar.finish_and_clear();

            let failed = report.failed_count();
            println!("✔ 解析完了（成功 {} / 失敗 {}）\n", report.len() - failed, failed);

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| folder.join(batch::DEFAULT_REPORT_NAME));
            report.save(&output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 一括解析完了");
        }

        Commands::Config { set_api_url, clear_api_url, set_timeout, show } => {
            // 読み込めない設定ファイルは既定値で上書きする
            let mut config = Config::load().unwrap_or_else(|e| {
                eprintln!("⚠ 設定ファイルを読み込めません（既定値を使用）: {}", e);
                Config::default()
            });
            let mut changed = false;

            if let Some(url) = set_api_url {
                config.set_api_base_url(url)?;
                changed = true;
                println!("✔ ベースURLを設定しました");
            }

            if clear_api_url {
                config.api_base_url = None;
                changed = true;
                println!("✔ ベースURLを削除しました");
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = seconds;
                changed = true;
                println!("✔ タイムアウトを{}秒に設定しました", seconds);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                let api = config.api_config(cli.api_url.as_deref(), cli.timeout);
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  ベースURL: {}",
                    config.api_base_url.as_deref().unwrap_or("未設定（ホスト名から自動判定）")
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  送信先: {}", Config::upload_url(&api));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// 画面状態を端末に表示
fn show_state(state: &ViewState, json: bool) {
    match state {
        ViewState::Results { result, cards } => {
            if json {
                match serde_json::to_string_pretty(result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("JSON出力エラー: {}", e),
                }
            } else {
                println!("{}", display::format_cards(cards));
            }
        }
        ViewState::Error { message } => eprintln!("❌ {}", message),
        ViewState::Idle | ViewState::Loading => {}
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
