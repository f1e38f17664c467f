use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "履歴書(PDF/DOCX)を解析サービスに送信し、抽出結果を表示するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析サービスのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// タイムアウト秒数
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書を1件解析して結果を表示
    Parse {
        /// 履歴書ファイル（PDF/DOCX）
        #[arg(required = true)]
        file: PathBuf,

        /// カードではなく解析結果のJSONを出力
        #[arg(long)]
        json: bool,

        /// 解析結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ内の履歴書を順番に解析
    Batch {
        /// 履歴書フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/parsed-resumes.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析サービスのベースURLを保存
        #[arg(long)]
        set_api_url: Option<String>,

        /// 保存したベースURLを削除
        #[arg(long)]
        clear_api_url: bool,

        /// タイムアウト秒数を保存
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
