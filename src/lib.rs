//! Resume Parser CLI
//!
//! 履歴書ファイルを解析サービスへ送り、抽出されたフィールドを端末に表示する。

pub mod batch;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod scanner;
pub mod uploader;
