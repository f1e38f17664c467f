//! 画面状態マシン
//!
//! Idle → Loading → {Results | Error}、{Results | Error} → Idle の遷移のみ許可する。
//! 入力検証エラーは Idle から直接 Error へ遷移する。
//! 状態はデータを持つ列挙型なので、同時に表示されるのは常に1つだけ。

use crate::error::{Error, Result};
use crate::render::{render, Card};
use crate::result::ParseResult;

/// 画面状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// アップロード待ち
    #[default]
    Idle,
    /// アップロード中
    Loading,
    /// 解析結果表示
    Results {
        result: ParseResult,
        cards: Vec<Card>,
    },
    /// エラー表示
    Error { message: String },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Results { .. } => "results",
            ViewState::Error { .. } => "error",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn cards(&self) -> Option<&[Card]> {
        match self {
            ViewState::Results { cards, .. } => Some(cards.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// 進行中アップロードの識別子
///
/// `begin_upload` ごとに世代が進み、古いチケットの完了通知は無視される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// 画面状態の所有者
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    state: ViewState,
    generation: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Idle → Loading
    pub fn begin_upload(&mut self) -> Result<UploadTicket> {
        if !self.state.is_idle() {
            return Err(self.invalid("begin_upload"));
        }
        self.generation += 1;
        self.transition(ViewState::Loading);
        Ok(UploadTicket(self.generation))
    }

    /// Idle → Error（入力検証エラー）
    pub fn reject(&mut self, error: &Error) -> Result<()> {
        if !self.state.is_idle() {
            return Err(self.invalid("reject"));
        }
        self.transition(ViewState::Error {
            message: error.user_message(),
        });
        Ok(())
    }

    /// Loading → Results | Error
    ///
    /// 現在の世代でないチケットは何もせず `false` を返す。
    pub fn complete(&mut self, ticket: UploadTicket, outcome: Result<ParseResult>) -> Result<bool> {
        if ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, current = self.generation, "stale upload ignored");
            return Ok(false);
        }
        if !self.state.is_loading() {
            return Err(self.invalid("complete"));
        }

        let next = match outcome {
            Ok(result) => {
                let cards = render(&result);
                ViewState::Results { result, cards }
            }
            Err(error) => ViewState::Error {
                message: error.user_message(),
            },
        };
        self.transition(next);
        Ok(true)
    }

    /// Results | Error → Idle
    ///
    /// 保持していた解析結果は破棄される。
    pub fn reset(&mut self) -> Result<()> {
        match self.state {
            ViewState::Results { .. } | ViewState::Error { .. } => {
                self.transition(ViewState::Idle);
                Ok(())
            }
            _ => Err(self.invalid("reset")),
        }
    }

    fn transition(&mut self, next: ViewState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "view transition");
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}
