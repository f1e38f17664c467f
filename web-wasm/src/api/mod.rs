//! 外部API連携

pub mod parser_client;
