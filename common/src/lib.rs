//! Resume Parser Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod catalog;
pub mod endpoint;
pub mod error;
pub mod render;
pub mod response;
pub mod result;
pub mod upload;
pub mod view_state;

pub use catalog::{ordered_catalog, FieldSpec, Icon, Priority};
pub use endpoint::{ApiConfig, upload_url};
pub use error::{Error, Result};
pub use render::{render, Card, CardContent};
pub use response::interpret_response;
pub use result::{FieldValue, ParseResult};
pub use upload::{validate, UploadCandidate, MAX_FILE_SIZE};
pub use view_state::{UploadTicket, ViewController, ViewState};
