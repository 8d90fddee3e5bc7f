//! `shelfkeep-console`
//!
//! **Responsibility:** terminal front-end for the catalog store.
//!
//! This crate provides:
//! - Form collection and validation for add/issue/return/delete
//! - Notifications for every outcome
//! - Table rendering (text or JSON) and a session activity log
//!
//! All catalog rules live in `shelfkeep-catalog`; this crate only translates
//! between the terminal and the store.

pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod notify;
pub mod render;
pub mod session;
pub mod types;

pub use commands::AppState;
pub use config::{Cli, ConsoleConfig};
pub use error::ConsoleError;
pub use notify::{Toast, ToastKind};
pub use session::{ConsoleCommand, Flow, Session};
pub use types::{ActivityEntry, BookRow, OutputFormat};
