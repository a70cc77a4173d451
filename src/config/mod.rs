//! Configuration and settings management.
//!
//! This module provides the mailbox view's settings types and JSON
//! persistence. The host application chooses where the file lives.

mod settings;

pub use settings::{BehaviorSettings, ColumnSettings, Settings};
