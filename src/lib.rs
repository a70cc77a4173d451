//! postbox - Mailbox view core for a key-addressed desktop email client
//!
//! This crate provides the toolkit-independent logic behind a desktop
//! mailbox view: search filtering with index remapping, reply/forward
//! draft derivation, selection and preview state, and the deletion
//! workflow. Rendering, message storage, and the editor window live
//! behind traits implemented by the host application.

pub mod app;
pub mod config;
pub mod domain;
pub mod services;
