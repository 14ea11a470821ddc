//! # Quill Shared
//!
//! Form types shared between the web layer and tests: the urlencoded
//! request bodies the browser submits, with their original field names.

pub mod forms;

pub use forms::{ComposeForm, DeleteForm, EditForm, LoginForm, SignupForm};
