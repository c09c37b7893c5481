//! Reusable view components for the console.

pub(crate) mod api_key_popup;
pub(crate) mod blocker_prompt;
pub(crate) mod dropdown;
pub(crate) mod error_banner;
pub(crate) mod landing;
pub(crate) mod loading;
pub(crate) mod modal;
pub(crate) mod shell;
