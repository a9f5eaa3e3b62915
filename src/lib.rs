//! Sprint plan board: fetches two localized sprint-plan datasets (English and
//! Chinese), resolves localized text through dotted i18n keys, and renders the
//! page sections onto an abstract presentation surface with a runtime language
//! switch.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod diagram;
pub mod fetch;
pub mod i18n;
pub mod render;
pub mod store;
pub mod surface;
