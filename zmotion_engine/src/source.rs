use std::sync::Arc;

use eframe::egui;

use crate::Engine;

/// Something that produces sensor events and posts them to an [`Engine`].
pub trait Source {
    fn init(&self, engine: Arc<Engine>);
    fn stop(&self);

    fn status(&self) -> SourceStatus;

    fn name(&self) -> &str;

    fn update_gui(&self, _ctx: &egui::Context, _frame: &mut eframe::Frame, _ui: &mut egui::Ui) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceStatus {
    Running,
    Stopped,
    Error(String),
}

impl std::fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceStatus::Running => write!(f, "running"),
            SourceStatus::Stopped => write!(f, "stopped"),
            SourceStatus::Error(err) => write!(f, "error: {}", err),
        }
    }
}
