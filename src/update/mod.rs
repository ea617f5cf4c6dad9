mod config;
mod files;
mod form;
mod status;
mod ui;
mod wizard;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization
        Event::Initialize => {
            model.form.show_tab(0);
            render()
        }

        // Wizard navigation domain
        Event::ShowTab(_) | Event::NextTab | Event::PrevTab => wizard::handle(event, model),

        // Form input domain
        Event::SetField { .. }
        | Event::SetChecked { .. }
        | Event::SetCaret { .. }
        | Event::ToggleSelectOption { .. } => form::handle(event, model),

        // Device configuration domain
        Event::LoadConfig
        | Event::ConfigResponse(_)
        | Event::SubmitConfig
        | Event::SaveConfigResponse(_)
        | Event::UploadConfig { .. }
        | Event::UploadConfigResponse(_)
        | Event::UploadFileSelected { .. } => config::handle(event, model),

        // File panel domain
        Event::LoadFileList(_)
        | Event::FileListResponse(..)
        | Event::DownloadFile { .. }
        | Event::DeleteFile { .. }
        | Event::DeleteFileResponse { .. } => files::handle(event, model),

        // Status panel domain
        Event::LoadStatus
        | Event::StatusResponse(_)
        | Event::SetDeviceTime { .. }
        | Event::SetTimeResponse(_) => status::handle(event, model),

        // UI actions domain
        Event::ClearError | Event::ClearSuccess => ui::handle(event, model),
    }
}
