use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    // Configuration wizard state (tabs, fields, markers)
    pub form: FormState,

    // Dynamic multi-select option lists, keyed by backing field name
    pub select_lists: BTreeMap<String, SelectList>,

    // File panels
    pub csv_files: Vec<FileEntry>,
    pub log_files: Vec<FileEntry>,

    // Status panel
    pub status: Option<StatusInfo>,
    pub low_battery: bool,
    pub battery_warning: Option<String>,

    // Upload / manual-entry control state
    pub upload_hidden: bool,
    pub manual_hidden: bool,
    pub upload_enabled: bool,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            form: FormState::datalogger(),
            select_lists: BTreeMap::new(),
            csv_files: Vec::new(),
            log_files: Vec::new(),
            status: None,
            low_battery: false,
            battery_warning: None,
            upload_hidden: false,
            manual_hidden: false,
            upload_enabled: false,
            is_loading: false,
            error_message: None,
            success_message: None,
        }
    }
}

impl Model {
    /// File entries of one category
    pub fn files(&self, category: FileCategory) -> &Vec<FileEntry> {
        match category {
            FileCategory::Csv => &self.csv_files,
            FileCategory::Log => &self.log_files,
        }
    }

    /// Mutable file entries of one category
    pub fn files_mut(&mut self, category: FileCategory) -> &mut Vec<FileEntry> {
        match category {
            FileCategory::Csv => &mut self.csv_files,
            FileCategory::Log => &mut self.log_files,
        }
    }

    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    ///
    /// This is a convenience method that combines `set_error()` with `render()`,
    /// which is a very common pattern throughout the codebase.
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
