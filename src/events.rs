use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    // Initialization
    Initialize,

    // Wizard navigation
    ShowTab(usize),
    NextTab,
    PrevTab,

    // Form input
    SetField {
        name: String,
        value: String,
    },
    SetChecked {
        name: String,
        checked: bool,
    },
    SetCaret {
        name: String,
        caret: usize,
    },
    ToggleSelectOption {
        list: String,
        option: String,
    },

    // Device configuration
    LoadConfig,
    SubmitConfig,
    UploadConfig {
        data: Vec<u8>,
    },
    UploadFileSelected {
        filename: String,
    },

    // File panels
    LoadFileList(FileCategory),
    DownloadFile {
        category: FileCategory,
        index: usize,
    },
    DeleteFile {
        category: FileCategory,
        index: usize,
    },

    // Status panel
    LoadStatus,
    SetDeviceTime {
        epoch_millis: i64,
        tz_offset_minutes: i64,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ConfigResponse(Result<ConfigModel, String>),
    #[serde(skip)]
    SaveConfigResponse(Result<String, String>),
    #[serde(skip)]
    UploadConfigResponse(Result<String, String>),
    #[serde(skip)]
    FileListResponse(FileCategory, Result<FileList, String>),
    #[serde(skip)]
    DeleteFileResponse {
        category: FileCategory,
        file: String,
        result: Result<(), String>,
    },
    #[serde(skip)]
    StatusResponse(Result<StatusInfo, String>),
    #[serde(skip)]
    SetTimeResponse(Result<StatusInfo, String>),

    // UI actions
    ClearError,
    ClearSuccess,
}
