use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of device-stored files, one per admin page panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FileCategory {
    Csv,
    Log,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Log => "log",
        }
    }

    /// Endpoint serving this category's file names
    pub fn list_endpoint(&self) -> String {
        format!("/get_{}_list", self.as_str())
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire format of the file-list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileList {
    pub files: Vec<String>,
}

/// One row of a file panel, in server response order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// Set once the row was downloaded; the shell disables its control
    pub downloaded: bool,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            downloaded: false,
        }
    }

    /// Path of this file relative to the admin pages
    pub fn url(&self) -> String {
        if self.name.starts_with('/') {
            self.name.clone()
        } else {
            format!("/{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_endpoints_follow_category_names() {
        assert_eq!(FileCategory::Csv.list_endpoint(), "/get_csv_list");
        assert_eq!(FileCategory::Log.list_endpoint(), "/get_log_list");
    }

    #[test]
    fn url_keeps_absolute_paths() {
        assert_eq!(FileEntry::new("/sd/log_000.csv").url(), "/sd/log_000.csv");
        assert_eq!(FileEntry::new("log_000.csv").url(), "/log_000.csv");
    }
}
