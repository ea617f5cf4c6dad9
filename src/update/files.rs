use crux_core::{render::render, Command};

use crate::events::Event;
use crate::handle_response;
use crate::http_helpers::{build_url, process_json_response, process_status_response};
use crate::model::Model;
use crate::types::{FileCategory, FileEntry, FileList};
use crate::{BrowserCmd, Effect, HttpCmd};

/// Handle file panel events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::LoadFileList(category) => load_file_list(model, category),

        Event::FileListResponse(category, result) => handle_response!(model, result, {
            on_success: |model, list| {
                rebuild_file_list(model, category, list);
            },
        }),

        Event::DownloadFile { category, index } => {
            let Some(entry) = model.files_mut(category).get_mut(index) else {
                return Command::done();
            };
            entry.downloaded = true;
            let url = entry.url();
            Command::all([render(), BrowserCmd::open_window(url)])
        }

        Event::DeleteFile { category, index } => {
            let Some(entry) = model.files(category).get(index) else {
                return Command::done();
            };
            let file = entry.name.clone();
            delete_file(model, category, file)
        }

        Event::DeleteFileResponse {
            category,
            file,
            result,
        } => {
            model.stop_loading();
            match result {
                Ok(()) => {
                    model.success_message = Some(format!("{file} deleted"));
                    // rebuild the panel from the server's current state
                    Command::all([render(), load_file_list(model, category)])
                }
                Err(e) => model.set_error_and_render(e),
            }
        }

        _ => unreachable!("Non-file event passed to file handler"),
    }
}

/// Fetch the file names of one category and rebuild that panel
pub(crate) fn load_file_list(model: &mut Model, category: FileCategory) -> Command<Effect, Event> {
    model.start_loading();
    Command::all([
        render(),
        HttpCmd::get(build_url(&category.list_endpoint()))
            .build()
            .then_send(move |result| {
                let event_result = process_json_response("Load file list", result);
                Event::FileListResponse(category, event_result)
            }),
    ])
}

fn rebuild_file_list(model: &mut Model, category: FileCategory, list: FileList) {
    *model.files_mut(category) = list.files.into_iter().map(FileEntry::new).collect();
}

fn delete_file(model: &mut Model, category: FileCategory, file: String) -> Command<Effect, Event> {
    model.start_loading();
    let endpoint = if file.starts_with('/') {
        format!("{file}.delete")
    } else {
        format!("/{file}.delete")
    };
    Command::all([
        render(),
        HttpCmd::get(build_url(&endpoint))
            .build()
            .then_send(move |result| Event::DeleteFileResponse {
                category,
                file,
                result: process_status_response("Delete file", result),
            }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_list_response_rebuilds_panel_rows() {
        let mut model = Model::default();
        model.csv_files = vec![FileEntry::new("stale.csv")];

        let list = FileList {
            files: vec!["log_000_2024-01-01.csv".to_string(), "log_000_2024-01-02.csv".to_string()],
        };
        let _ = handle(Event::FileListResponse(FileCategory::Csv, Ok(list)), &mut model);

        assert_eq!(model.csv_files.len(), 2);
        assert_eq!(model.csv_files[0].name, "log_000_2024-01-01.csv");
        assert!(!model.csv_files[0].downloaded);
        // other category untouched
        assert!(model.log_files.is_empty());
    }

    #[test]
    fn download_marks_row() {
        let mut model = Model::default();
        model.log_files = vec![FileEntry::new("messages.log")];

        let _ = handle(
            Event::DownloadFile {
                category: FileCategory::Log,
                index: 0,
            },
            &mut model,
        );

        assert!(model.log_files[0].downloaded);
    }

    #[test]
    fn download_out_of_range_is_a_noop() {
        let mut model = Model::default();

        let _ = handle(
            Event::DownloadFile {
                category: FileCategory::Csv,
                index: 3,
            },
            &mut model,
        );

        assert!(model.csv_files.is_empty());
    }

    #[test]
    fn delete_success_shows_message_and_reloads() {
        let mut model = Model::default();
        model.csv_files = vec![FileEntry::new("log_000.csv")];

        let _ = handle(
            Event::DeleteFileResponse {
                category: FileCategory::Csv,
                file: "log_000.csv".to_string(),
                result: Ok(()),
            },
            &mut model,
        );

        assert_eq!(
            model.success_message.as_deref(),
            Some("log_000.csv deleted")
        );
        // the reload request is in flight
        assert!(model.is_loading);
    }

    #[test]
    fn delete_failure_surfaces_error() {
        let mut model = Model::default();

        let _ = handle(
            Event::DeleteFileResponse {
                category: FileCategory::Csv,
                file: "log_000.csv".to_string(),
                result: Err("Delete file failed: HTTP 404".to_string()),
            },
            &mut model,
        );

        assert_eq!(
            model.error_message.as_deref(),
            Some("Delete file failed: HTTP 404")
        );
        assert!(!model.is_loading);
    }
}
