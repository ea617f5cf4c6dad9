use crux_core::{render::render, Command};
use serde_json::Value;

use crate::api_get;
use crate::api_post;
use crate::events::Event;
use crate::handle_response;
use crate::model::Model;
use crate::types::{
    ConfigModel, FormState, SelectList, SubmitStrategy, TimeTable, SCHEDULE_FIELD_PREFIXES,
};
use crate::update_field;
use crate::{BrowserCmd, Effect};

/// Page the async submitter returns to after a successful save
pub const MAIN_MENU_PAGE: &str = "index.html";

/// DOM id of the configuration form, for the native submit strategy
pub const CONFIG_FORM_ID: &str = "configForm";

/// Handle configuration load/apply/submit events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::LoadConfig => api_get!(
            model,
            "/get_model",
            ConfigResponse,
            "Load configuration",
            expect_json: ConfigModel
        ),

        Event::ConfigResponse(result) => handle_response!(model, result, {
            on_success: |model, config| {
                apply_config(model, &config);
            },
        }),

        Event::SubmitConfig => submit(model),

        Event::SaveConfigResponse(result) => {
            model.stop_loading();
            match result {
                Ok(msg) => {
                    model.success_message = Some(msg);
                    Command::all([render(), BrowserCmd::redirect(MAIN_MENU_PAGE)])
                }
                Err(e) => model.set_error_and_render(e),
            }
        }

        Event::UploadConfig { data } => api_post!(
            model,
            "/upload_config",
            UploadConfigResponse,
            "Upload configuration",
            body_bytes: data,
            expect_text
        ),

        Event::UploadConfigResponse(result) => handle_response!(model, result, {
            on_success: |model, msg| {
                model.success_message = Some(msg);
            },
        }),

        Event::UploadFileSelected { filename } => {
            update_field!(model.upload_enabled, !filename.is_empty())
        }

        _ => unreachable!("Non-config event passed to config handler"),
    }
}

/// Kick off submission according to the configured strategy
pub fn submit(model: &mut Model) -> Command<Effect, Event> {
    match model.form.submit_strategy {
        SubmitStrategy::AsyncPost => {
            let pairs = model.form.serialize_pairs();
            api_post!(
                model,
                "/save_config",
                SaveConfigResponse,
                "Save configuration",
                body_form: &pairs,
                expect_text
            )
        }
        SubmitStrategy::NativeForm => BrowserCmd::submit_form(CONFIG_FORM_ID),
    }
}

/// Populate form controls and option lists from the device configuration.
///
/// Tolerates option lists and target controls that do not exist in the form
/// definition; every population step is a silent no-op in that case.
pub(crate) fn apply_config(model: &mut Model, config: &ConfigModel) {
    // build the dynamic select option lists
    model.select_lists.insert(
        "SENSORS".to_string(),
        SelectList::new(config.str_list("_s_options")),
    );
    model.select_lists.insert(
        "TASKS".to_string(),
        SelectList::new(config.str_list("_t_options")),
    );

    // defaults for the two choice fields, overridden below when the model
    // carries the keys
    model.form.set_value("STROBE_MODE", "strobe");
    model.form.set_value("SIMPLE_UI", "simple_ui");

    for (name, value) in config.entries() {
        match name.as_str() {
            "_s_options" | "_t_options" => {}

            "STROBE_MODE" => {
                let choice = if truthy(value) { "strobe" } else { "cont" };
                model.form.set_value(name, choice);
            }

            "SIMPLE_UI" => {
                let choice = if truthy(value) { "simple_ui" } else { "tab_ui" };
                model.form.set_value(name, choice);
            }

            "TIME_TABLE" => update_time_table(&mut model.form, &TimeTable::from_value(value)),

            "SENSORS" | "TASKS" => apply_token_list(model, name, value),

            "HAVE_SD" | "HAVE_LIPO" | "HAVE_LORA" => {
                model.form.set_checked(name, truthy(value));
            }

            _ => model.form.set_value(name, &scalar_text(value)),
        }
    }
}

/// Populate the backing text field of a multi-select and mark its chosen
/// options selected.
fn apply_token_list(model: &mut Model, name: &str, value: &Value) {
    let Some(items) = value.as_array() else {
        log::warn!("{name}: expected a list, got {value}");
        return;
    };
    let tokens: Vec<&str> = items.iter().filter_map(Value::as_str).collect();

    model.form.set_value(name, &tokens.join(" "));
    if let Some(select) = model.select_lists.get_mut(name) {
        for token in tokens {
            select.toggle(token);
        }
    }
}

/// Per-weekday population of the schedule fields: set the six start/end/
/// interval values and mark them mandatory for every scheduled day;
/// unscheduled days are left untouched.
pub(crate) fn update_time_table(form: &mut FormState, table: &TimeTable) {
    for (day, schedule) in &table.0 {
        let Some(schedule) = schedule else { continue };

        form.set_checked(&format!("d_{day}"), true);
        let values = schedule.hours.iter().chain(schedule.minutes.iter());
        for (prefix, value) in SCHEDULE_FIELD_PREFIXES.iter().zip(values) {
            let name = format!("{prefix}_{day}");
            form.set_value(&name, &value.to_string());
            form.set_mandatory(&name, true);
        }
    }
}

fn truthy(value: &Value) -> bool {
    value.as_bool().unwrap_or(false)
}

/// Text rendition of a scalar model value for a form control
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> ConfigModel {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn time_table_populates_and_marks_scheduled_days() {
        let mut model = Model::default();
        let table = TimeTable::from_value(&json!({
            "monday": [[1, 2, 3], [4, 5, 6]],
            "tuesday": null,
        }));

        update_time_table(&mut model.form, &table);

        for (name, value) in [
            ("hs_monday", "1"),
            ("he_monday", "2"),
            ("hi_monday", "3"),
            ("ms_monday", "4"),
            ("me_monday", "5"),
            ("mi_monday", "6"),
        ] {
            let field = model.form.field(name).unwrap();
            assert_eq!(field.value, value, "{name}");
            assert!(field.mandatory, "{name}");
        }
        assert!(model.form.field("d_monday").unwrap().checked);

        let tuesday = model.form.field("hs_tuesday").unwrap();
        assert_eq!(tuesday.value, "");
        assert!(!tuesday.mandatory);
        assert!(!model.form.field("d_tuesday").unwrap().checked);
    }

    #[test]
    fn apply_config_builds_option_lists_and_selections() {
        let mut model = Model::default();
        let config = config(json!({
            "_s_options": ["aht20", "bmp280", "scd40"],
            "_t_options": ["save_data", "send_udp"],
            "SENSORS": ["aht20", "scd40"],
            "TASKS": ["save_data"],
        }));

        apply_config(&mut model, &config);

        assert_eq!(model.form.field("SENSORS").unwrap().value, "aht20 scd40");
        assert_eq!(model.form.field("TASKS").unwrap().value, "save_data");
        let sensors = &model.select_lists["SENSORS"];
        assert!(sensors.is_selected("aht20"));
        assert!(sensors.is_selected("scd40"));
        assert!(!sensors.is_selected("bmp280"));
    }

    #[test]
    fn apply_config_maps_boolean_flags() {
        let mut model = Model::default();
        let config = config(json!({
            "STROBE_MODE": false,
            "SIMPLE_UI": true,
            "HAVE_SD": true,
            "HAVE_LORA": false,
        }));

        apply_config(&mut model, &config);

        assert_eq!(model.form.field("STROBE_MODE").unwrap().value, "cont");
        assert_eq!(model.form.field("SIMPLE_UI").unwrap().value, "simple_ui");
        assert!(model.form.field("HAVE_SD").unwrap().checked);
        assert!(!model.form.field("HAVE_LORA").unwrap().checked);
    }

    #[test]
    fn apply_config_defaults_choices_when_keys_are_absent() {
        let mut model = Model::default();
        model.form.set_value("STROBE_MODE", "");

        apply_config(&mut model, &config(json!({})));

        assert_eq!(model.form.field("STROBE_MODE").unwrap().value, "strobe");
        assert_eq!(model.form.field("SIMPLE_UI").unwrap().value, "simple_ui");
    }

    #[test]
    fn apply_config_sets_plain_fields_directly() {
        let mut model = Model::default();
        let config = config(json!({
            "LOGGER_NAME": "Darasa Kamili",
            "INTERVAL": 60,
            "UNKNOWN_KEY": "ignored",
        }));

        apply_config(&mut model, &config);

        assert_eq!(
            model.form.field("LOGGER_NAME").unwrap().value,
            "Darasa Kamili"
        );
        assert_eq!(model.form.field("INTERVAL").unwrap().value, "60");
        // unknown keys have no control and are dropped silently
        assert!(model.form.field("UNKNOWN_KEY").is_none());
    }
}
