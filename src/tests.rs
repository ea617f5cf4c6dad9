use super::*;
use crux_core::testing::AppTester;

#[test]
fn test_show_tab_buttons_and_indicator() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let last = model.form.tab_count() - 1;

    for n in 0..model.form.tab_count() {
        let _command = app.update(Event::ShowTab(n), &mut model);

        assert_eq!(model.form.current_tab, n);
        assert_eq!(model.form.prev_visible(), n != 0);
        assert_eq!(model.form.next_label() == "Submit", n == last);
        assert_eq!(model.form.step_indicator(n), StepIndicator::Active);
    }
}

#[test]
fn test_next_from_invalid_tab_keeps_current() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::NextTab, &mut model);

    assert_eq!(model.form.current_tab, 0);
    assert!(model.form.field("LOGGER_NAME").unwrap().invalid);
    assert!(!model.form.tabs[0].finished);
}

#[test]
fn test_next_from_valid_tab_advances() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    for (name, value) in [
        ("LOGGER_NAME", "Darasa Kamili"),
        ("LOGGER_ID", "000"),
        ("LOGGER_LOCATION", "6G5X46G4+XQ"),
    ] {
        let _command = app.update(
            Event::SetField {
                name: name.to_string(),
                value: value.to_string(),
            },
            &mut model,
        );
    }
    let _command = app.update(Event::NextTab, &mut model);

    assert_eq!(model.form.current_tab, 1);
    assert_eq!(model.form.step_indicator(0), StepIndicator::Finished);
}

#[test]
fn test_submit_on_last_tab_starts_save() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let last = model.form.tab_count() - 1;

    let _command = app.update(Event::ShowTab(last), &mut model);
    for name in ["SENSORS", "TASKS"] {
        let _command = app.update(
            Event::SetField {
                name: name.to_string(),
                value: "id battery".to_string(),
            },
            &mut model,
        );
    }
    let _command = app.update(Event::NextTab, &mut model);

    // submission, not navigation
    assert_eq!(model.form.current_tab, last);
    assert!(model.is_loading);
}

#[test]
fn test_config_response_populates_form() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let config: ConfigModel = serde_json::from_value(serde_json::json!({
        "_s_options": ["aht20", "scd40"],
        "_t_options": ["save_data", "send_udp"],
        "LOGGER_NAME": "Darasa Kamili",
        "STROBE_MODE": true,
        "HAVE_LIPO": true,
        "SENSORS": ["aht20"],
        "TIME_TABLE": {
            "monday": [[7, 18, 1], [0, 59, 15]],
            "tuesday": null,
        },
    }))
    .unwrap();
    let _command = app.update(Event::ConfigResponse(Ok(config)), &mut model);

    assert_eq!(
        model.form.field("LOGGER_NAME").unwrap().value,
        "Darasa Kamili"
    );
    assert_eq!(model.form.field("STROBE_MODE").unwrap().value, "strobe");
    assert!(model.form.field("HAVE_LIPO").unwrap().checked);
    assert_eq!(model.form.field("SENSORS").unwrap().value, "aht20");
    assert!(model.select_lists["SENSORS"].is_selected("aht20"));
    assert!(!model.select_lists["SENSORS"].is_selected("scd40"));
    assert_eq!(model.form.field("hs_monday").unwrap().value, "7");
    assert!(model.form.field("mi_monday").unwrap().mandatory);
    assert_eq!(model.form.field("hs_tuesday").unwrap().value, "");
}

#[test]
fn test_low_battery_status_hides_upload() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let info = StatusInfo {
        cp_version: "9.0.5".to_string(),
        board_id: "raspberry_pi_pico".to_string(),
        pcb_version: "v2".to_string(),
        dl_commit: "abc1234".to_string(),
        dev_time: 1_700_000_000,
        battery: 3.0,
        lipo: true,
    };
    let _command = app.update(Event::StatusResponse(Ok(info.clone())), &mut model);

    assert!(model.upload_hidden);
    assert!(model.manual_hidden);
    assert!(model.battery_warning.is_some());
    assert_eq!(model.status, Some(info));
}

#[test]
fn test_upload_button_follows_file_selection() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::UploadFileSelected {
            filename: "config.py".to_string(),
        },
        &mut model,
    );
    assert!(model.upload_enabled);

    let _command = app.update(
        Event::UploadFileSelected {
            filename: String::new(),
        },
        &mut model,
    );
    assert!(!model.upload_enabled);
}

#[test]
fn test_clear_error() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        error_message: Some("Some error".to_string()),
        ..Default::default()
    };

    let _command = app.update(Event::ClearError, &mut model);

    assert_eq!(model.error_message, None);
}
