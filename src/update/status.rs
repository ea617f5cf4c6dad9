use crux_core::Command;

use crate::api_get;
use crate::api_post;
use crate::events::Event;
use crate::handle_response;
use crate::model::Model;
use crate::types::{local_epoch_seconds, SetTimeRequest, StatusInfo};
use crate::Effect;

/// Warning shown while the battery is below its chemistry's threshold
pub(crate) const BATTERY_WARNING: &str = "battery low, please replace before proceeding!";

/// Handle status panel events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::LoadStatus => api_get!(
            model,
            "/get_status_info",
            StatusResponse,
            "Load status",
            expect_json: StatusInfo
        ),

        Event::StatusResponse(result) => handle_response!(model, result, {
            on_success: |model, info| {
                apply_status(model, info);
            },
        }),

        Event::SetDeviceTime {
            epoch_millis,
            tz_offset_minutes,
        } => {
            let request = SetTimeRequest {
                ts: local_epoch_seconds(epoch_millis, tz_offset_minutes),
            };
            api_post!(
                model,
                "/set_time",
                SetTimeResponse,
                "Set time",
                body_form: &request,
                expect_json: StatusInfo
            )
        }

        Event::SetTimeResponse(result) => handle_response!(model, result, {
            on_success: |model, info| {
                apply_status(model, info);
            },
            success_message: "time updated",
        }),

        _ => unreachable!("Non-status event passed to status handler"),
    }
}

/// Store the snapshot and apply the low-battery policy: below the threshold
/// the upload and manual-entry controls are hidden and a persistent warning
/// is shown.
pub(crate) fn apply_status(model: &mut Model, info: StatusInfo) {
    model.low_battery = info.battery_low();
    if model.low_battery {
        model.upload_hidden = true;
        model.manual_hidden = true;
        model.battery_warning = Some(BATTERY_WARNING.to_string());
    }
    model.status = Some(info);
}
