/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.status, Some(info))
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.low_battery, true;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, check_response_status, extract_error_message, extract_string_response,
    handle_request_error, is_response_success, map_http_error, parse_json_response,
    process_json_response, process_status_response, process_string_response, BASE_URL,
};

/// Macro for GET requests against the device API with standard error handling.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
///
/// ```ignore
/// api_get!(model, "/get_model", ConfigResponse, "Load configuration",
///     expect_json: ConfigModel
/// )
/// ```
#[macro_export]
macro_rules! api_get {
    ($model:expr, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($crate::build_url($endpoint))
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
        ])
    }};
}

/// Macro for POST requests against the device API with standard error handling.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Patterns
///
/// Pattern 1: form-encoded body, plain-text response
/// ```ignore
/// api_post!(model, "/save_config", SaveConfigResponse, "Save configuration",
///     body_form: &pairs, expect_text
/// )
/// ```
///
/// Pattern 2: form-encoded body, JSON response
/// ```ignore
/// api_post!(model, "/set_time", SetTimeResponse, "Set time",
///     body_form: &request, expect_json: StatusInfo
/// )
/// ```
///
/// Pattern 3: raw bytes body, plain-text response
/// ```ignore
/// api_post!(model, "/upload_config", UploadConfigResponse, "Upload configuration",
///     body_bytes: data, expect_text
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    // Pattern 1: form-encoded body, plain-text response
    ($model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_form: $body:expr, expect_text) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::build_url($endpoint)).body_form($body) {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::process_string_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};

    // Pattern 2: form-encoded body, JSON response
    ($model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_form: $body:expr, expect_json: $response_type:ty) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::build_url($endpoint)).body_form($body) {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};

    // Pattern 3: raw bytes body, plain-text response
    ($model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_bytes: $body:expr, expect_text) => {{
        $model.start_loading();
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::build_url($endpoint))
                .body_bytes($body)
                .build()
                .then_send(|result| {
                    let event_result = $crate::process_string_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
        ])
    }};
}

/// Macro for handling response events with standard loading state and error handling.
///
/// # Patterns
///
/// Pattern 1: Only success message (for `Result<(), String>`)
/// ```ignore
/// handle_response!(model, result, {
///     success_message: "time updated",
/// })
/// ```
///
/// Pattern 2: Custom success handling
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
/// })
/// ```
///
/// Pattern 3: Custom success handler + success message
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
///     success_message: "Operation successful",
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    // Pattern 1: Only success message (for Result<(), String>)
    ($model:expr, $result:expr, {
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok(()) => {
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 2: Only custom success handler
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};

    // Pattern 3: Custom success handler + success message
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block,
        success_message: $msg:expr $(,)?
    }) => {{
        $model.stop_loading();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
                $model.success_message = Some($msg.to_string());
            }
            Err(e) => {
                $model.set_error(e);
            }
        }
        crux_core::render::render()
    }};
}
