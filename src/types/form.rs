use serde::{Deserialize, Serialize};

/// Weekday names as used by the schedule field names (`d_monday`, `hs_monday`, ...)
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Per-day schedule field prefixes: start/end/interval for the "h" and "m"
/// sub-schedules.
pub const SCHEDULE_FIELD_PREFIXES: [&str; 6] = ["hs", "he", "hi", "ms", "me", "mi"];

/// Kind of a form control
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Checkbox,
    Choice,
}

/// A single named form control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
    pub mandatory: bool,
    pub invalid: bool,
    /// Caret position the shell last reported for this control
    #[serde(default)]
    pub caret: Option<usize>,
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            mandatory: false,
            invalid: false,
            caret: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    /// A choice control (radio group / select) with its initial selection
    pub fn choice(name: impl Into<String>, initial: impl Into<String>) -> Self {
        let mut field = Self::new(name, FieldKind::Choice);
        field.value = initial.into();
        field
    }

    /// Builder pattern: carry the mandatory marker
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }
}

/// One wizard step and the controls it contains
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabState {
    pub title: String,
    pub fields: Vec<Field>,
    /// Set once the step validated successfully
    pub finished: bool,
}

impl TabState {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
            finished: false,
        }
    }
}

/// Which fields take part in validating a tab.
///
/// Two revisions of the original admin pages disagreed here; both behaviors
/// are kept selectable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only fields carrying the mandatory marker
    #[default]
    MandatoryOnly,
    /// Every text-kind field, regardless of marker
    AllInputs,
}

/// How the last wizard step hands the form to the device
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SubmitStrategy {
    /// Serialize the form and POST it, with redirect on success
    #[default]
    AsyncPost,
    /// Hand off to a native form submission in the shell
    NativeForm,
}

/// Step indicator state as rendered by the shell
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StepIndicator {
    Inactive,
    Active,
    Finished,
}

/// Label of the forward button
pub const NEXT_LABEL: &str = "Next";
pub const SUBMIT_LABEL: &str = "Submit";

/// The configuration wizard: ordered tabs of fields plus navigation state.
///
/// Exactly one tab is visible at a time (`current_tab`); everything the
/// original pages kept in the DOM (values, mandatory/invalid markers,
/// step indicators) lives here instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormState {
    pub tabs: Vec<TabState>,
    pub current_tab: usize,
    pub validation_mode: ValidationMode,
    pub submit_strategy: SubmitStrategy,
}

impl FormState {
    pub fn new(tabs: Vec<TabState>) -> Self {
        Self {
            tabs,
            current_tab: 0,
            validation_mode: ValidationMode::default(),
            submit_strategy: SubmitStrategy::default(),
        }
    }

    /// The standard datalogger configuration wizard
    pub fn datalogger() -> Self {
        let mut schedule = Vec::with_capacity(WEEKDAYS.len() * 7);
        for day in WEEKDAYS {
            schedule.push(Field::checkbox(format!("d_{day}")));
            for prefix in SCHEDULE_FIELD_PREFIXES {
                schedule.push(Field::text(format!("{prefix}_{day}")));
            }
        }

        Self::new(vec![
            TabState::new(
                "Logger",
                vec![
                    Field::text("LOGGER_NAME").mandatory(),
                    Field::text("LOGGER_ID").mandatory(),
                    Field::text("LOGGER_LOCATION").mandatory(),
                    Field::text("LOGGER_TITLE"),
                ],
            ),
            TabState::new(
                "Operation",
                vec![
                    Field::choice("STROBE_MODE", "strobe"),
                    Field::text("INTERVAL").mandatory(),
                    Field::choice("SIMPLE_UI", "simple_ui"),
                    Field::text("FONT_DISPLAY"),
                ],
            ),
            TabState::new("Schedule", schedule),
            TabState::new(
                "Hardware",
                vec![
                    Field::checkbox("HAVE_SD"),
                    Field::checkbox("HAVE_LIPO"),
                    Field::checkbox("HAVE_LORA"),
                    Field::text("CSV_FILENAME"),
                    Field::text("LORA_FREQ"),
                    Field::text("LORA_NODE_ADDR"),
                    Field::text("LORA_BASE_ADDR"),
                ],
            ),
            TabState::new(
                "Sensors & Tasks",
                vec![
                    Field::text("SENSORS").mandatory(),
                    Field::text("TASKS").mandatory(),
                ],
            ),
        ])
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_last_tab(&self) -> bool {
        !self.tabs.is_empty() && self.current_tab == self.tabs.len() - 1
    }

    /// The previous button is hidden on the first tab
    pub fn prev_visible(&self) -> bool {
        self.current_tab != 0
    }

    /// The forward button reads "Submit" on the last tab
    pub fn next_label(&self) -> &'static str {
        if self.is_last_tab() {
            SUBMIT_LABEL
        } else {
            NEXT_LABEL
        }
    }

    /// Indicator state of step `n`
    pub fn step_indicator(&self, n: usize) -> StepIndicator {
        if n == self.current_tab {
            StepIndicator::Active
        } else if self.tabs.get(n).is_some_and(|tab| tab.finished) {
            StepIndicator::Finished
        } else {
            StepIndicator::Inactive
        }
    }

    /// Display tab `n`; out-of-range indices are ignored.
    /// Returns whether the tab changed state.
    pub fn show_tab(&mut self, n: usize) -> bool {
        if n >= self.tabs.len() {
            return false;
        }
        self.current_tab = n;
        true
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.fields.iter())
            .find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.tabs
            .iter_mut()
            .flat_map(|tab| tab.fields.iter_mut())
            .find(|field| field.name == name)
    }

    /// Set a field value; unknown names are a silent no-op so the model can
    /// be applied before all controls exist.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.to_string();
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if let Some(field) = self.field_mut(name) {
            field.checked = checked;
        }
    }

    pub fn set_caret(&mut self, name: &str, caret: usize) {
        if let Some(field) = self.field_mut(name) {
            field.caret = Some(caret);
        }
    }

    pub fn set_mandatory(&mut self, name: &str, mandatory: bool) {
        if let Some(field) = self.field_mut(name) {
            field.mandatory = mandatory;
        }
    }

    /// Toggle the mandatory marker of a day's six schedule fields and clear
    /// their invalid markers (wired to the `d_<day>` checkboxes).
    pub fn toggle_day_mandatory(&mut self, day: &str) {
        for prefix in SCHEDULE_FIELD_PREFIXES {
            if let Some(field) = self.field_mut(&format!("{prefix}_{day}")) {
                field.mandatory = !field.mandatory;
                field.invalid = false;
            }
        }
    }

    /// Validate the currently visible tab.
    ///
    /// Empty in-scope fields get the invalid marker, non-empty ones are
    /// cleared; on full success the step is marked finished. The marker
    /// mutation happens regardless of the outcome.
    pub fn validate_current_tab(&mut self) -> bool {
        let mode = self.validation_mode;
        let Some(tab) = self.tabs.get_mut(self.current_tab) else {
            return true;
        };

        let mut valid = true;
        for field in &mut tab.fields {
            let in_scope = match mode {
                ValidationMode::MandatoryOnly => field.mandatory,
                ValidationMode::AllInputs => field.kind == FieldKind::Text,
            };
            if !in_scope {
                continue;
            }
            if field.value.is_empty() {
                field.invalid = true;
                valid = false;
            } else {
                field.invalid = false;
            }
        }

        if valid {
            tab.finished = true;
        }
        valid
    }

    /// Form-encoded pairs in tab order. Checkboxes contribute only when
    /// checked, matching a native form submission.
    pub fn serialize_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for tab in &self.tabs {
            for field in &tab.fields {
                match field.kind {
                    FieldKind::Checkbox => {
                        if field.checked {
                            pairs.push((field.name.clone(), "on".to_string()));
                        }
                    }
                    FieldKind::Text | FieldKind::Choice => {
                        pairs.push((field.name.clone(), field.value.clone()));
                    }
                }
            }
        }
        pairs
    }
}
