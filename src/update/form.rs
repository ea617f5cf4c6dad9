use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::{insert_token, remove_token};
use crate::Effect;

/// Handle form input events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::SetField { name, value } => {
            model.form.set_value(&name, &value);
            render()
        }

        Event::SetChecked { name, checked } => {
            // day checkboxes drive the mandatory markers of the six
            // schedule fields for that day
            if let Some(day) = name.strip_prefix("d_") {
                model.form.toggle_day_mandatory(day);
            }
            model.form.set_checked(&name, checked);
            render()
        }

        Event::SetCaret { name, caret } => {
            // caret tracking only; nothing to redraw
            model.form.set_caret(&name, caret);
            Command::done()
        }

        Event::ToggleSelectOption { list, option } => toggle_select_option(model, &list, &option),

        _ => unreachable!("Non-form event passed to form handler"),
    }
}

/// Toggle one option of a multi-select list and mirror the change into the
/// backing text field at the tracked caret position.
fn toggle_select_option(model: &mut Model, list: &str, option: &str) -> Command<Effect, Event> {
    let Some(select) = model.select_lists.get_mut(list) else {
        return Command::done();
    };
    let Some(now_selected) = select.toggle(option) else {
        return Command::done();
    };

    if let Some(field) = model.form.field_mut(list) {
        field.value = if now_selected {
            insert_token(&field.value, option, field.caret)
        } else {
            remove_token(&field.value, option)
        };
    }
    render()
}
