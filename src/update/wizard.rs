use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Handle wizard navigation events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ShowTab(n) => {
            if model.form.show_tab(n) {
                render()
            } else {
                Command::done()
            }
        }

        Event::PrevTab => {
            // no validation on the way back
            if model.form.current_tab > 0 {
                let previous = model.form.current_tab - 1;
                model.form.show_tab(previous);
            }
            render()
        }

        Event::NextTab => {
            if !model.form.validate_current_tab() {
                // markers changed even though navigation is refused
                return render();
            }
            if model.form.is_last_tab() {
                super::config::submit(model)
            } else {
                let next = model.form.current_tab + 1;
                model.form.show_tab(next);
                render()
            }
        }

        _ => unreachable!("Non-wizard event passed to wizard handler"),
    }
}
