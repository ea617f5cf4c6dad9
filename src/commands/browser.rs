//! Browser command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! window-level operations the core cannot perform itself.

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell performs against the hosting browser window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserOperation {
    /// Open a URL in a new browsing context (file downloads)
    OpenWindow { url: String },
    /// Replace the current location, e.g. back to the main menu
    Redirect { url: String },
    /// Submit a form element natively instead of posting it from the core
    SubmitForm { form_id: String },
}

impl Operation for BrowserOperation {
    type Output = ();
}

/// Command-based browser API
pub struct Browser<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Browser<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    /// Open `url` in a new browsing context
    pub fn open_window(url: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(BrowserOperation::OpenWindow { url: url.into() }).into()
    }

    /// Navigate the current window to `url`
    pub fn redirect(url: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(BrowserOperation::Redirect { url: url.into() }).into()
    }

    /// Natively submit the form with DOM id `form_id`
    pub fn submit_form(form_id: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(BrowserOperation::SubmitForm {
            form_id: form_id.into(),
        })
        .into()
    }
}
