//! Contact form submission flow
//!
//! ```text
//!          on_submit            submit delay             success hold
//!   Idle ------------> Submitting ----------> Success -----------------> Idle
//! ```
//!
//! There is no real request: the submit delay stands in for one. Submitting
//! is only accepted from `Idle`, so repeated submits never stack delays.
//! Required-field checks happen at the input boundary before `on_submit` is
//! called, not here.

use indexmap::IndexMap;
use nandi_core::{Timer, TimerHandle, TimerId, Tracked};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormPhase {
    /// The submit control is disabled only while a submission is pending
    pub fn submit_enabled(&self) -> bool {
        !matches!(self, FormPhase::Submitting)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormPhase::Idle => "Send Message",
            FormPhase::Submitting => "Sending...",
            FormPhase::Success => "Message Sent!",
        }
    }
}

/// Delays driving the flow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTimings {
    /// Simulated request time (Submitting -> Success)
    pub submit_delay_ms: u64,
    /// How long the success confirmation stays up (Success -> Idle)
    pub success_hold_ms: u64,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_hold_ms: 3000,
        }
    }
}

/// Render-ready form state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Field values in declaration order
    pub fields: IndexMap<String, String>,
    pub phase: FormPhase,
    /// Field that currently has input focus
    pub focused: Option<String>,
}

impl FormState {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether every field is empty
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

#[derive(Debug)]
pub struct FormSubmissionFlow {
    state: Tracked<FormState>,
    timings: FormTimings,
    handle: Option<TimerHandle>,
    /// Submit delay while Submitting, success hold while Success
    pending: Option<Timer>,
}

impl FormSubmissionFlow {
    /// Create an idle form with the given fields, all empty
    pub fn new<I, S>(fields: I, timings: FormTimings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|name| (name.into(), String::new()))
            .collect();
        Self {
            state: Tracked::new(FormState {
                fields,
                ..FormState::default()
            }),
            timings,
            handle: None,
            pending: None,
        }
    }

    /// Attach to the scheduler
    ///
    /// If the form was unmounted mid-flow, the delay for the current phase is
    /// scheduled again from the start.
    pub fn mount(&mut self, handle: &TimerHandle) {
        self.handle = Some(handle.clone());
        if self.pending.is_none() {
            match self.phase() {
                FormPhase::Idle => {}
                FormPhase::Submitting => {
                    self.pending = Timer::once(handle, self.timings.submit_delay_ms)
                }
                FormPhase::Success => {
                    self.pending = Timer::once(handle, self.timings.success_hold_ms)
                }
            }
        }
    }

    /// Cancel any pending delay and detach from the scheduler
    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.pending.take() {
            timer.cancel();
            tracing::debug!(phase = ?self.phase(), "form unmounted with pending delay");
        }
        self.handle = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Set a field value (last write wins)
    pub fn on_field_change(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|state| {
            state.fields.insert(name.to_string(), value);
        });
    }

    pub fn on_focus(&mut self, name: &str) {
        let focused = Some(name.to_string());
        if self.state.get().focused != focused {
            self.state.update(|state| state.focused = focused);
        }
    }

    pub fn on_blur(&mut self) {
        if self.state.get().focused.is_some() {
            self.state.update(|state| state.focused = None);
        }
    }

    /// Begin a submission
    ///
    /// Only accepted while `Idle` and mounted; otherwise a no-op returning
    /// `false`. Never leaves more than one delay pending.
    pub fn on_submit(&mut self) -> bool {
        if self.phase() != FormPhase::Idle {
            tracing::debug!(phase = ?self.phase(), "submit ignored");
            return false;
        }
        let Some(timer) = self
            .handle
            .as_ref()
            .and_then(|handle| Timer::once(handle, self.timings.submit_delay_ms))
        else {
            tracing::warn!("submit ignored: form is not mounted");
            return false;
        };

        self.pending = Some(timer);
        self.state.update(|state| state.phase = FormPhase::Submitting);
        tracing::debug!(delay_ms = self.timings.submit_delay_ms, "form submitting");
        true
    }

    /// Handle a timer firing. Returns `false` for firings it does not own.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.pending.as_ref().is_some_and(|timer| timer.owns(id)) {
            return false;
        }
        self.pending = None;

        match self.phase() {
            FormPhase::Submitting => {
                self.state.update(|state| {
                    state.phase = FormPhase::Success;
                    for value in state.fields.values_mut() {
                        value.clear();
                    }
                });
                self.pending = self
                    .handle
                    .as_ref()
                    .and_then(|handle| Timer::once(handle, self.timings.success_hold_ms));
                tracing::debug!("form submitted");
            }
            FormPhase::Success => {
                self.state.update(|state| state.phase = FormPhase::Idle);
                tracing::debug!("form reset to idle");
            }
            FormPhase::Idle => {}
        }
        true
    }

    pub fn phase(&self) -> FormPhase {
        self.state.get().phase
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase().submit_enabled()
    }

    pub fn submit_label(&self) -> &'static str {
        self.phase().submit_label()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.state.get().field(name)
    }

    pub fn state(&self) -> &FormState {
        self.state.get()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.snapshot()
    }

    /// Whether a delay is waiting to fire
    pub fn has_pending_delay(&self) -> bool {
        self.pending.as_ref().is_some_and(Timer::is_pending)
    }

    pub fn timings(&self) -> FormTimings {
        self.timings
    }

    pub fn writes(&self) -> u64 {
        self.state.writes()
    }
}
