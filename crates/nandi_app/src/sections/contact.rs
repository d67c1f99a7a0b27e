//! Contact section and the form's input boundary
//!
//! The submission flow accepts any field name and any value; this layer is
//! where names are checked against the form, select values against their
//! options, and required fields on submit.

use nandi_core::{TimerHandle, TimerId};
use nandi_icons::Icon;
use nandi_widgets::{FormPhase, FormState, FormSubmissionFlow, FormTimings};
use serde::Serialize;

use crate::content::{CONTACT_CHANNELS, FORM_FIELDS, REQUIRED_FIELDS, ROUTE_OPTIONS};
use crate::error::{Result, SiteError};

#[derive(Debug)]
pub struct ContactSection {
    form: FormSubmissionFlow,
}

impl ContactSection {
    pub fn new(timings: FormTimings) -> Self {
        Self {
            form: FormSubmissionFlow::new(FORM_FIELDS, timings),
        }
    }

    pub fn mount(&mut self, handle: &TimerHandle) {
        self.form.mount(handle);
    }

    pub fn unmount(&mut self) {
        self.form.unmount();
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.form.on_timer(id)
    }

    pub fn on_field_change(&mut self, name: &str, value: &str) -> Result<()> {
        check_field(name)?;
        if name == "route" && !ROUTE_OPTIONS.iter().any(|(option, _)| *option == value) {
            return Err(SiteError::InvalidOption {
                field: name.to_string(),
                value: value.to_string(),
            });
        }
        self.form.on_field_change(name, value);
        Ok(())
    }

    pub fn on_focus(&mut self, name: &str) -> Result<()> {
        check_field(name)?;
        self.form.on_focus(name);
        Ok(())
    }

    pub fn on_blur(&mut self) {
        self.form.on_blur();
    }

    /// Validate and submit
    ///
    /// Outside `Idle` this is the same no-op as on the flow itself. From
    /// `Idle`, the first blank required field is reported and the flow is
    /// left untouched.
    pub fn on_submit(&mut self) -> Result<bool> {
        if self.form.phase() != FormPhase::Idle {
            return Ok(self.form.on_submit());
        }
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|name| self.form.field(name).map_or(true, |v| v.trim().is_empty()))
        {
            tracing::debug!(field = missing, "submit rejected");
            return Err(SiteError::MissingField(missing.to_string()));
        }
        Ok(self.form.on_submit())
    }

    pub fn form(&self) -> &FormSubmissionFlow {
        &self.form
    }

    pub fn view(&self) -> ContactView {
        ContactView {
            channels: CONTACT_CHANNELS
                .iter()
                .map(|channel| ChannelView {
                    title: channel.title,
                    details: channel.details.to_vec(),
                    icon: channel.icon,
                })
                .collect(),
            form: self.form.snapshot(),
            submit_enabled: self.form.submit_enabled(),
            submit_label: self.form.submit_label(),
            route_options: ROUTE_OPTIONS.to_vec(),
        }
    }
}

fn check_field(name: &str) -> Result<()> {
    if FORM_FIELDS.contains(&name) {
        Ok(())
    } else {
        Err(SiteError::UnknownField(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactView {
    pub channels: Vec<ChannelView>,
    pub form: FormState,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub route_options: Vec<(&'static str, &'static str)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelView {
    pub title: &'static str,
    pub details: Vec<&'static str>,
    pub icon: Icon,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::TimerScheduler;

    fn filled(contact: &mut ContactSection) {
        contact.on_field_change("name", "Asha").unwrap();
        contact.on_field_change("phone", "9876500000").unwrap();
        contact.on_field_change("route", "balasore-berhampur").unwrap();
        contact.on_field_change("message", "Two seats").unwrap();
    }

    #[test]
    fn test_rejects_unknown_field() {
        let mut contact = ContactSection::new(FormTimings::default());
        let err = contact.on_field_change("email", "a@b.c").unwrap_err();
        assert!(matches!(err, SiteError::UnknownField(name) if name == "email"));
        assert!(contact.on_focus("email").is_err());
    }

    #[test]
    fn test_rejects_unknown_route() {
        let mut contact = ContactSection::new(FormTimings::default());
        let err = contact.on_field_change("route", "balasore-puri").unwrap_err();
        assert!(matches!(err, SiteError::InvalidOption { .. }));
        assert!(contact.on_field_change("route", "").is_ok());
    }

    #[test]
    fn test_submit_requires_every_field() {
        let scheduler = TimerScheduler::new();
        let mut contact = ContactSection::new(FormTimings::default());
        contact.mount(&scheduler.handle());
        contact.on_field_change("name", "Asha").unwrap();
        contact.on_field_change("phone", "   ").unwrap();

        let err = contact.on_submit().unwrap_err();
        assert!(matches!(err, SiteError::MissingField(name) if name == "phone"));
        assert_eq!(contact.form().phase(), FormPhase::Idle);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_submit_when_complete() {
        let scheduler = TimerScheduler::new();
        let mut contact = ContactSection::new(FormTimings::default());
        contact.mount(&scheduler.handle());
        filled(&mut contact);

        assert!(contact.on_submit().unwrap());
        let view = contact.view();
        assert_eq!(view.submit_label, "Sending...");
        assert!(!view.submit_enabled);
        // second submit is a quiet no-op, not a validation error
        assert!(!contact.on_submit().unwrap());
    }
}
