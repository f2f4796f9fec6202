//! Login form state machine.
//!
//! `Idle -> Submitting -> { Idle (with errors) | NavigatedAway }`. The
//! password is wiped whenever a submission finishes, whatever the outcome.

use crate::api::{Credentials, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    NavigatedAway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { redirect: String },
    /// Field-keyed messages from the auth collaborator.
    Rejected(FieldErrors),
    /// The submission did not succeed and no field is to blame.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub credentials: Credentials,
    pub phase: LoginPhase,
    pub errors: FieldErrors,
    pub form_error: Option<String>,
    pub show_password: bool,
}

impl LoginFormState {
    pub fn processing(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn update_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.credentials.email = value,
            LoginField::Password => self.credentials.password = value,
        }
    }

    pub fn toggle_remember(&mut self) {
        self.credentials.remember = !self.credentials.remember;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.processing() {
            return None;
        }
        self.phase = LoginPhase::Submitting;
        self.errors = FieldErrors::default();
        self.form_error = None;
        Some(self.credentials.clone())
    }

    /// Returns the redirect target when the user was authenticated.
    pub fn finish(&mut self, outcome: LoginOutcome) -> Option<String> {
        self.credentials.password.clear();
        match outcome {
            LoginOutcome::Authenticated { redirect } => {
                self.phase = LoginPhase::NavigatedAway;
                Some(redirect)
            }
            LoginOutcome::Rejected(errors) => {
                self.phase = LoginPhase::Idle;
                self.errors = errors;
                None
            }
            LoginOutcome::Failed(message) => {
                self.phase = LoginPhase::Idle;
                self.form_error = Some(message);
                None
            }
        }
    }

    pub fn error_for(&self, field: LoginField) -> Option<&str> {
        self.errors.get(field.name())
    }

    pub fn view(&self) -> LoginFormView {
        let processing = self.processing();
        LoginFormView {
            email: self.credentials.email.clone(),
            password: self.credentials.password.clone(),
            remember: self.credentials.remember,
            password_input_type: if self.show_password { "text" } else { "password" },
            password_toggle_label: if self.show_password {
                "Sembunyikan kata sandi"
            } else {
                "Tampilkan kata sandi"
            },
            show_password: self.show_password,
            processing,
            submit_disabled: processing || self.phase == LoginPhase::NavigatedAway,
            submit_label: if processing {
                "Memproses..."
            } else {
                "Masuk ke Akun"
            },
            email_error: self.error_for(LoginField::Email).map(str::to_string),
            password_error: self.error_for(LoginField::Password).map(str::to_string),
            form_error: self.form_error.clone(),
        }
    }
}

/// What the form renders; derived purely from [`LoginFormState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFormView {
    pub email: String,
    pub password: String,
    pub remember: bool,
    pub password_input_type: &'static str,
    pub password_toggle_label: &'static str,
    pub show_password: bool,
    pub processing: bool,
    pub submit_disabled: bool,
    pub submit_label: &'static str,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub form_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::field_errors;

    fn filled() -> LoginFormState {
        let mut state = LoginFormState::default();
        state.update_field(LoginField::Email, "guru@sekolah.sch.id".into());
        state.update_field(LoginField::Password, "rahasia".into());
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = LoginFormState::default();
        assert_eq!(state.phase, LoginPhase::Idle);
        assert!(!state.processing());
        assert!(state.credentials.email.is_empty());
        assert!(!state.credentials.remember);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn update_field_sets_only_the_named_field() {
        let state = filled();
        assert_eq!(state.credentials.email, "guru@sekolah.sch.id");
        assert_eq!(state.credentials.password, "rahasia");
    }

    #[test]
    fn toggle_remember_flips() {
        let mut state = LoginFormState::default();
        state.toggle_remember();
        assert!(state.credentials.remember);
        state.toggle_remember();
        assert!(!state.credentials.remember);
    }

    #[test]
    fn password_visibility_only_changes_display_mode() {
        let mut state = filled();
        assert_eq!(state.view().password_input_type, "password");
        state.toggle_password_visibility();
        assert_eq!(state.view().password_input_type, "text");
        assert_eq!(state.credentials.password, "rahasia");
        state.toggle_password_visibility();
        assert_eq!(state.view().password_input_type, "password");
        assert_eq!(state.credentials.password, "rahasia");
    }

    #[test]
    fn begin_submit_is_guarded_while_processing() {
        let mut state = filled();
        state.toggle_remember();
        let first = state.begin_submit().expect("first submission");
        assert_eq!(first.email, "guru@sekolah.sch.id");
        assert_eq!(first.password, "rahasia");
        assert!(first.remember);
        assert!(state.processing());

        assert!(state.begin_submit().is_none());
        assert!(state.view().submit_disabled);
        assert_eq!(state.view().submit_label, "Memproses...");
    }

    #[test]
    fn password_is_cleared_after_every_outcome() {
        let outcomes = [
            LoginOutcome::Authenticated {
                redirect: "/dashboard".into(),
            },
            LoginOutcome::Rejected(field_errors(&[("email", "invalid")])),
            LoginOutcome::Failed("Server Error".into()),
        ];
        for outcome in outcomes {
            let mut state = filled();
            state.begin_submit();
            state.finish(outcome);
            assert!(state.credentials.password.is_empty());
            assert_eq!(state.credentials.email, "guru@sekolah.sch.id");
            assert!(!state.processing());
        }
    }

    #[test]
    fn rejection_exposes_message_for_email_only() {
        let mut state = filled();
        state.begin_submit();
        let redirect = state.finish(LoginOutcome::Rejected(field_errors(&[(
            "email", "invalid",
        )])));
        assert!(redirect.is_none());
        assert_eq!(state.phase, LoginPhase::Idle);

        let view = state.view();
        assert_eq!(view.email_error.as_deref(), Some("invalid"));
        assert!(view.password_error.is_none());
        assert!(view.form_error.is_none());
        assert!(!view.submit_disabled);
    }

    #[test]
    fn resubmission_clears_previous_errors() {
        let mut state = filled();
        state.begin_submit();
        state.finish(LoginOutcome::Rejected(field_errors(&[("email", "invalid")])));
        state.update_field(LoginField::Password, "lagi".into());

        let retry = state.begin_submit().expect("resubmission allowed");
        assert_eq!(retry.password, "lagi");
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, LoginPhase::Submitting);
    }

    #[test]
    fn success_navigates_away_and_keeps_submit_disabled() {
        let mut state = filled();
        state.begin_submit();
        let redirect = state.finish(LoginOutcome::Authenticated {
            redirect: "/dashboard".into(),
        });
        assert_eq!(redirect.as_deref(), Some("/dashboard"));
        assert_eq!(state.phase, LoginPhase::NavigatedAway);
        assert!(state.view().submit_disabled);
    }

    #[test]
    fn failure_without_fields_sets_form_message() {
        let mut state = filled();
        state.begin_submit();
        state.finish(LoginOutcome::Failed("Sesi berakhir".into()));
        let view = state.view();
        assert_eq!(view.form_error.as_deref(), Some("Sesi berakhir"));
        assert!(view.email_error.is_none());
    }
}
