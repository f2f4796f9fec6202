use super::{
    repository::LoginRepository,
    utils::{LoginField, LoginFormState, LoginOutcome},
};
use crate::{
    api::{ApiClient, Credentials},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub login_action: Action<Credentials, LoginOutcome>,
}

impl LoginViewModel {
    pub fn update_field(&self, field: LoginField, value: String) {
        self.form.update(|f| f.update_field(field, value));
    }

    pub fn toggle_remember(&self) {
        self.form.update(LoginFormState::toggle_remember);
    }

    pub fn toggle_password_visibility(&self) {
        self.form.update(LoginFormState::toggle_password_visibility);
    }

    /// Dispatches at most one request per submission.
    pub fn submit(&self) {
        if let Some(credentials) = self.form.try_update(LoginFormState::begin_submit).flatten() {
            self.login_action.dispatch(credentials);
        }
    }

    pub fn apply_result(&self, outcome: LoginOutcome) {
        if let Some(redirect) = self.form.try_update(|f| f.finish(outcome)).flatten() {
            navigation::redirect_to(&redirect);
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(LoginFormState::default());
    let login_action = create_action(move |credentials: &Credentials| {
        let repo = repository.clone();
        let credentials = credentials.clone();
        async move { repo.login(credentials).await }
    });

    let vm = LoginViewModel { form, login_action };
    create_isomorphic_effect(move |_| {
        if let Some(outcome) = login_action.value().get() {
            vm.apply_result(outcome);
        }
    });
    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::field_errors, ssr::with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn login_view_model_starts_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            let view = vm.form.get().view();
            assert!(view.email.is_empty());
            assert!(!view.remember);
            assert_eq!(view.submit_label, "Masuk ke Akun");
            assert!(vm.login_action.value().get().is_none());
        });
    }

    #[test]
    fn field_updates_flow_into_the_form() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.update_field(LoginField::Email, "guru@sekolah.sch.id".into());
            vm.toggle_remember();
            vm.toggle_password_visibility();
            let view = vm.form.get().view();
            assert_eq!(view.email, "guru@sekolah.sch.id");
            assert!(view.remember);
            assert_eq!(view.password_input_type, "text");
        });
    }

    #[test]
    fn rejected_result_shows_field_errors_and_clears_password() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.update_field(LoginField::Password, "rahasia".into());
            vm.form.update(|f| {
                f.begin_submit();
            });
            vm.apply_result(LoginOutcome::Rejected(field_errors(&[(
                "email",
                "These credentials do not match our records.",
            )])));

            let view = vm.form.get().view();
            assert!(view.password.is_empty());
            assert!(!view.processing);
            assert_eq!(
                view.email_error.as_deref(),
                Some("These credentials do not match our records.")
            );
        });
    }

    #[tokio::test]
    async fn repeated_submit_sends_one_request_and_applies_the_rejection() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/login");
                then.status(422).json_body(json!({
                    "message": "These credentials do not match our records.",
                    "errors": { "email": ["These credentials do not match our records."] }
                }));
            })
            .await;
        let base_url = server.url("/api");

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let runtime = create_runtime();
                provide_context(ApiClient::new_with_base_url(base_url));
                let vm = use_login_view_model();
                vm.update_field(LoginField::Email, "guru@sekolah.sch.id".into());
                vm.update_field(LoginField::Password, "salah".into());

                vm.submit();
                vm.submit();
                assert!(vm.form.with_untracked(|f| f.processing()));

                tokio::time::timeout(Duration::from_secs(5), async {
                    while vm.login_action.version().get_untracked() == 0 {
                        tokio::task::yield_now().await;
                    }
                })
                .await
                .expect("login action settles");

                let view = vm.form.get_untracked().view();
                assert!(view.password.is_empty());
                assert!(!view.processing);
                assert_eq!(
                    view.email_error.as_deref(),
                    Some("These credentials do not match our records.")
                );
                assert_eq!(vm.login_action.version().get_untracked(), 1);
                runtime.dispose();
            })
            .await;

        mock.assert_hits_async(1).await;
    }
}
