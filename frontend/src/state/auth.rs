use crate::{
    api::{ApiClient, ApiError, SharedUser},
    state::page::use_page,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SharedUser>,
    pub loading: bool,
}

fn create_auth_context(seed: Option<SharedUser>) -> AuthContext {
    if let Some(user) = seed {
        return create_signal(AuthState {
            user: Some(user),
            loading: false,
        });
    }

    let (auth_state, set_auth_state) = create_signal(AuthState {
        user: None,
        loading: true,
    });
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let result = api_client.current_user().await;
        apply_session_lookup(set_auth_state, result);
    });
    (auth_state, set_auth_state)
}

/// A failed lookup is treated as signed out.
pub fn apply_session_lookup(
    set_auth_state: WriteSignal<AuthState>,
    result: Result<Option<SharedUser>, ApiError>,
) {
    let user = result.unwrap_or_else(|err| {
        log::debug!("session lookup failed: {err}");
        None
    });
    set_auth_state.set(AuthState {
        user,
        loading: false,
    });
}

/// Seeds from `props.auth.user`; asks the auth collaborator otherwise.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context(use_page().props.auth.user);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}
