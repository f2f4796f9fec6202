use crate::pages::login::{
    components::messages::{FormError, InputError},
    utils::LoginField,
    view_model::LoginViewModel,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "block w-full rounded-lg border border-gray-300 bg-white px-3 py-2.5 text-sm text-gray-900 placeholder-gray-400 focus:border-blue-500 focus:outline-none focus:ring-2 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 dark:placeholder-gray-500";

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let view_state = create_memo(move |_| vm.form.with(|f| f.view()));

    let email = Signal::derive(move || view_state.with(|v| v.email.clone()));
    let password = Signal::derive(move || view_state.with(|v| v.password.clone()));
    let email_error = Signal::derive(move || view_state.with(|v| v.email_error.clone()));
    let password_error = Signal::derive(move || view_state.with(|v| v.password_error.clone()));
    let form_error = Signal::derive(move || view_state.with(|v| v.form_error.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            <FormError message=form_error />

            <div>
                <label for="email" class="mb-1 block text-sm font-medium text-gray-700 dark:text-gray-300">
                    "Alamat Email"
                </label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required
                    autofocus
                    autocomplete="username"
                    placeholder="nama@sekolah.sch.id"
                    class=INPUT_CLASS
                    prop:value=email
                    on:input=move |ev| vm.update_field(LoginField::Email, event_target_value(&ev))
                />
                <InputError message=email_error />
            </div>

            <div>
                <label for="password" class="mb-1 block text-sm font-medium text-gray-700 dark:text-gray-300">
                    "Kata Sandi"
                </label>
                <div class="relative">
                    <input
                        id="password"
                        name="password"
                        type=move || view_state.with(|v| v.password_input_type)
                        required
                        autocomplete="current-password"
                        placeholder="••••••••"
                        class=format!("{INPUT_CLASS} pr-20")
                        prop:value=password
                        on:input=move |ev| {
                            vm.update_field(LoginField::Password, event_target_value(&ev))
                        }
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 px-3 text-xs font-medium text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                        aria-label=move || view_state.with(|v| v.password_toggle_label)
                        aria-pressed=move || view_state.with(|v| v.show_password.to_string())
                        on:click=move |_| vm.toggle_password_visibility()
                    >
                        {move || if view_state.with(|v| v.show_password) { "Sembunyikan" } else { "Tampilkan" }}
                    </button>
                </div>
                <InputError message=password_error />
            </div>

            <label for="remember" class="flex items-center gap-2 text-sm text-gray-600 dark:text-gray-400">
                <input
                    id="remember"
                    name="remember"
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500 dark:border-gray-600"
                    prop:checked=move || view_state.with(|v| v.remember)
                    on:change=move |_| vm.toggle_remember()
                />
                "Ingat saya selama 30 hari"
            </label>

            <button
                type="submit"
                disabled=move || view_state.with(|v| v.submit_disabled)
                class="flex w-full justify-center rounded-lg bg-blue-600 px-4 py-2.5 text-sm font-semibold text-white hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-60 dark:focus:ring-offset-gray-900"
            >
                {move || view_state.with(|v| v.submit_label)}
            </button>
        </form>
    }
}
