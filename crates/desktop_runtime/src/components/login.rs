use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use system_ui::{
    Button, ButtonVariant, FieldGroup, Heading, Icon, IconName, IconSize, Stack, Text, TextField,
    TextRole, TextTone,
};

use super::use_desktop_runtime;
use crate::{
    reducer::DesktopAction,
    session::{self, LOGIN_ERROR_CLEAR_MS},
};

#[component]
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let clear_timer = store_value(None::<TimeoutHandle>);

    let cancel_clear_timer = move || {
        if let Some(handle) = clear_timer.get_value() {
            handle.clear();
        }
        clear_timer.set_value(None);
    };
    on_cleanup(cancel_clear_timer);

    let submit = move || {
        let store = runtime.host.get_value().store();
        let result = session::verify_credentials(
            store.as_ref(),
            &username.get_untracked(),
            &password.get_untracked(),
        );

        cancel_clear_timer();
        match result {
            Ok(_) => {
                error.set(None);
                runtime.dispatch_action(DesktopAction::SessionStarted);
            }
            Err(err) => {
                error.set(Some(err.to_string()));
                match set_timeout_with_handle(
                    move || error.set(None),
                    Duration::from_millis(LOGIN_ERROR_CLEAR_MS),
                ) {
                    Ok(handle) => clear_timer.set_value(Some(handle)),
                    Err(err) => logging::warn!("login error timer failed: {err:?}"),
                }
            }
        }
    };

    let submit_on_enter = Callback::new(move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    });

    view! {
        <main class="login-screen" data-ui-kind="login-screen">
            <form
                class="login-card"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <Stack>
                    <span class="login-avatar" aria-hidden="true">
                        <Icon icon=IconName::Person size=IconSize::Lg />
                    </span>
                    <Heading>"Welcome Back"</Heading>
                    <Text tone=TextTone::Secondary>"Sign in to continue"</Text>

                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <div class="login-error" role="alert">
                            <Text tone=TextTone::Danger>{move || error.get().unwrap_or_default()}</Text>
                        </div>
                    </Show>

                    <FieldGroup title="Username">
                        <TextField
                            placeholder="Enter username"
                            aria_label="Username"
                            autocomplete="username"
                            value=username
                            on_input=Callback::new(move |ev| username.set(event_target_value(&ev)))
                            on_keydown=submit_on_enter
                        />
                    </FieldGroup>
                    <FieldGroup title="Password">
                        <TextField
                            placeholder="Enter password"
                            aria_label="Password"
                            autocomplete="current-password"
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                            on_keydown=submit_on_enter
                        />
                    </FieldGroup>

                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Key
                        on_click=Callback::new(move |_| submit())
                    >
                        "Sign In"
                    </Button>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "Default credentials: admin / admin"
                    </Text>
                </Stack>
            </form>
        </main>
    }
}
