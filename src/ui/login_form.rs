//! Login form component
//!
//! Renders the five-field login form and wires it to the headless
//! [`FormController`]. Validation runs on submit only; each rejected field
//! shows the first rule it failed directly below its input.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::{Field, FormController, FormValues};
use crate::ui::common::FormField;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback invoked with the accepted snapshot on successful submission
    #[prop(optional, into)]
    on_success: Option<Callback<FormValues>>,
) -> impl IntoView {
    // The controller owns the values and errors; the view below is a pure
    // mapping over it. The configured callback reports the accepted snapshot
    // to the console and forwards it to the embedder, if one is listening.
    let form = RwSignal::new(FormController::new(move |snapshot: FormValues| {
        match serde_json::to_string(&snapshot) {
            Ok(json) => log!("form submitted: {json}"),
            Err(err) => log!("form submitted, but snapshot failed to serialize: {err}"),
        }
        if let Some(callback) = on_success {
            callback.run(snapshot);
        }
    }));

    let value_for = move |field: Field| {
        Signal::derive(move || form.with(|f| f.values().field(field).to_string()))
    };
    let error_for = move |field: Field| {
        Signal::derive(move || form.with(|f| f.errors().get(field).map(str::to_string)))
    };
    let input_for = move |field: Field| {
        Callback::new(move |value: String| {
            form.update(|f| f.set_field_value(field, value));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.submit();
        });
    };

    view! {
        <div class="login-form-container">
            <h2>"Login Form"</h2>
            <form on:submit=on_submit class="login-form" novalidate=true>
                <FormField
                    id="username"
                    label="Username"
                    autocomplete="username"
                    value=value_for(Field::Username)
                    on_input=input_for(Field::Username)
                    error=error_for(Field::Username)
                />
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=value_for(Field::Email)
                    on_input=input_for(Field::Email)
                    error=error_for(Field::Email)
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=value_for(Field::Password)
                    on_input=input_for(Field::Password)
                    error=error_for(Field::Password)
                />
                <FormField
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=value_for(Field::ConfirmPassword)
                    on_input=input_for(Field::ConfirmPassword)
                    error=error_for(Field::ConfirmPassword)
                />
                <FormField
                    id="phoneNumber"
                    label="Phone Number (Optional)"
                    autocomplete="tel"
                    value=value_for(Field::PhoneNumber)
                    on_input=input_for(Field::PhoneNumber)
                    error=error_for(Field::PhoneNumber)
                />
                <button type="submit" class="submit-button">"Submit"</button>
            </form>
        </div>
    }
}
