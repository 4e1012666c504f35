//! Login Page
//!
//! Email/password form. A failed attempt shows a "Login failed" banner
//! which clears on the next input change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(false);
    let (pending, set_pending) = signal(false);

    let submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if pending.get() {
                return;
            }
            let email_value = email.get();
            let password_value = password.get();
            if email_value.is_empty() || password_value.is_empty() {
                return;
            }
            set_pending.set(true);
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::login(&email_value, &password_value).await {
                    Ok(()) => {
                        // Re-check auth; the shell takes over from there
                        ctx.queries.auth.invalidate();
                    }
                    Err(_) => {
                        set_error.set(true);
                    }
                }
                set_pending.set(false);
            });
        }
    };

    view! {
        <div class="login-card">
            {move || error.get().then(|| view! {
                <div class="alert alert-error">"Login failed"</div>
            })}
            <div class="login-brand">"Shelfmark"</div>
            <form class="login-form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                            set_error.set(false);
                        }
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                            set_error.set(false);
                        }
                    />
                </label>
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
