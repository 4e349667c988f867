//! Contact Form Component
//!
//! Collects the enquiry fields and surfaces a static acknowledgment.
//! There is no backend; real submissions need an external form service
//! (Formspree, Netlify Forms, ...).

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";
/// How long the acknowledgment banner stays up, in ms
const BANNER_MS: u32 = 6_000;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Clear the fields; the values go nowhere until a form service
        // is wired up.
        if let Some(target) = ev.target() {
            if let Some(form) = target.dyn_ref::<web_sys::HtmlFormElement>() {
                form.reset();
            }
        }

        set_submitted.set(true);
        spawn_local(async move {
            TimeoutFuture::new(BANNER_MS).await;
            set_submitted.set(false);
        });
    };

    view! {
        <section class="contact" id="contact">
            <div class="container">
                <h2>"Get Your Free Quote"</h2>

                <form class="contact-form" id="contact-form" on:submit=on_submit>
                    <input type="text" name="name" placeholder="Your name" required />
                    <input type="email" name="email" placeholder="Email address" required />
                    <input type="tel" name="phone" placeholder="Phone (optional)" />
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Tell us about your project"
                        required
                    ></textarea>
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                </form>

                <Show when=move || submitted.get()>
                    <div class="form-acknowledgment">
                        <p>{THANK_YOU}</p>
                    </div>
                </Show>
            </div>
        </section>
    }
}
