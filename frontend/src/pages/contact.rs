//! Contact page: local-only form validation (`common::validate`) with
//! per-field messages shown beside the offending input and cleared as the
//! user edits that field. Submission never leaves the browser; a success
//! banner is shown and auto-dismissed after five seconds.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::events::{InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::validate::{ContactErrors, ContactForm};

const SUCCESS_BANNER_MS: u32 = 5_000;

pub enum Msg {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    Submit,
    DismissSuccess,
}

pub struct ContactPage {
    form: ContactForm,
    errors: ContactErrors,
    submitted: bool,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: ContactErrors::default(),
            submitted: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(value) => {
                self.form.name = value;
                self.errors.name = None;
                true
            }
            Msg::EmailChanged(value) => {
                self.form.email = value;
                self.errors.email = None;
                true
            }
            Msg::SubjectChanged(value) => {
                self.form.subject = value;
                self.errors.subject = None;
                true
            }
            Msg::MessageChanged(value) => {
                self.form.message = value;
                self.errors.message = None;
                true
            }
            Msg::Submit => {
                let errors = self.form.validate();
                if errors.is_empty() {
                    self.form = ContactForm::default();
                    self.errors = ContactErrors::default();
                    self.submitted = true;

                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                        link.send_message(Msg::DismissSuccess);
                    });
                } else {
                    self.errors = errors;
                }
                true
            }
            Msg::DismissSuccess => {
                self.submitted = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="page">
                <div class="container">
                    <div class="page-header">
                        <h1>{ "Get In Touch" }</h1>
                        <p class="page-description">
                            { "Have questions about courses or need help with DevOps? I'd love to hear from you!" }
                        </p>
                    </div>

                    <div class="contact-wrapper">
                        <div class="contact-info">
                            <div class="info-card">
                                <h3>{ "Email" }</h3>
                                <p>{ "contact@devopsacademy.com" }</p>
                            </div>
                            <div class="info-card">
                                <h3>{ "Location" }</h3>
                                <p>{ "Available for remote consulting worldwide" }</p>
                            </div>
                            <div class="info-card">
                                <h3>{ "Follow Me" }</h3>
                                <p>{ "Stay updated with the latest DevOps tutorials and tips" }</p>
                                <a
                                    href="https://youtube.com/@devops-academy"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-btn"
                                >
                                    { "YouTube" }
                                </a>
                            </div>
                        </div>

                        <form class="contact-form" {onsubmit}>
                            {
                                if self.submitted {
                                    html! {
                                        <div class="success-message">
                                            { "Thank you! Your message has been sent successfully." }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            { self.text_field(link, "Name", "name", "Your name", &self.form.name, &self.errors.name, Msg::NameChanged) }
                            { self.text_field(link, "Email", "email", "your.email@example.com", &self.form.email, &self.errors.email, Msg::EmailChanged) }
                            { self.text_field(link, "Subject", "subject", "What is this about?", &self.form.subject, &self.errors.subject, Msg::SubjectChanged) }
                            { self.message_field(link) }

                            <button type="submit" class="btn btn-primary submit-btn">
                                { "Send Message" }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        }
    }
}

impl ContactPage {
    #[allow(clippy::too_many_arguments)]
    fn text_field(
        &self,
        link: &Scope<Self>,
        label: &'static str,
        id: &'static str,
        placeholder: &'static str,
        value: &str,
        error: &Option<String>,
        to_msg: fn(String) -> Msg,
    ) -> Html {
        let oninput = link.callback(move |e: InputEvent| {
            to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let class = if error.is_some() {
            "input error"
        } else {
            "input"
        };

        html! {
            <div class="form-group">
                <label for={id}>{ format!("{} *", label) }</label>
                <input
                    type="text"
                    id={id}
                    name={id}
                    value={value.to_string()}
                    {oninput}
                    class={class}
                    placeholder={placeholder}
                />
                { error_message(error) }
            </div>
        }
    }

    fn message_field(&self, link: &Scope<Self>) -> Html {
        let oninput = link.callback(|e: InputEvent| {
            Msg::MessageChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let class = if self.errors.message.is_some() {
            "input error"
        } else {
            "input"
        };

        html! {
            <div class="form-group">
                <label for="message">{ "Message *" }</label>
                <textarea
                    id="message"
                    name="message"
                    value={self.form.message.clone()}
                    {oninput}
                    class={class}
                    placeholder="Your message..."
                    rows="6"
                />
                { error_message(&self.errors.message) }
            </div>
        }
    }
}

fn error_message(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <span class="error-message">{ message }</span> },
        None => html! {},
    }
}
