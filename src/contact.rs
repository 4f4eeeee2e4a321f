use dioxus::prelude::*;
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::content::profile::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::relay::{EmailJsRelay, EmailRelay};
use crate::toast::{use_toaster, Notice};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields!";
pub const SENT_MESSAGE: &str = "Message Sent! Thank you for reaching out!";
pub const SEND_FAILED_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// `name`, `email` and `message` must be non-blank; `subject` is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.trim().is_empty());
        if missing {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("required fields are missing")]
    MissingFields,
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submitting: bool,
}

impl ContactState {
    /// Applies an input change keyed by the input's `name` attribute.
    pub fn update(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.form.name,
            "email" => &mut self.form.email,
            "subject" => &mut self.form.subject,
            "message" => &mut self.form.message,
            other => {
                tracing::warn!("contact: ignoring unknown field {other}");
                return;
            }
        };
        *slot = value;
    }

    /// Idle -> Submitting. Returns the snapshot to hand to the relay.
    pub fn begin_submit(&mut self) -> Result<ContactForm, ContactError> {
        if self.submitting {
            return Err(ContactError::Busy);
        }
        self.form.validate()?;
        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Submitting -> Idle. Clears the form only when the relay accepted it.
    pub fn finish_submit<E>(&mut self, outcome: &Result<(), E>) -> Notice {
        let notice = match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                Notice::success(SENT_MESSAGE)
            }
            Err(_) => Notice::error(SEND_FAILED_MESSAGE),
        };
        self.submitting = false;
        notice
    }
}

/// Somewhere a `ContactState` lives: a plain value in tests, a signal in the page.
pub trait ContactStore {
    fn update_state<T>(&mut self, f: impl FnOnce(&mut ContactState) -> T) -> T;
}

impl ContactStore for ContactState {
    fn update_state<T>(&mut self, f: impl FnOnce(&mut ContactState) -> T) -> T {
        f(self)
    }
}

impl ContactStore for Signal<ContactState> {
    fn update_state<T>(&mut self, f: impl FnOnce(&mut ContactState) -> T) -> T {
        f(&mut *self.write())
    }
}

/// Runs one submission. `None` means the click was swallowed because a send is in flight.
pub async fn submit<R, S>(relay: &R, store: &mut S) -> Option<Notice>
where
    R: EmailRelay + ?Sized,
    S: ContactStore,
{
    let snapshot = match store.update_state(ContactState::begin_submit) {
        Ok(snapshot) => snapshot,
        Err(ContactError::MissingFields) => return Some(Notice::error(MISSING_FIELDS_MESSAGE)),
        Err(ContactError::Busy) => return None,
    };
    tracing::debug!("contact: sending message");
    let outcome = relay.send(&snapshot).await;
    if let Err(err) = &outcome {
        tracing::error!("contact: {err}");
    }
    Some(store.update_state(|state| state.finish_submit(&outcome)))
}

#[component]
pub fn ContactPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let relay = EmailJsRelay::new(config.email.clone());
    let mut state = use_signal(ContactState::default);
    let toaster = use_toaster();

    let submitting = state.read().submitting;
    let form = state.read().form.clone();

    rsx! {
        document::Title { "Contact | Sadman Sakib" }
        document::Meta { name: "description", content: "Get in touch about projects and collaboration." }
        div { class: "page",
            div { class: "page-inner",
                header { class: "page-header",
                    div { class: "page-header-icon", aria_hidden: "true", "📧" }
                    h1 { "Get In Touch" }
                    p { class: "page-lead",
                        "Have a project in mind or want to collaborate? I'd love to hear from you."
                    }
                }
                div { class: "contact-grid",
                    section { class: "contact-info", aria_label: "Contact information",
                        h2 { "Let's Connect" }
                        p { class: "muted", "I'm always interested in hearing about new opportunities." }
                        div { class: "stack",
                            for channel in CONTACT_CHANNELS.iter() {
                                div { class: "contact-channel",
                                    span { class: "contact-channel-icon", aria_hidden: "true", "{channel.icon}" }
                                    div {
                                        h3 { "{channel.title}" }
                                        a { href: "{channel.href}", class: "muted-link", "{channel.value}" }
                                    }
                                }
                            }
                        }
                        div {
                            h3 { "Follow Me" }
                            div { class: "social-row",
                                for link in SOCIAL_LINKS.iter() {
                                    a {
                                        href: "{link.href}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "social-link",
                                        aria_label: "{link.label}",
                                        "{link.glyph}"
                                    }
                                }
                            }
                        }
                        div { class: "availability",
                            span { class: "availability-dot" }
                            div {
                                h3 { "Available for Work" }
                                p { class: "muted", "Currently accepting new projects" }
                            }
                        }
                    }
                    form {
                        class: "card contact-form",
                        onsubmit: move |event| {
                            event.prevent_default();
                            let relay = relay.clone();
                            let mut toaster = toaster;
                            let mut state = state;
                            spawn(async move {
                                if let Some(notice) = submit(&relay, &mut state).await {
                                    toaster.push(notice);
                                }
                            });
                        },
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "name", "Full Name" }
                                input {
                                    id: "name",
                                    name: "name",
                                    r#type: "text",
                                    value: "{form.name}",
                                    placeholder: "Your full name",
                                    oninput: move |event| state.write().update("name", event.value()),
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "email", "Email Address" }
                                input {
                                    id: "email",
                                    name: "email",
                                    r#type: "email",
                                    value: "{form.email}",
                                    placeholder: "your.email@example.com",
                                    oninput: move |event| state.write().update("email", event.value()),
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "subject", "Subject" }
                            input {
                                id: "subject",
                                name: "subject",
                                r#type: "text",
                                value: "{form.subject}",
                                placeholder: "What is this about?",
                                oninput: move |event| state.write().update("subject", event.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "message", "Message" }
                            textarea {
                                id: "message",
                                name: "message",
                                rows: "6",
                                value: "{form.message}",
                                placeholder: "Tell me about your project...",
                                oninput: move |event| state.write().update("message", event.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button button-primary button-block",
                            disabled: submitting,
                            if submitting {
                                span { class: "spinner", aria_hidden: "true" }
                                span { "Sending..." }
                            } else {
                                span { aria_hidden: "true", "➤" }
                                span { "Send Message" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use crate::toast::NoticeLevel;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    struct FakeRelay {
        outcome: Result<(), RelayError>,
        calls: Cell<usize>,
        last: RefCell<Option<ContactForm>>,
    }

    impl FakeRelay {
        fn new(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for FakeRelay {
        async fn send(&self, message: &ContactForm) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(message.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.update("name", "Ada".to_string());
        state.update("email", "ada@example.com".to_string());
        state.update("subject", "Hello".to_string());
        state.update("message", "Let's build something".to_string());
        state
    }

    #[tokio::test]
    async fn missing_name_never_reaches_relay() {
        let relay = FakeRelay::new(Ok(()));
        let mut state = ContactState::default();
        state.update("name", String::new());
        state.update("email", "x@y.com".to_string());
        state.update("message", "hi".to_string());

        let notice = submit(&relay, &mut state).await;

        assert_eq!(notice, Some(Notice::error(MISSING_FIELDS_MESSAGE)));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(state.form.email, "x@y.com");
        assert!(!state.submitting);
    }

    #[tokio::test]
    async fn whitespace_only_fields_count_as_missing() {
        let relay = FakeRelay::new(Ok(()));
        let mut state = filled();
        state.update("message", "   \n".to_string());
        let notice = submit(&relay, &mut state).await;
        assert_eq!(notice.map(|notice| notice.level), Some(NoticeLevel::Error));
        assert_eq!(relay.calls.get(), 0);
    }

    #[tokio::test]
    async fn success_clears_every_field() {
        let relay = FakeRelay::new(Ok(()));
        let mut state = filled();

        let notice = submit(&relay, &mut state).await;

        assert_eq!(notice, Some(Notice::success(SENT_MESSAGE)));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.last.borrow().as_ref().map(|form| form.subject.as_str()), Some("Hello"));
        assert_eq!(state, ContactState::default());
    }

    #[tokio::test]
    async fn failure_keeps_input_for_retry() {
        let relay = FakeRelay::new(Err(RelayError::Transport("offline".to_string())));
        let mut state = filled();
        let before = state.form.clone();

        let notice = submit(&relay, &mut state).await;

        assert_eq!(notice, Some(Notice::error(SEND_FAILED_MESSAGE)));
        assert_eq!(state.form, before);
        assert!(!state.submitting);
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_ignored() {
        let relay = FakeRelay::new(Ok(()));
        let mut state = filled();
        state.submitting = true;

        assert_eq!(submit(&relay, &mut state).await, None);
        assert_eq!(relay.calls.get(), 0);
        assert!(state.submitting);
    }

    #[test]
    fn begin_submit_flips_to_submitting() {
        let mut state = filled();
        let snapshot = state.begin_submit().unwrap();
        assert!(state.submitting);
        assert_eq!(snapshot, state.form);
        assert_eq!(state.begin_submit(), Err(ContactError::Busy));
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut state = filled();
        let before = state.clone();
        state.update("website", "spam".to_string());
        assert_eq!(state, before);
    }
}
