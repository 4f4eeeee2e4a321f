use dioxus::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered notices with monotonically increasing ids; ids are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Shared through context by the layout.
#[derive(Clone, Copy)]
pub struct Toaster(Signal<ToastQueue>);

impl Toaster {
    pub fn push(&mut self, notice: Notice) {
        self.0.write().push(notice);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }
}

pub fn use_toaster_provider() -> Toaster {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toaster(queue))
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let entries = toaster.0.read().entries().to_vec();
    rsx! {
        div { class: "toast-host", role: "status", aria_live: "polite",
            for toast in entries {
                ToastItem { key: "{toast.id}", id: toast.id, notice: toast.notice }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, notice: Notice) -> Element {
    let mut toaster = use_toaster();

    // Lives as long as this toast is rendered.
    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        let mut toaster = toaster;
        toaster.dismiss(id);
    });

    let class = match notice.level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Error => "toast toast-error",
    };
    let icon = match notice.level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✕",
    };
    rsx! {
        div { class: "{class}", onclick: move |_| toaster.dismiss(id),
            span { class: "toast-icon", "{icon}" }
            span { "{notice.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(queue: &ToastQueue) -> Vec<u64> {
        queue.entries().iter().map(|toast| toast.id).collect()
    }

    #[test]
    fn ids_count_up_in_push_order() {
        let mut queue = ToastQueue::default();
        assert_eq!(queue.push(Notice::success("one")), 0);
        assert_eq!(queue.push(Notice::error("two")), 1);
        assert_eq!(queue.push(Notice::success("three")), 2);
        assert_eq!(ids(&queue), vec![0, 1, 2]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::success("one"));
        let middle = queue.push(Notice::error("two"));
        queue.push(Notice::success("three"));

        queue.dismiss(middle);

        assert_eq!(ids(&queue), vec![0, 2]);
        assert_eq!(queue.entries()[1].notice, Notice::success("three"));
    }

    #[test]
    fn dismissed_ids_are_not_reused() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::success("one"));
        queue.dismiss(first);
        queue.dismiss(first);
        assert!(queue.entries().is_empty());
        assert_eq!(queue.push(Notice::error("two")), 1);
    }
}
