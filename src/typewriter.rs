use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_speed: u32,
    pub delete_speed: u32,
    pub delay_between: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed: 90,
            delete_speed: 45,
            delay_between: 1400,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Typing -> Pausing -> Deleting -> next word, forever.
#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterCycle {
    words: Vec<String>,
    timing: TypewriterTiming,
    word: usize,
    shown: usize,
    phase: Phase,
}

impl TypewriterCycle {
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            words,
            timing,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Visible prefix of the current word, cut on char boundaries.
    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Milliseconds until the next `advance`; `None` when there is nothing to type.
    pub fn next_delay(&self) -> Option<u32> {
        if self.words.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.timing.type_speed,
            Phase::Pausing => self.timing.delay_between,
            Phase::Deleting => self.timing.delete_speed,
        })
    }

    pub fn advance(&mut self) {
        let Some(word) = self.words.get(self.word) else {
            return;
        };
        let len = word.chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                if len == 0 {
                    self.next_word();
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.next_word();
                }
            }
        }
    }

    fn next_word(&mut self) {
        self.word = (self.word + 1) % self.words.len();
        self.shown = 0;
        self.phase = Phase::Typing;
    }
}

#[component]
pub fn Typewriter(
    words: Vec<String>,
    #[props(default = 90)] type_speed: u32,
    #[props(default = 45)] delete_speed: u32,
    #[props(default = 1400)] delay_between: u32,
) -> Element {
    let timing = TypewriterTiming {
        type_speed,
        delete_speed,
        delay_between,
    };
    let cycle = use_signal(|| TypewriterCycle::new(words, timing));

    // Scoped to this component: the task is dropped on unmount, taking its timer with it.
    #[cfg(target_arch = "wasm32")]
    use_future(move || {
        let mut cycle = cycle;
        async move {
            tracing::debug!("typewriter: start cycle");
            loop {
                let Some(delay) = cycle.peek().next_delay() else {
                    break;
                };
                gloo_timers::future::TimeoutFuture::new(delay).await;
                cycle.write().advance();
            }
        }
    });

    if cycle.read().next_delay().is_none() {
        return rsx! {};
    }

    rsx! {
        span { class: "typewriter", "{cycle.read().text()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fast() -> TypewriterTiming {
        TypewriterTiming {
            type_speed: 1,
            delete_speed: 1,
            delay_between: 0,
        }
    }

    fn frames(cycle: &mut TypewriterCycle, ticks: usize) -> Vec<String> {
        let mut seen = vec![cycle.text().to_string()];
        for _ in 0..ticks {
            cycle.advance();
            seen.push(cycle.text().to_string());
        }
        seen
    }

    #[test]
    fn single_word_types_pauses_deletes_and_repeats() {
        let mut cycle = TypewriterCycle::new(vec!["AB".to_string()], fast());
        let seen = frames(&mut cycle, 7);
        assert_eq!(seen, vec!["", "A", "AB", "AB", "A", "", "A", "AB"]);
    }

    #[test]
    fn pause_uses_delay_between() {
        let timing = TypewriterTiming {
            type_speed: 85,
            delete_speed: 45,
            delay_between: 1400,
        };
        let mut cycle = TypewriterCycle::new(vec!["AB".to_string()], timing);
        assert_eq!(cycle.next_delay(), Some(85));
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.phase(), Phase::Pausing);
        assert_eq!(cycle.next_delay(), Some(1400));
        cycle.advance();
        assert_eq!(cycle.phase(), Phase::Deleting);
        assert_eq!(cycle.next_delay(), Some(45));
    }

    #[test]
    fn wraps_to_first_word() {
        let words = vec!["A".to_string(), "B".to_string()];
        let mut cycle = TypewriterCycle::new(words, fast());
        let seen = frames(&mut cycle, 6);
        assert_eq!(seen, vec!["", "A", "A", "", "B", "B", ""]);
        assert_eq!(cycle.word_index(), 0);
    }

    #[test]
    fn empty_list_schedules_nothing() {
        let mut cycle = TypewriterCycle::new(Vec::new(), fast());
        assert_eq!(cycle.next_delay(), None);
        cycle.advance();
        assert_eq!(cycle.text(), "");
    }

    #[test]
    fn multibyte_words_split_on_char_boundaries() {
        let mut cycle = TypewriterCycle::new(vec!["héllo".to_string()], fast());
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.text(), "hé");
    }
}
