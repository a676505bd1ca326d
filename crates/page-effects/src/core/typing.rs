//! Type/delete animation over a fixed phrase list.
//!
//! [`TypingAnimator`] is a pure state machine: each call to
//! [`TypingAnimator::tick`] renders one step and reports how long the
//! driver should wait before the next call.

/// Id of the element whose text is animated.
pub const TYPING_TEXT_ID: &str = "typing-text";

/// Default phrases, cycled in order.
pub const DEFAULT_PHRASES: [&str; 4] = ["Made Simple", "Made Easy", "Automated", "Efficient"];

/// Delays between animation steps, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    /// Between typed characters.
    pub type_ms: u32,
    /// Between deleted characters.
    pub delete_ms: u32,
    /// Hold once the full phrase is shown.
    pub hold_ms: u32,
    /// Pause on an empty field before the next phrase.
    pub next_phrase_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_phrase_ms: 500,
        }
    }
}

/// Direction of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// Appending characters.
    Typing,
    /// Removing characters.
    Deleting,
}

/// One rendered step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    /// Text to display.
    pub text: String,
    /// Wait before the next tick.
    pub delay_ms: u32,
}

/// Phrase cursor plus direction.
#[derive(Clone, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    timings: TypingTimings,
    phrase_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl TypingAnimator {
    /// Build an animator. Callers validate that `phrases` is non-empty and
    /// holds no empty phrase (see [`crate::core::config::EffectsConfig::validate`]).
    #[must_use]
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Self {
        Self {
            phrases,
            timings,
            phrase_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        }
    }

    /// Index of the phrase being animated.
    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Characters currently shown.
    #[must_use]
    pub const fn char_index(&self) -> usize {
        self.char_index
    }

    /// Current direction.
    #[must_use]
    pub const fn phase(&self) -> TypingPhase {
        self.phase
    }

    fn current(&self) -> &str {
        self.phrases
            .get(self.phrase_index)
            .map_or("", String::as_str)
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TypingFrame {
        let len = self.current().chars().count();
        let mut delay_ms = match self.phase {
            TypingPhase::Typing => {
                self.char_index = (self.char_index + 1).min(len);
                self.timings.type_ms
            }
            TypingPhase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                self.timings.delete_ms
            }
        };
        let text = prefix(self.current(), self.char_index).to_string();

        if self.phase == TypingPhase::Typing && self.char_index == len {
            self.phase = TypingPhase::Deleting;
            delay_ms = self.timings.hold_ms;
        } else if self.phase == TypingPhase::Deleting && self.char_index == 0 {
            self.phase = TypingPhase::Typing;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len().max(1);
            delay_ms = self.timings.next_phrase_ms;
        }

        TypingFrame { text, delay_ms }
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    text.char_indices()
        .nth(chars)
        .map_or(text, |(byte, _)| &text[..byte])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_animator() -> TypingAnimator {
        TypingAnimator::new(
            DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect(),
            TypingTimings::default(),
        )
    }

    #[test]
    fn first_phrase_types_one_char_per_tick() {
        let mut animator = default_animator();
        assert_eq!(
            animator.tick(),
            TypingFrame {
                text: "M".to_string(),
                delay_ms: 100
            }
        );
        assert_eq!(animator.tick().text, "Ma");
    }

    #[test]
    fn full_phrase_holds_then_deletes() {
        let mut animator = default_animator();
        let mut frame = animator.tick();
        while frame.text != "Made Simple" {
            frame = animator.tick();
        }
        assert_eq!(frame.delay_ms, 2000);
        assert_eq!(animator.phase(), TypingPhase::Deleting);

        let next = animator.tick();
        assert_eq!(next.text, "Made Simpl");
        assert_eq!(next.delay_ms, 50);
    }

    #[test]
    fn empty_field_pauses_and_advances_phrase() {
        let mut animator = default_animator();
        let frame = loop {
            let frame = animator.tick();
            if frame.text.is_empty() {
                break frame;
            }
        };
        assert_eq!(frame.delay_ms, 500);
        assert_eq!(animator.phase(), TypingPhase::Typing);
        assert_eq!(animator.phrase_index(), 1);
        assert_eq!(animator.tick().text, "M");
    }

    #[test]
    fn cycles_all_phrases_in_order_and_wraps() {
        let mut animator = default_animator();
        let mut completed = Vec::new();
        for _ in 0..400 {
            let phrase = animator.phrase_index();
            let frame = animator.tick();
            let len = DEFAULT_PHRASES[phrase].chars().count();
            assert!(animator.char_index() <= len);
            assert!(frame.text.chars().count() <= len);
            if frame.delay_ms == 2000 {
                completed.push(frame.text.clone());
            }
            if completed.len() == 5 {
                break;
            }
        }
        assert_eq!(
            completed,
            vec!["Made Simple", "Made Easy", "Automated", "Efficient", "Made Simple"]
        );
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut animator =
            TypingAnimator::new(vec!["Où ça".to_string()], TypingTimings::default());
        let texts: Vec<String> = (0..5).map(|_| animator.tick().text).collect();
        assert_eq!(texts, vec!["O", "Où", "Où ", "Où ç", "Où ça"]);
    }
}
