// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typewriter rotation over the home section's phrase list.
//!
//! Each tick types or deletes one `char`, so Japanese and Korean phrases
//! advance a full glyph at a time.

/// Where the effect is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase shown; the value counts remaining hold ticks.
    Holding(u32),
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Ticks the complete phrase stays on screen before deletion starts.
    pub hold_ticks: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self { hold_ticks: 12 }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing<S: AsRef<str>>(phrases: &[S], timing: TypewriterTiming) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timing,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    /// Replace the phrase list (e.g. after a language switch) and start over.
    pub fn reset<S: AsRef<str>>(&mut self, phrases: &[S]) {
        *self = Self::with_timing(phrases, self.timing);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// The text on screen right now.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|phrase| phrase[..self.visible].iter().collect())
            .unwrap_or_default()
    }

    /// Advance one step and return the new on-screen text.
    pub fn tick(&mut self) -> String {
        let Some(len) = self.phrases.get(self.index).map(Vec::len) else {
            return String::new();
        };

        self.phase = match self.phase {
            Phase::Typing if self.visible < len => {
                self.visible += 1;
                if self.visible == len {
                    Phase::Holding(self.timing.hold_ticks)
                } else {
                    Phase::Typing
                }
            }
            Phase::Typing => Phase::Holding(self.timing.hold_ticks),
            Phase::Holding(0) => Phase::Deleting,
            Phase::Holding(remaining) => Phase::Holding(remaining - 1),
            Phase::Deleting if self.visible > 0 => {
                self.visible -= 1;
                Phase::Deleting
            }
            Phase::Deleting => {
                self.index = (self.index + 1) % self.phrases.len();
                Phase::Typing
            }
        };
        self.text()
    }
}
