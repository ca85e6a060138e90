//! Transient success/error banner shown under the appointment form.
//!
//! Each `show` bumps a generation counter. The hide timer scheduled for a
//! message carries its generation and only clears the banner if nothing
//! newer was shown in the meantime, which makes the timer a single slot.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// How long a banner stays up.
pub const BANNER_HIDE_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    message: Option<(String, BannerKind)>,
    generation: u64,
}

impl BannerState {
    /// Replace whatever is showing. Returns the generation to hand to the hide timer.
    pub fn show(&mut self, text: impl Into<String>, kind: BannerKind) -> u64 {
        self.generation += 1;
        self.message = Some((text.into(), kind));
        self.generation
    }

    /// Hide the banner if `generation` is still the latest show. Returns whether it hid.
    pub fn hide_if_current(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |(text, _)| text.as_str())
    }

    #[must_use]
    pub fn kind(&self) -> Option<BannerKind> {
        self.message.as_ref().map(|(_, kind)| *kind)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Class list for the banner element, e.g. `form-message success`.
    #[must_use]
    pub fn css_class(&self) -> String {
        match self.kind() {
            Some(kind) => format!("form-message {}", kind.as_str()),
            None => "form-message".to_owned(),
        }
    }
}
