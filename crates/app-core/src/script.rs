//! Speakers and the built-in dialogue script.

use crate::constants::{DEATH_TONE_HZ, ELLIPSIS, SAKANA_TONE_HZ};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speaker {
    Sakana,
    Death,
}

impl Speaker {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sakana => "サカナ",
            Self::Death => "デス",
        }
    }

    pub fn portrait(&self) -> &'static str {
        match self {
            Self::Sakana => "images/sakana.jpg",
            Self::Death => "images/desu.jpg",
        }
    }

    /// Style class added next to `name-display` on the name plate.
    pub fn style_class(&self) -> &'static str {
        match self {
            Self::Sakana => "sakana",
            Self::Death => "death",
        }
    }

    /// Pitch of the click tone played while this speaker's text is revealed.
    pub fn tone_hz(&self) -> f32 {
        match self {
            Self::Sakana => SAKANA_TONE_HZ,
            Self::Death => DEATH_TONE_HZ,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

impl ScriptLine {
    pub const fn new(speaker: Speaker, text: &'static str) -> Self {
        Self { speaker, text }
    }

    /// A line consisting of nothing but the ellipsis glyph gets a longer pause.
    pub fn is_ellipsis(&self) -> bool {
        self.text == ELLIPSIS
    }
}

pub const DEFAULT_SCRIPT: &[ScriptLine] = &[
    ScriptLine::new(Speaker::Sakana, "ここ少し行った先が現場"),
    ScriptLine::new(Speaker::Death, "うん"),
    ScriptLine::new(Speaker::Sakana, "今度はグロくないといいな"),
    ScriptLine::new(Speaker::Death, "うん"),
    ScriptLine::new(Speaker::Sakana, "…"),
    ScriptLine::new(Speaker::Death, "…"),
    ScriptLine::new(Speaker::Sakana, "…ところで、それ、下なにか履いてる？"),
    ScriptLine::new(Speaker::Death, "…いや"),
    ScriptLine::new(Speaker::Sakana, "そうか…"),
    ScriptLine::new(Speaker::Death, "なんで？"),
    ScriptLine::new(Speaker::Sakana, "いや… 風邪ひくなよ"),
    ScriptLine::new(Speaker::Death, "大丈夫　ありがと"),
    ScriptLine::new(Speaker::Sakana, "ん… あ、ここだ"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_shape() {
        assert_eq!(DEFAULT_SCRIPT.len(), 13);
        assert_eq!(DEFAULT_SCRIPT.iter().filter(|l| l.is_ellipsis()).count(), 2);
        assert_eq!(DEFAULT_SCRIPT[10].text, "いや… 風邪ひくなよ");
    }

    #[test]
    fn speakers_have_distinct_pitches() {
        assert_ne!(Speaker::Sakana.tone_hz(), Speaker::Death.tone_hz());
    }
}
