//! Click-through dialogue player.
//!
//! [`DialogueSequencer`] owns the script, the playback cursor and the reveal
//! state. It never touches a display or a clock itself: every operation pushes
//! [`Cue`]s into a caller-provided buffer, including requests to schedule or
//! cancel timers. The host applies the cues and reports fired timers back via
//! [`DialogueSequencer::on_timer`].
//!
//! Scene phases run `Title -> FadingIn -> Playing -> FadingOut -> Title`, and
//! the return to `Title` immediately starts the next run.
//! Inside `Playing` each line goes `Idle -> Revealing -> PostRevealWait ->
//! Advanceable`, with a click during `Revealing` jumping straight to
//! `Advanceable`.
//!
//! Exactly one timer slot exists. Scheduling a new step cancels whatever was
//! pending, and a fired id that no longer matches the slot is dropped, so a
//! line can never be revealed twice.

use crate::constants::{
    CHAR_DELAY, ELLIPSIS_GATE_DELAY, FADE, GATE_DELAY, LINE_BREAK, LINE_BREAK_DELAY,
    SPEAKER_CHANGE_PAUSE, TITLE_HOLD, TONE_DURATION,
};
use crate::script::{ScriptLine, Speaker, DEFAULT_SCRIPT};
use std::time::Duration;

/// Fixed delays used by the sequencer.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogueTiming {
    /// Black screen after `start()` before the overlay begins to clear.
    pub title_hold: Duration,
    /// Length of an overlay fade in either direction.
    pub fade: Duration,
    pub char_delay: Duration,
    pub line_break_delay: Duration,
    /// Pause before presenting a line whose speaker differs from the last one.
    pub speaker_change_pause: Duration,
    pub gate_delay: Duration,
    pub ellipsis_gate_delay: Duration,
    pub tone_duration: Duration,
}

impl Default for DialogueTiming {
    fn default() -> Self {
        Self {
            title_hold: TITLE_HOLD,
            fade: FADE,
            char_delay: CHAR_DELAY,
            line_break_delay: LINE_BREAK_DELAY,
            speaker_change_pause: SPEAKER_CHANGE_PAUSE,
            gate_delay: GATE_DELAY,
            ellipsis_gate_delay: ELLIPSIS_GATE_DELAY,
            tone_duration: TONE_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePhase {
    Title,
    FadingIn,
    Playing,
    FadingOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Revealing,
    PostRevealWait,
    Advanceable,
}

/// Direction of the full-screen overlay transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    ToOpaque,
    ToClear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPiece {
    Text(String),
    Break,
}

/// Split line text on the break marker into runs the display can render.
pub fn layout_text(text: &str) -> Vec<TextPiece> {
    let mut pieces = Vec::new();
    for (i, run) in text.split(LINE_BREAK).enumerate() {
        if i > 0 {
            pieces.push(TextPiece::Break);
        }
        if !run.is_empty() {
            pieces.push(TextPiece::Text(run.to_string()));
        }
    }
    pieces
}

/// Presentation effect requested by the sequencer.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    Title(bool),
    Overlay(Fade),
    Speaker(Speaker),
    ClearSpeaker,
    ClearText,
    AppendChar(char),
    LineBreak,
    SetText(Vec<TextPiece>),
    Continue(bool),
    Tone { frequency_hz: f32, duration: Duration },
    Schedule { timer: TimerId, delay: Duration },
    Cancel(TimerId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    ClearOverlay,
    BeginPlaying,
    PresentLine(usize),
    RevealNext,
    OpenGate,
    ReturnToTitle,
}

pub struct DialogueSequencer {
    script: Vec<ScriptLine>,
    timing: DialogueTiming,
    phase: ScenePhase,
    cursor: usize,
    revealing: bool,
    can_advance: bool,
    revealed: usize,
    previous_speaker: Option<Speaker>,
    displayed: String,
    pending: Option<(TimerId, Step)>,
    next_timer: u64,
}

impl Default for DialogueSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT.to_vec(), DialogueTiming::default())
    }
}

impl DialogueSequencer {
    pub fn new(script: Vec<ScriptLine>, timing: DialogueTiming) -> Self {
        Self {
            script,
            timing,
            phase: ScenePhase::Title,
            cursor: 0,
            revealing: false,
            can_advance: false,
            revealed: 0,
            previous_speaker: None,
            displayed: String::new(),
            pending: None,
            next_timer: 0,
        }
    }

    pub fn script(&self) -> &[ScriptLine] {
        &self.script
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    pub fn can_advance(&self) -> bool {
        self.can_advance
    }

    /// Characters of the current line already on screen, break markers included.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn previous_speaker(&self) -> Option<Speaker> {
        self.previous_speaker
    }

    /// Text currently shown, with breaks as `'\n'`.
    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn current_line(&self) -> Option<&ScriptLine> {
        match self.phase {
            ScenePhase::Playing => self.script.get(self.cursor),
            _ => None,
        }
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.map(|(id, _)| id)
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        if self.revealing {
            RevealPhase::Revealing
        } else if self.can_advance {
            RevealPhase::Advanceable
        } else if matches!(self.pending, Some((_, Step::OpenGate))) {
            RevealPhase::PostRevealWait
        } else {
            RevealPhase::Idle
        }
    }

    /// Leave the title screen and fade into the first line.
    pub fn start(&mut self, out: &mut Vec<Cue>) {
        if self.phase != ScenePhase::Title {
            log::debug!("[dialogue] start ignored in {:?}", self.phase);
            return;
        }
        log::info!("[dialogue] start ({} lines)", self.script.len());
        self.phase = ScenePhase::FadingIn;
        out.push(Cue::Title(false));
        self.schedule(Step::ClearOverlay, self.timing.title_hold, out);
    }

    pub fn handle_click(&mut self, out: &mut Vec<Cue>) {
        match self.phase {
            ScenePhase::Title => self.start(out),
            ScenePhase::Playing if self.revealing => self.skip_reveal(out),
            ScenePhase::Playing if self.can_advance => self.advance(out),
            _ => log::debug!(
                "[dialogue] click absorbed ({:?}, {:?})",
                self.phase,
                self.reveal_phase()
            ),
        }
    }

    /// Present line `index`, or finish the run if it is past the end.
    pub fn show_line(&mut self, index: usize, out: &mut Vec<Cue>) {
        if index >= self.script.len() {
            self.cursor = self.script.len();
            self.end_sequence(out);
            return;
        }
        self.cursor = index;
        self.can_advance = false;
        out.push(Cue::Continue(false));

        let speaker = self.script[index].speaker;
        match self.previous_speaker {
            Some(prev) if prev != speaker => {
                self.schedule(
                    Step::PresentLine(index),
                    self.timing.speaker_change_pause,
                    out,
                );
            }
            _ => self.present_line(index, out),
        }
    }

    fn present_line(&mut self, index: usize, out: &mut Vec<Cue>) {
        let line = self.script[index];
        log::debug!("[dialogue] line {} ({:?})", index, line.speaker);
        out.push(Cue::Speaker(line.speaker));
        out.push(Cue::ClearText);
        self.displayed.clear();
        self.previous_speaker = Some(line.speaker);
        self.reveal_typewriter(out);
    }

    /// Begin revealing the current line one character at a time.
    pub fn reveal_typewriter(&mut self, out: &mut Vec<Cue>) {
        self.revealing = true;
        self.revealed = 0;
        self.reveal_next(out);
    }

    fn reveal_next(&mut self, out: &mut Vec<Cue>) {
        let Some(line) = self.script.get(self.cursor).copied() else {
            self.revealing = false;
            return;
        };
        match line.text.chars().nth(self.revealed) {
            Some(c) => {
                self.revealed += 1;
                self.displayed.push(c);
                let delay = if c == LINE_BREAK {
                    out.push(Cue::LineBreak);
                    self.timing.line_break_delay
                } else {
                    out.push(Cue::AppendChar(c));
                    out.push(Cue::Tone {
                        frequency_hz: line.speaker.tone_hz(),
                        duration: self.timing.tone_duration,
                    });
                    self.timing.char_delay
                };
                self.schedule(Step::RevealNext, delay, out);
            }
            None => {
                self.revealing = false;
                let delay = if line.is_ellipsis() {
                    self.timing.ellipsis_gate_delay
                } else {
                    self.timing.gate_delay
                };
                self.schedule(Step::OpenGate, delay, out);
            }
        }
    }

    fn open_gate(&mut self, out: &mut Vec<Cue>) {
        self.can_advance = true;
        out.push(Cue::Continue(true));
    }

    /// Show the rest of the current line at once and open the gate immediately.
    pub fn skip_reveal(&mut self, out: &mut Vec<Cue>) {
        if !self.revealing {
            log::debug!("[dialogue] skip ignored; not revealing");
            return;
        }
        let Some(line) = self.script.get(self.cursor).copied() else {
            return;
        };
        self.cancel_pending(out);
        self.revealing = false;
        self.revealed = line.text.chars().count();
        self.displayed = line.text.to_string();
        out.push(Cue::SetText(layout_text(line.text)));
        self.open_gate(out);
    }

    pub fn advance(&mut self, out: &mut Vec<Cue>) {
        if !self.can_advance {
            log::debug!("[dialogue] advance ignored; gate closed");
            return;
        }
        self.show_line(self.cursor + 1, out);
    }

    /// Fade to black, reset, and fade back into the first line.
    pub fn end_sequence(&mut self, out: &mut Vec<Cue>) {
        log::info!("[dialogue] end of script");
        self.phase = ScenePhase::FadingOut;
        self.can_advance = false;
        self.revealing = false;
        out.push(Cue::Continue(false));
        out.push(Cue::Overlay(Fade::ToOpaque));
        self.schedule(Step::ReturnToTitle, self.timing.fade, out);
    }

    /// Reset to the top of the script and run the opening transition again.
    fn return_to_title(&mut self, out: &mut Vec<Cue>) {
        self.cursor = 0;
        self.revealed = 0;
        self.previous_speaker = None;
        self.displayed.clear();
        out.push(Cue::ClearSpeaker);
        out.push(Cue::ClearText);
        out.push(Cue::Continue(false));
        self.phase = ScenePhase::Title;
        self.start(out);
    }

    /// Run the step behind `timer` if it is still the pending one.
    pub fn on_timer(&mut self, timer: TimerId, out: &mut Vec<Cue>) {
        let step = match self.pending {
            Some((id, step)) if id == timer => step,
            _ => {
                log::debug!("[dialogue] stale timer {:?}", timer);
                return;
            }
        };
        self.pending = None;
        match step {
            Step::ClearOverlay => {
                out.push(Cue::Overlay(Fade::ToClear));
                self.schedule(Step::BeginPlaying, self.timing.fade, out);
            }
            Step::BeginPlaying => {
                self.phase = ScenePhase::Playing;
                self.show_line(0, out);
            }
            Step::PresentLine(index) => self.present_line(index, out),
            Step::RevealNext => self.reveal_next(out),
            Step::OpenGate => self.open_gate(out),
            Step::ReturnToTitle => self.return_to_title(out),
        }
    }

    fn schedule(&mut self, step: Step, delay: Duration, out: &mut Vec<Cue>) {
        self.cancel_pending(out);
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.pending = Some((timer, step));
        out.push(Cue::Schedule { timer, delay });
    }

    fn cancel_pending(&mut self, out: &mut Vec<Cue>) {
        if let Some((id, _)) = self.pending.take() {
            out.push(Cue::Cancel(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(out: &[Cue]) -> Vec<(TimerId, Duration)> {
        out.iter()
            .filter_map(|c| match c {
                Cue::Schedule { timer, delay } => Some((*timer, *delay)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn layout_splits_on_break_marker() {
        assert_eq!(
            layout_text("いや…\n風邪"),
            vec![
                TextPiece::Text("いや…".into()),
                TextPiece::Break,
                TextPiece::Text("風邪".into()),
            ]
        );
        assert_eq!(layout_text("\n"), vec![TextPiece::Break]);
    }

    #[test]
    fn start_from_title_hides_title_and_waits() {
        let mut seq = DialogueSequencer::default();
        let mut out = Vec::new();
        seq.start(&mut out);
        assert_eq!(seq.phase(), ScenePhase::FadingIn);
        assert_eq!(out[0], Cue::Title(false));
        assert_eq!(scheduled(&out)[0].1, TITLE_HOLD);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut seq = DialogueSequencer::default();
        let mut out = Vec::new();
        seq.start(&mut out);
        let (first, _) = scheduled(&out)[0];
        seq.on_timer(first, &mut out);
        out.clear();
        seq.on_timer(first, &mut out);
        assert!(out.is_empty());
        assert_eq!(seq.phase(), ScenePhase::FadingIn);
    }

    #[test]
    fn scheduling_cancels_the_previous_timer() {
        let mut seq = DialogueSequencer::default();
        let mut out = Vec::new();
        seq.show_line(0, &mut out);
        let first = seq.pending_timer().unwrap();
        out.clear();
        seq.on_timer(first, &mut out);
        assert!(!out.contains(&Cue::Cancel(first)));
        let second = seq.pending_timer().unwrap();
        seq.skip_reveal(&mut out);
        assert!(out.contains(&Cue::Cancel(second)));
        assert_eq!(seq.pending_timer(), None);
    }

    #[test]
    fn start_is_ignored_outside_title() {
        let mut seq = DialogueSequencer::default();
        let mut out = Vec::new();
        seq.start(&mut out);
        out.clear();
        seq.start(&mut out);
        assert!(out.is_empty());
    }
}
