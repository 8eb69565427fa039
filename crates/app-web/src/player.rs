use crate::audio::ToneSynth;
use crate::dom;
use crate::timers::WebTimers;
use crate::view::DialogueView;
use stagecraft_core::{best_effort, Cue, DialogueSequencer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type SharedPlayer = Rc<RefCell<Player>>;

/// Glue between the sequencer and the page: applies cues and feeds back
/// clicks and fired timers.
pub struct Player {
    sequencer: DialogueSequencer,
    view: DialogueView,
    tones: ToneSynth,
    timers: WebTimers,
}

impl Player {
    pub fn new(sequencer: DialogueSequencer, view: DialogueView) -> Self {
        Self {
            sequencer,
            view,
            tones: ToneSynth::default(),
            timers: WebTimers::default(),
        }
    }

    /// Unlock audio from a click so later timer-driven tones can sound.
    pub fn warm_up_audio(&mut self) {
        best_effort("audio", self.tones.warm_up());
    }

    /// Run `f` against the sequencer and apply whatever it emits.
    pub fn dispatch(this: &SharedPlayer, f: impl FnOnce(&mut DialogueSequencer, &mut Vec<Cue>)) {
        let weak = Rc::downgrade(this);
        let mut guard = this.borrow_mut();
        let player = &mut *guard;
        let mut cues = Vec::new();
        f(&mut player.sequencer, &mut cues);
        player.apply(&weak, &cues);
    }

    fn apply(&mut self, this: &Weak<RefCell<Player>>, cues: &[Cue]) {
        for cue in cues {
            match cue {
                Cue::Schedule { timer, delay } => {
                    let timer = *timer;
                    let weak = this.clone();
                    self.timers.set(timer, *delay, move || {
                        if let Some(player) = weak.upgrade() {
                            player.borrow_mut().timers.fired(timer);
                            Player::dispatch(&player, |seq, out| seq.on_timer(timer, out));
                        }
                    });
                }
                Cue::Cancel(timer) => self.timers.clear(*timer),
                Cue::Tone {
                    frequency_hz,
                    duration,
                } => best_effort("audio", self.tones.play(*frequency_hz, *duration)),
                other => self.view.apply(other),
            }
        }
    }
}

/// Build the dialogue player and route page clicks into it. The click
/// listener keeps the player alive for the page's lifetime.
pub fn wire(document: &web::Document) -> anyhow::Result<SharedPlayer> {
    let view = DialogueView::from_document(document)?;
    let player = Rc::new(RefCell::new(Player::new(DialogueSequencer::default(), view)));
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let for_click = player.clone();
    dom::add_click_listener(&body, move || {
        for_click.borrow_mut().warm_up_audio();
        Player::dispatch(&for_click, |seq, out| seq.handle_click(out));
    });
    log::info!("[dialogue] player ready");
    Ok(player)
}
