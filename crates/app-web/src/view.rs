use crate::constants::{
    CONTINUE_ICON_ID, FACE_ICON_ID, FADE_OVERLAY_ID, NAME_DISPLAY_CLASS, NAME_DISPLAY_ID, SHOW,
    TEXT_CONTENT_ID, TITLE_SCREEN_ID,
};
use crate::{dom, overlay};
use stagecraft_core::{Cue, Speaker, TextPiece};
use web_sys as web;

/// DOM elements making up the dialogue screen.
pub struct DialogueView {
    document: web::Document,
    title: web::Element,
    fade_overlay: web::Element,
    face_icon: web::HtmlImageElement,
    name_display: web::Element,
    text: web::Element,
    continue_icon: web::Element,
}

impl DialogueView {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            title: dom::require(document, TITLE_SCREEN_ID)?,
            fade_overlay: dom::require(document, FADE_OVERLAY_ID)?,
            face_icon: dom::require_as(document, FACE_ICON_ID)?,
            name_display: dom::require(document, NAME_DISPLAY_ID)?,
            text: dom::require(document, TEXT_CONTENT_ID)?,
            continue_icon: dom::require(document, CONTINUE_ICON_ID)?,
        })
    }

    /// Apply a presentation cue. Timer and tone cues are not ours and are skipped.
    pub fn apply(&self, cue: &Cue) {
        match cue {
            Cue::Title(true) => overlay::show(&self.title),
            Cue::Title(false) => overlay::hide(&self.title),
            Cue::Overlay(direction) => overlay::fade(&self.fade_overlay, *direction),
            Cue::Speaker(s) => self.set_speaker(*s),
            Cue::ClearSpeaker => {
                _ = self.face_icon.remove_attribute("src");
                self.face_icon.set_alt("");
                self.name_display.set_text_content(None);
                self.name_display.set_class_name(NAME_DISPLAY_CLASS);
            }
            Cue::ClearText => self.text.set_text_content(None),
            Cue::AppendChar(c) => self.append_text(&c.to_string()),
            Cue::LineBreak => self.append_break(),
            Cue::SetText(pieces) => {
                self.text.set_text_content(None);
                for piece in pieces {
                    match piece {
                        TextPiece::Text(s) => self.append_text(s),
                        TextPiece::Break => self.append_break(),
                    }
                }
            }
            Cue::Continue(on) => dom::set_class(&self.continue_icon, SHOW, *on),
            Cue::Tone { .. } | Cue::Schedule { .. } | Cue::Cancel(_) => {}
        }
    }

    fn set_speaker(&self, speaker: Speaker) {
        self.face_icon.set_src(speaker.portrait());
        self.face_icon.set_alt(speaker.display_name());
        self.name_display
            .set_text_content(Some(speaker.display_name()));
        self.name_display
            .set_class_name(&format!("{} {}", NAME_DISPLAY_CLASS, speaker.style_class()));
    }

    fn append_text(&self, s: &str) {
        _ = self.text.append_with_str_1(s);
    }

    fn append_break(&self) {
        match self.document.create_element("br") {
            Ok(br) => {
                _ = self.text.append_with_node_1(&br);
            }
            Err(e) => log::warn!("[dialogue] could not create <br>: {:?}", e),
        }
    }
}
