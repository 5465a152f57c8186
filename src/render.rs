use crate::constants::*;
use crate::core::{shows_ghost, taunt_for, ControlPose, MessageState, OrnamentFrame, Phase, Proposal, Scene};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Evasive control state as last written to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ControlView {
    position: Option<Vec2>,
    pose: ControlPose,
    counter: usize,
}

/// DOM handles the front-end writes to, plus what was last rendered so each
/// frame only touches what changed.
pub struct View {
    document: web::Document,
    ornament_layer: web::HtmlElement,
    confetti_layer: web::HtmlElement,
    asking_view: web::HtmlElement,
    accepted_view: web::HtmlElement,
    yes_button: web::HtmlElement,
    pub no_button: web::HtmlElement,
    no_label: web::HtmlElement,
    no_ghost: web::HtmlElement,
    message_text: web::HtmlElement,
    message_loading: web::HtmlElement,
    mute_button: web::HtmlElement,
    mute_icon: web::HtmlElement,

    ornaments: FnvHashMap<u64, web::HtmlElement>,
    confetti_batch: Option<u64>,
    phase: Option<Phase>,
    control: Option<ControlView>,
    accept_scale: f32,
    message_ready: Option<bool>,
}

impl View {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            ornament_layer: dom::html_element(document, ORNAMENT_LAYER_ID)?,
            confetti_layer: dom::html_element(document, CONFETTI_LAYER_ID)?,
            asking_view: dom::html_element(document, ASKING_VIEW_ID)?,
            accepted_view: dom::html_element(document, ACCEPTED_VIEW_ID)?,
            yes_button: dom::html_element(document, YES_BUTTON_ID)?,
            no_button: dom::html_element(document, NO_BUTTON_ID)?,
            no_label: dom::html_element(document, NO_LABEL_ID)?,
            no_ghost: dom::html_element(document, NO_GHOST_ID)?,
            message_text: dom::html_element(document, MESSAGE_TEXT_ID)?,
            message_loading: dom::html_element(document, MESSAGE_LOADING_ID)?,
            mute_button: dom::html_element(document, MUTE_BUTTON_ID)?,
            mute_icon: dom::html_element(document, MUTE_ICON_ID)?,
            ornaments: FnvHashMap::default(),
            confetti_batch: None,
            phase: None,
            control: None,
            accept_scale: f32::NAN,
            message_ready: None,
        })
    }

    pub fn render(&mut self, proposal: &Proposal, now: Duration) {
        self.render_phase(proposal.phase());
        match proposal.scene() {
            Scene::Asking(scene) => {
                let frames: Vec<OrnamentFrame> = scene.field.frame(now, proposal.pointer().pct).collect();
                self.render_ornaments(&frames);
                self.render_control(ControlView {
                    position: scene.evasive.position(),
                    pose: scene.evasive.pose(),
                    counter: scene.evasive.counter(),
                });
                self.render_accept_scale(scene.accept_scale);
                self.render_confetti(None, &[]);
            }
            Scene::Accepted(scene) => {
                self.render_ornaments(&[]);
                let batch = scene.celebration.live_batch();
                self.render_confetti(batch, scene.celebration.particles());
                self.render_message(&scene.message);
            }
        }
    }

    pub fn render_mute(&self, muted: bool) {
        self.mute_icon
            .set_class_name(if muted { MUTED_ICON_CLASS } else { UNMUTED_ICON_CLASS });
        _ = self
            .mute_button
            .set_attribute("title", if muted { "Unmute sounds" } else { "Mute sounds" });
    }

    fn render_phase(&mut self, phase: Phase) {
        if self.phase == Some(phase) {
            return;
        }
        let accepted = phase == Phase::Accepted;
        dom::set_hidden(&self.asking_view, accepted);
        dom::set_hidden(&self.accepted_view, !accepted);
        if !accepted {
            // fresh asking view: control back in its layout slot
            self.control = None;
            self.message_ready = None;
        }
        self.phase = Some(phase);
    }

    fn render_ornaments(&mut self, frames: &[OrnamentFrame]) {
        self.ornaments.retain(|id, el| {
            let live = frames.iter().any(|f| f.id == *id);
            if !live {
                el.remove();
            }
            live
        });
        for f in frames {
            if !self.ornaments.contains_key(&f.id) {
                match self.create_child(&self.ornament_layer, "i", ORNAMENT_CLASS) {
                    Some(el) => {
                        dom::set_style(&el, "font-size", &format!("{:.1}px", f.size_px));
                        self.ornaments.insert(f.id, el);
                    }
                    None => continue,
                }
            }
            if let Some(el) = self.ornaments.get(&f.id) {
                dom::set_style(el, "left", &format!("{:.2}%", f.position_pct.x));
                dom::set_style(el, "top", &format!("{:.2}%", f.position_pct.y));
                dom::set_style(
                    el,
                    "transform",
                    &format!("translate({:.1}px, {:.1}px)", f.offset_px.x, f.offset_px.y),
                );
            }
        }
    }

    fn render_control(&mut self, view: ControlView) {
        if self.control == Some(view) {
            return;
        }
        let el = &self.no_button;
        match view.position {
            Some(p) => {
                dom::set_class(el, NO_FIXED_CLASS, true);
                dom::set_style(el, "left", &format!("{:.1}px", p.x));
                dom::set_style(el, "top", &format!("{:.1}px", p.y));
            }
            None => {
                dom::set_class(el, NO_FIXED_CLASS, false);
                _ = el.style().remove_property("left");
                _ = el.style().remove_property("top");
            }
        }
        dom::set_class(el, NO_SHRUNK_CLASS, view.pose == ControlPose::Shrunk);
        dom::set_class(el, NO_POPPED_CLASS, view.pose == ControlPose::Popped);
        self.no_label.set_text_content(Some(taunt_for(view.counter)));
        dom::set_hidden(&self.no_ghost, !shows_ghost(view.counter));
        self.control = Some(view);
    }

    fn render_accept_scale(&mut self, scale: f32) {
        if self.accept_scale == scale {
            return;
        }
        dom::set_style(&self.yes_button, "transform", &format!("scale({:.2})", scale));
        self.accept_scale = scale;
    }

    fn render_confetti(&mut self, batch: Option<u64>, particles: &[crate::core::CelebrationParticle]) {
        if self.confetti_batch == batch {
            return;
        }
        self.confetti_layer.set_inner_html("");
        for p in particles {
            let Some(el) = self.create_child(&self.confetti_layer, "div", CONFETTI_CLASS) else {
                continue;
            };
            dom::set_style(&el, "color", p.color);
            dom::set_style(&el, "--x", &format!("{:.1}px", p.offset_px.x));
            dom::set_style(&el, "--y", &format!("{:.1}px", p.offset_px.y));
            dom::set_style(&el, "--r", &format!("{:.1}deg", p.rotation_deg));
            dom::set_style(&el, "--s", &format!("{:.3}", p.scale));
            _ = self.create_child(&el, "i", CONFETTI_ICON_CLASS);
        }
        self.confetti_batch = batch;
    }

    fn render_message(&mut self, message: &MessageState) {
        let ready = matches!(message, MessageState::Ready(_));
        if self.message_ready == Some(ready) {
            return;
        }
        dom::set_hidden(&self.message_loading, ready);
        dom::set_hidden(&self.message_text, !ready);
        match message {
            MessageState::Ready(text) => self.message_text.set_text_content(Some(text)),
            MessageState::Loading { .. } => self.message_text.set_text_content(None),
        }
        self.message_ready = Some(ready);
    }

    fn create_child(&self, parent: &web::HtmlElement, tag: &str, class: &str) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element(tag)
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(class);
        parent.append_child(&el).ok()?;
        Some(el)
    }
}
