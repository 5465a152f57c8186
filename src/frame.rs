use crate::audio::AudioResource;
use crate::constants::VALENTINE_NAME;
use crate::core::{Cue, PrewrittenMessages, Proposal};
use crate::dom;
use crate::message;
use crate::render::View;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the event handlers and the frame loop share.
pub struct AppContext {
    pub proposal: RefCell<Proposal>,
    pub audio: RefCell<AudioResource>,
    pub view: RefCell<View>,
    pub started: Instant,
}

impl AppContext {
    /// Page-session time used by every timed behavior.
    #[inline]
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run `f` against the proposal and carry out the cues it produced.
    /// The proposal borrow is released before any cue runs.
    pub fn with_proposal(self: &Rc<Self>, f: impl FnOnce(&mut Proposal, Duration, &mut Vec<Cue>)) {
        let mut cues = Vec::new();
        {
            let now = self.now();
            let mut p = self.proposal.borrow_mut();
            f(&mut p, now, &mut cues);
        }
        self.dispatch(cues);
    }

    pub fn dispatch(self: &Rc<Self>, cues: Vec<Cue>) {
        for cue in cues {
            match cue {
                Cue::Tone(t) => self.audio.borrow_mut().play_tone(t),
                Cue::InitMusic => self.audio.borrow_mut().init_music(),
                Cue::FetchMessage { ticket } => {
                    let app = self.clone();
                    spawn_local(async move {
                        let text = message::compose_message(&PrewrittenMessages, VALENTINE_NAME).await;
                        if !app.proposal.borrow_mut().message_ready(ticket, text) {
                            log::debug!("[message] ticket {} is stale", ticket);
                        }
                    });
                }
            }
        }
    }

    pub fn frame(self: &Rc<Self>) {
        let now = self.now();
        let viewport = dom::viewport();
        let control_size = dom::offset_size(&self.view.borrow().no_button);
        self.with_proposal(|p, now, cues| p.tick(now, viewport, control_size, cues));
        self.view.borrow_mut().render(&self.proposal.borrow(), now);
    }
}

pub fn start_loop(app: Rc<AppContext>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
