use super::constants::GHOST_BADGE_EVERY;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Labels cycled through by the evasive control, one per relocation.
pub const TAUNTS: &[&str] = &[
    "No",
    "Wait, what?",
    "Think of the puppy!",
    "Are you sure?",
    "Rude.",
    "Try again!",
    "Wrong button!",
    "Nope.",
    "Missed me!",
    "Catch me if you can!",
    "Ninja mode: ON",
    "404: Rejection Not Found",
    "I'm a shy button...",
    "Not even close!",
    "Ticklish! Stop it!",
    "Try the big red one!",
    "Loading... rejection failed",
    "You can't catch me!",
    "Click the other one!",
    "Too slow!",
    "Not today!",
    "Wheeeeee!",
    "Is that all you've got?",
    "Forbidden button!",
    "Error: Rejection blocked",
    "Why are you like this?",
    "Nice try, Einstein!",
    "I'm allergic to 'No'",
    "Keep dreaming!",
    "Denied with style",
    "Look! A distraction! ➡️",
];

pub const ROMANTIC_MESSAGES: &[&str] = &[
    "You've made me the happiest person alive! I can't wait to spend Valentine's Day with you. ❤️",
    "From the moment you said yes, my heart soared. You're my everything, and I promise to cherish every moment we share together. 💕",
    "My heart beats only for you. Thank you for choosing me to be your Valentine. Let's make this day unforgettable! 🌹",
    "You've filled my world with love and light. Being your Valentine is the greatest gift I could ever receive. 💖",
    "Every moment with you feels like a dream come true. I'm so grateful you said yes! Happy Valentine's Day, my love! 💘",
];

pub const FALLBACK_MESSAGE: &str = "You said yes, and that's all I ever wanted. Happy Valentine's Day! ❤️";

#[inline]
pub fn taunt_for(counter: usize) -> &'static str {
    TAUNTS[counter % TAUNTS.len()]
}

/// Every fourth taunt (after the first) gets a ghost badge.
#[inline]
pub fn shows_ghost(counter: usize) -> bool {
    counter > 0 && counter % GHOST_BADGE_EVERY == 0
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("message source unavailable: {0}")]
    Unavailable(String),
    #[error("message source returned an empty message")]
    Empty,
}

/// Supplies the celebratory text shown after acceptance.
pub trait MessageSource {
    fn compose(&self, name: &str, rng: &mut dyn RngCore) -> Result<String, MessageError>;
}

/// Picks one of the pre-written `ROMANTIC_MESSAGES` at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrewrittenMessages;

impl MessageSource for PrewrittenMessages {
    fn compose(&self, _name: &str, rng: &mut dyn RngCore) -> Result<String, MessageError> {
        ROMANTIC_MESSAGES
            .choose(rng)
            .map(|m| m.to_string())
            .ok_or_else(|| MessageError::Unavailable("no pre-written messages".into()))
    }
}

/// Ask `source` for a message, substituting `FALLBACK_MESSAGE` on any failure.
/// Never returns an empty string.
pub fn message_or_fallback(source: &dyn MessageSource, name: &str, rng: &mut dyn RngCore) -> String {
    let composed = source.compose(name, rng).and_then(|m| {
        if m.trim().is_empty() {
            Err(MessageError::Empty)
        } else {
            Ok(m)
        }
    });
    match composed {
        Ok(m) => m,
        Err(e) => {
            log::warn!("[message] {}; using fallback", e);
            FALLBACK_MESSAGE.to_string()
        }
    }
}
