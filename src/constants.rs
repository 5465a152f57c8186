// DOM wiring and asset constants for the web front-end.

// Element ids expected in index.html
pub const APP_ROOT_ID: &str = "app-root";
pub const ORNAMENT_LAYER_ID: &str = "ornament-layer";
pub const CONFETTI_LAYER_ID: &str = "confetti-layer";
pub const ASKING_VIEW_ID: &str = "asking-view";
pub const ACCEPTED_VIEW_ID: &str = "accepted-view";
pub const YES_BUTTON_ID: &str = "yes-button";
pub const NO_BUTTON_ID: &str = "no-button";
pub const NO_LABEL_ID: &str = "no-label";
pub const NO_GHOST_ID: &str = "no-ghost";
pub const MESSAGE_TEXT_ID: &str = "message-text";
pub const MESSAGE_LOADING_ID: &str = "message-loading";
pub const MUTE_BUTTON_ID: &str = "mute-button";
pub const MUTE_ICON_ID: &str = "mute-icon";
pub const WAX_SEAL_ID: &str = "wax-seal";
pub const ASK_AGAIN_ID: &str = "ask-again";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ORNAMENT_CLASS: &str = "fas fa-heart text-red-300 heart-particle opacity-60";
pub const CONFETTI_CLASS: &str = "confetti";
pub const CONFETTI_ICON_CLASS: &str = "fas fa-heart text-2xl";
pub const NO_FIXED_CLASS: &str = "is-fixed";
pub const NO_SHRUNK_CLASS: &str = "is-shrunk";
pub const NO_POPPED_CLASS: &str = "is-popped";
pub const MUTED_ICON_CLASS: &str = "fas fa-volume-mute text-xl";
pub const UNMUTED_ICON_CLASS: &str = "fas fa-volume-up text-xl";

// Background music
pub const MUSIC_PRIMARY_URL: &str =
    "https://docs.google.com/uc?export=download&id=1Fc9N7P0TN6GyKN0KZ6i9mkp3bH8xHKP7";
pub const MUSIC_FALLBACK_URL: &str =
    "https://cdn.pixabay.com/audio/2024/02/09/audio_d922b0c360.mp3";

// Who the message is addressed to
pub const VALENTINE_NAME: &str = "My Love";
