use std::time::Duration;

// Shared animation/physics tuning constants for the proposal widget.

// Ornament field (floating hearts)
pub const ORNAMENT_SPAWN_INTERVAL: Duration = Duration::from_millis(600);
pub const ORNAMENT_CLEANUP_INTERVAL: Duration = Duration::from_millis(2000);
pub const ORNAMENT_KEEP_RECENT: usize = 25; // trimmed to this many before each append
pub const ORNAMENT_MAX_LIVE: usize = ORNAMENT_KEEP_RECENT + 1;
pub const ORNAMENT_SIZE_MIN_PX: f32 = 10.0;
pub const ORNAMENT_SIZE_MAX_PX: f32 = 30.0;
pub const ORNAMENT_LIFETIME_MIN_SEC: f32 = 5.0;
pub const ORNAMENT_LIFETIME_MAX_SEC: f32 = 10.0;
pub const ORNAMENT_START_Y_PCT: f32 = 105.0; // just below the viewport
pub const ORNAMENT_TRAVEL_Y_PCT: f32 = 115.0; // ends at -10%, just above it

// Repulsion (percentage space)
pub const REPULSION_THRESHOLD_PCT: f32 = 15.0;
pub const REPULSION_MAX_PUSH_PX: f32 = 25.0;
pub const POINTER_OFFSCREEN: f32 = -1000.0; // before the first pointer event

// Evasive control
pub const EVADE_PROXIMITY_PX: f32 = 140.0;
pub const EVADE_ANTICIPATION: Duration = Duration::from_millis(80);
pub const EVADE_COOLDOWN: Duration = Duration::from_millis(250);
pub const EVADE_EDGE_PADDING_PX: f32 = 40.0;
pub const EVADE_CENTER_EXCLUSION_PX: f32 = 300.0;
pub const EVADE_EXCLUSION_MARGIN_PX: f32 = 50.0;
pub const EVADE_FALLBACK_WIDTH_PX: f32 = 140.0; // used when the control can't be measured
pub const EVADE_FALLBACK_HEIGHT_PX: f32 = 60.0;
pub const GHOST_BADGE_EVERY: usize = 4;

// Accept control growth
pub const ACCEPT_SCALE_BASE: f32 = 1.0;
pub const ACCEPT_SCALE_STEP: f32 = 0.15;
pub const ACCEPT_SCALE_MAX: f32 = 3.0;

// Celebration burst
pub const CELEBRATION_PARTICLE_COUNT: usize = 80;
pub const CELEBRATION_DISTANCE_MIN_PX: f32 = 100.0;
pub const CELEBRATION_DISTANCE_SPAN_PX: f32 = 600.0;
pub const CELEBRATION_ROTATION_SPAN_DEG: f32 = 500.0; // uniform in [-span, span)
pub const CELEBRATION_SCALE_MIN: f32 = 0.5;
pub const CELEBRATION_SCALE_SPAN: f32 = 1.5;
pub const CELEBRATION_LIFETIME: Duration = Duration::from_millis(3000);
pub const CELEBRATION_PALETTE: [&str; 6] = [
    "#f43f5e", "#fb7185", "#fda4af", "#fecdd3", "#ffffff", "#ffd1dc",
];

// Message provider
pub const MESSAGE_DELAY: Duration = Duration::from_millis(1000);

// Tones (Hz)
pub const NOTE_C5: f32 = 523.25;
pub const NOTE_E5: f32 = 659.25;
pub const NOTE_G5: f32 = 783.99;
pub const NOTE_C6: f32 = 1046.50;
pub const ENVELOPE_FLOOR: f32 = 0.01; // exponential ramps can't reach zero
pub const BACKGROUND_VOLUME: f64 = 0.08;
