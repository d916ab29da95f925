pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 900;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const HEADER_HEIGHT: f32 = 96.0;          // Title strip above the grid
pub const PAGE_PADDING: f32 = 32.0;           // Outer padding of the page
pub const GRID_GAP: f32 = 32.0;               // Gap between grid cells
pub const COVER_SIZE: f32 = 160.0;            // Album cover edge (pixels)
pub const CAPTION_HEIGHT: f32 = 56.0;         // Title + artist below each cover
pub const RECORD_RADIUS: f32 = 64.0;          // Record disc radius (pixels)
pub const SCROLL_STEP: f32 = 48.0;            // Pixels per mouse wheel notch

pub const TURNTABLE_WIDTH: f32 = 500.0;       // Turntable body at full size
pub const TURNTABLE_HEIGHT: f32 = 280.0;
pub const PLATTER_DIAMETER: f32 = 256.0;      // Platter at full size
pub const PLATTER_MIN_DIAMETER: f32 = 64.0;   // Below this the platter is not laid out

pub const SLIDE_OUT_DISTANCE: f32 = 48.0;     // How far the record leaves the sleeve
pub const SLIDE_OUT_DURATION: f32 = 0.35;     // Record sliding out of the sleeve (seconds)
pub const MOVE_DURATION: f32 = 0.9;           // Record flying to the platter (seconds)
pub const SPIN_PERIOD: f32 = 1.5;             // One full record revolution (seconds)

pub const TONEARM_DOWN_ANGLE: f32 = 25.0;     // Degrees, needle on the record
pub const TONEARM_REST_ANGLE: f32 = -25.0;    // Degrees, arm parked
pub const TONEARM_DROP_DELAY: f32 = 0.5;      // Wait for the record before dropping the needle
pub const TONEARM_STIFFNESS: f32 = 120.0;
pub const TONEARM_DAMPING: f32 = 10.0;
pub const TONEARM_MASS: f32 = 1.0;

pub const DIALOG_WIDTH: f32 = 480.0;
pub const DIALOG_FADE_DURATION: f32 = 0.2;    // Fade in/out of the detail dialog (seconds)
pub const DIALOG_SLIDE_DISTANCE: f32 = 20.0;  // Dialog slides up this far while appearing
pub const DESELECT_DELAY: f32 = 0.3;          // Selection survives the dialog's fade-out

pub const MAX_RESTING_TILT: f32 = 2.0;        // Random sleeve tilt on the wall (degrees)
