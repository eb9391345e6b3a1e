// DOM element ids the page is expected to provide.
pub const CANVAS_ID: &str = "scene";
pub const ACCEPT_BUTTON_ID: &str = "yesBtn";
pub const DECLINE_BUTTON_ID: &str = "noBtn";
pub const MAIN_PANEL_ID: &str = "mainUI";
pub const SUCCESS_PANEL_ID: &str = "successScreen";

// Seconds between frame-rate log lines
pub const FPS_REPORT_INTERVAL_SEC: f32 = 5.0;
