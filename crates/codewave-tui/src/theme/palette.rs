//! Color palette: deep navy background with the blue to cyan to purple
//! brand gradient approximated in RGB.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(3, 7, 18);
pub const CARD_BG: Color = Color::Rgb(15, 23, 42);
pub const POPUP_BG: Color = Color::Rgb(30, 41, 59);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Rgb(34, 211, 238);

// --- Brand gradient ---
pub const BRAND_BLUE: Color = Color::Rgb(96, 165, 250);
pub const BRAND_CYAN: Color = Color::Rgb(103, 232, 249);
pub const BRAND_PURPLE: Color = Color::Rgb(192, 132, 252);

pub const ACCENT: Color = BRAND_CYAN;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on accent-colored backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
