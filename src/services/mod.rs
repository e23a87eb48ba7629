// CardStyler services
// Services provide core functionality: settings persistence, style resolution,
// and stylesheet rendering.

pub mod settings_engine;
pub mod style_engine;
pub mod style_sheet;
