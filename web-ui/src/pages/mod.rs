// Page components, one per route

pub mod ai_predict;
pub mod breathing;
pub mod cursor_buddy;
pub mod flip_cards;
pub mod game;
pub mod health_insights;
pub mod home;
pub mod metrics;
pub mod music;
pub mod not_found;
pub mod speech_check;
