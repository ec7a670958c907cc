//! UI module for rendering the TUI

mod signup;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    signup::draw(frame, frame.area(), app);
}
