//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod about_dialog;
pub mod charts;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod sidebar;
pub mod splash;
pub mod table;

pub use about_dialog::AboutDialog;
pub use charts::Palette;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeRenderContext};
pub use layout::{calculate_dashboard_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use sidebar::SidebarComponent;
pub use splash::SplashComponent;
pub use table::TableComponent;

/// Flatten a test buffer into text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let mut text = String::new();
    for row in buffer.content.chunks(buffer.area.width as usize) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}
