//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates the filter pipeline: sidebar criteria are applied to the
//! sample table and the dashboard view is rebuilt whenever they change.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, AboutDialog, HelpDialog, HomeRenderContext, Palette, QuitDialog,
    SidebarComponent, SplashComponent, TableComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::model::{DashboardView, SampleTable};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// The full dataset; never filtered in place
    pub table: SampleTable,

    /// Derived data for the current filters
    pub view: DashboardView,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    variant_palette: Palette,
    region_palette: Palette,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub sidebar: SidebarComponent,
    pub data_table: TableComponent,
    pub quit_dialog: QuitDialog,
    pub about_dialog: AboutDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App over `table`
    pub fn new(config: &Config, table: SampleTable) -> App {
        let splash_duration = config.splash_duration();
        let mode = if splash_duration.is_zero() {
            AppMode::Running
        } else {
            AppMode::Splash
        };

        let sidebar = SidebarComponent::new(&table);
        let view = DashboardView::build(&sidebar.criteria().apply(&table));
        let mut data_table = TableComponent::new(config.show_table);
        data_table.set_samples(&view.samples);

        App {
            mode,
            variant_palette: Palette::new(table.variants()),
            region_palette: Palette::new(table.regions()),
            table,
            view,
            modals: ModalStack::new(),
            should_quit: false,
            splash: SplashComponent::new(splash_duration),
            sidebar,
            data_table,
            quit_dialog: QuitDialog,
            about_dialog: AboutDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Re-run the pipeline for the sidebar's current criteria
    fn refresh_view(&mut self) {
        let criteria = self.sidebar.criteria();
        let filtered = criteria.apply(&self.table);
        debug!(criteria = %criteria, ids = ?filtered.ids(), "filters changed");

        self.view = DashboardView::build(&filtered);
        self.data_table.set_samples(&self.view.samples);
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::About => self.about_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::About => self.about_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        if self.table.is_empty() {
            warn!("no samples loaded; every chart will show its warning");
        }
        info!(
            samples = self.table.len(),
            regions = self.table.regions().len(),
            variants = self.table.variants().len(),
            "dashboard ready"
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().copied() {
                    return self.handle_modal_key_event(modal, key);
                }

                let action = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
                    KeyCode::Char('t') => Some(Action::ToggleTable),
                    KeyCode::PageUp => Some(Action::TablePageUp),
                    KeyCode::PageDown => Some(Action::TablePageDown),
                    KeyCode::Char('i') => Some(Action::OpenAbout),
                    KeyCode::Char('?') => Some(Action::OpenHelp),
                    _ => return self.sidebar.handle_key_event(key),
                };
                Ok(action)
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(action);
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }

            // Sidebar
            Action::FocusNext
            | Action::FocusPrev
            | Action::CursorUp
            | Action::CursorDown
            | Action::ToggleOption
            | Action::SelectAllOptions
            | Action::ClearOptions
            | Action::ShiftDate(_, _)
            | Action::ResetFilters => return self.sidebar.update(action),
            Action::FiltersChanged => self.refresh_view(),

            // Data table
            Action::ToggleTable | Action::TablePageUp | Action::TablePageDown => {
                return self.data_table.update(action);
            }

            // Modals
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenAbout => {
                self.about_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::About);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    view: &self.view,
                    variant_palette: &self.variant_palette,
                    region_palette: &self.region_palette,
                    total_samples: self.table.len(),
                };

                draw_home_screen(frame, area, &mut self.sidebar, &mut self.data_table, &ctx)?;

                if let Some(modal) = self.modals.top().copied() {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;
    use crate::model::dashboard::{NO_BOX_PLOT_DATA, NO_TIMELINE_DATA, NO_VARIANT_DATA};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let config = Config {
            splash_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(&config, SampleTable::builtin().unwrap());
        app.init().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let mut current = app.handle_key_event(key).unwrap();
        while let Some(action) = current {
            current = app.update(action).unwrap();
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
        terminal.draw(|frame| app.draw(frame, frame.area()).unwrap()).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_starts_with_all_samples() {
        let mut app = app();
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.view.row_count, 8);

        let text = render(&mut app);
        assert!(text.contains("Current number of filtered samples: 8"));
        assert!(!text.contains(NO_VARIANT_DATA));
    }

    #[test]
    fn test_splash_then_dashboard() {
        let config = Config::default();
        let mut app = App::new(&config, SampleTable::builtin().unwrap());
        app.init().unwrap();
        assert_eq!(app.mode, AppMode::Splash);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, AppMode::Running);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_omicron_only() {
        let mut app = app();
        // Variants list: Delta, Gamma, Omicron
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view.row_count, 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.view.row_count, 2);
        let ids: Vec<&str> = app.view.samples.iter().map(|s| s.sample_id.as_str()).collect();
        assert_eq!(ids, vec!["MX002", "US002"]);
        assert_eq!(app.data_table.row_count(), 2);
    }

    #[test]
    fn test_no_regions_shows_every_warning() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.view.row_count, 0);

        let text = render(&mut app);
        assert!(text.contains("Current number of filtered samples: 0"));
        assert!(text.contains(NO_VARIANT_DATA));
        assert!(text.contains(NO_TIMELINE_DATA));
        assert!(text.contains(NO_BOX_PLOT_DATA));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view.row_count, 8);
    }

    #[test]
    fn test_modal_takes_keys_first() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.modals.top(), Some(&Modal::About));
        assert!(render(&mut app).contains("Conclusions & Next Steps"));

        // Sidebar shortcuts are swallowed while the dialog is open
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('i'));
        assert!(app.modals.top().is_none());

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.top().is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let action = app.handle_key_event(key).unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_table_toggle_shows_rows() {
        let mut app = app();
        assert!(!render(&mut app).contains("Filtered data table"));

        press(&mut app, KeyCode::Char('t'));
        let text = render(&mut app);
        assert!(text.contains("Filtered data table (8 rows)"));
        assert!(text.contains("US003"));
    }
}
