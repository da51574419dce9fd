//! App state - Central state management for the gallery TUI

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::bridge::{MorphMessage, SketchBridge};
use crate::carousel::Carousel;
use crate::cli::TuiArgs;
use crate::config::Config;
use crate::core::{Category, GalleryEngine};
use crate::filter::Bucket;

/// Application state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the filtered gallery list
    Browse,
    /// Paging the selection through the 3-up carousel
    Carousel,
}

/// Main application state
pub struct App {
    /// Current app phase
    pub state: AppState,
    /// Should the app quit
    pub should_quit: bool,
    /// Show help overlay
    pub show_help: bool,
    /// Gallery engine: catalog, filters, selection
    pub engine: GalleryEngine,
    /// Cursor position within the visible list
    pub cursor: usize,
    /// Carousel over the selection (present in Carousel state)
    pub carousel: Option<Carousel>,
    /// Export bridge to the morph/sketch tool
    pub bridge: SketchBridge,
    /// Last exported message, kept for the status surface
    pub last_export: Option<MorphMessage>,
    /// Status bar message
    pub status_message: String,
    /// Resolved config (outline paths, cache dir)
    pub config: Config,
}

impl App {
    /// Create a new App state from CLI args and config
    pub async fn new(args: TuiArgs, config: Config) -> Result<Self> {
        let dataset = args
            .dataset
            .clone()
            .unwrap_or_else(|| config.data.dataset.clone());
        let engine = GalleryEngine::load(&dataset).await?;

        let cache_dir = config
            .export
            .cache_dir
            .clone()
            .unwrap_or_else(crate::bridge::SelectionCache::default_dir);
        let bridge = SketchBridge::new(crate::bridge::SelectionCache::new(cache_dir));

        Ok(Self {
            state: AppState::Browse,
            should_quit: false,
            show_help: false,
            engine,
            cursor: 0,
            carousel: None,
            bridge,
            last_export: None,
            status_message: "Press '?' for help".to_string(),
            config,
        })
    }

    /// Global key handler
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.state {
            AppState::Browse => self.handle_browse_key(key),
            AppState::Carousel => self.handle_carousel_key(key),
        }
    }

    /// Key handler for the gallery list
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            // Navigation
            KeyCode::Char('k') | KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor_down(1),
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor = self.engine.visible_count().saturating_sub(1)
            }
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(20),
            KeyCode::PageDown => self.move_cursor_down(20),

            // Selection
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selection(),
            KeyCode::Char('a') => self.select_all(),
            KeyCode::Char('n') => {
                self.engine.clear_selection();
                self.status_message = "Selection cleared".to_string();
            }

            // Category legend buttons (toggling the active one clears it)
            KeyCode::Char('c') => self.toggle_category(Category::Children),
            KeyCode::Char('w') => self.toggle_category(Category::Women),
            KeyCode::Char('m') => self.toggle_category(Category::Men),

            // Bucket controls
            KeyCode::Char('1') => self.set_bucket(Bucket::All),
            KeyCode::Char('2') => self.set_bucket(Bucket::Unidentified),
            KeyCode::Char('3') => self.set_bucket(Bucket::Named),
            KeyCode::Char('4') => self.set_bucket(Bucket::Politics),
            KeyCode::Char('5') => self.set_bucket(Bucket::Military),
            KeyCode::Char('6') => self.set_bucket(Bucket::FirstLadies),

            // Dependent actions: carousel and export
            KeyCode::Char('v') => self.open_carousel(),
            KeyCode::Char('e') => self.export_selection(),

            // Help overlay
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,

            _ => {}
        }
    }

    /// Key handler for carousel mode
    fn handle_carousel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state = AppState::Browse;
                self.carousel = None;
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.next();
                }
            }
            KeyCode::Char('h') | KeyCode::Left => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.prev();
                }
            }
            KeyCode::Char('e') => self.export_selection(),
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            _ => {}
        }
    }

    fn move_cursor_down(&mut self, by: usize) {
        let last = self.engine.visible_count().saturating_sub(1);
        self.cursor = (self.cursor + by).min(last);
    }

    /// Keep the cursor inside the visible list after a filter change
    fn clamp_cursor(&mut self) {
        self.cursor = self
            .cursor
            .min(self.engine.visible_count().saturating_sub(1));
    }

    fn toggle_category(&mut self, category: Category) {
        self.engine.toggle_category(category);
        self.clamp_cursor();
        self.status_message = match self.engine.filter_state().category {
            Some(c) => format!("Category: {}", c.label()),
            None => "Category cleared".to_string(),
        };
    }

    fn set_bucket(&mut self, bucket: Bucket) {
        self.engine.set_bucket(bucket);
        self.clamp_cursor();
        self.status_message = format!("Filter: {}", bucket.label());
    }

    /// Toggle selection of the record under the cursor
    fn toggle_selection(&mut self) {
        let filename = match self.engine.visible().get(self.cursor) {
            Some(record) => record.filename.clone(),
            None => return,
        };
        match self.engine.toggle_selection(&filename) {
            Ok(_) => {
                self.status_message = format!("{} selected", self.engine.selection().len());
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Select every visible record not already selected
    fn select_all(&mut self) {
        let unselected: Vec<String> = self
            .engine
            .visible()
            .iter()
            .filter(|r| !self.engine.selection().contains(&r.filename))
            .map(|r| r.filename.clone())
            .collect();
        for filename in unselected {
            let _ = self.engine.toggle_selection(&filename);
        }
        self.status_message = format!("All {} selected", self.engine.selection().len());
    }

    /// Open the carousel over the current selection
    fn open_carousel(&mut self) {
        if !self.engine.can_act() {
            self.status_message = "Nothing selected".to_string();
            return;
        }
        self.carousel = Some(
            self.engine
                .open_carousel(&self.config.data.outlines_dir, &self.config.data.outline_ext),
        );
        self.state = AppState::Carousel;
    }

    /// Export the selection; the TUI stands in as the ready consumer
    fn export_selection(&mut self) {
        if !self.engine.can_act() {
            self.status_message = "Nothing selected".to_string();
            return;
        }
        match self.engine.export_selection(&self.bridge) {
            Ok(mut handshake) => {
                if let Some(message) = handshake.consumer_ready() {
                    self.status_message = format!(
                        "Exported {} filenames to {}",
                        message.payload.len(),
                        self.bridge.cache().entry_path().display()
                    );
                    self.last_export = Some(message);
                }
            }
            Err(e) => self.status_message = format!("Export failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    const DATASET: &str = r#"[
        {"title": "Unidentified woman", "filename": "w1.jpg", "objectType": "Silhouettes"},
        {"title": "Unidentified boy", "filename": "c1.jpg", "objectType": "Silhouettes"},
        {"title": "General Washington", "filename": "m1.jpg", "objectType": "Silhouettes"}
    ]"#;

    async fn make_app(dir: &TempDir) -> App {
        let dataset = dir.path().join("dataset.json");
        std::fs::write(&dataset, DATASET).unwrap();

        let mut config = Config::default();
        config.export.cache_dir = Some(dir.path().join("cache"));

        App::new(
            TuiArgs {
                dataset: Some(dataset),
            },
            config,
        )
        .await
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_keybinding_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = make_app(&dir).await;
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_cursor_clamps_to_visible_list() {
        let dir = TempDir::new().unwrap();
        let mut app = make_app(&dir).await;

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 2);

        // Narrowing the filter pulls the cursor back in range
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.engine.visible_count(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[tokio::test]
    async fn test_selection_and_carousel_flow() {
        let dir = TempDir::new().unwrap();
        let mut app = make_app(&dir).await;

        // Carousel without a selection is refused
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.state, AppState::Browse);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine.selection().len(), 2);

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.state, AppState::Carousel);
        assert_eq!(app.carousel.as_ref().unwrap().len(), 2);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Browse);
        assert!(app.carousel.is_none());
    }

    #[tokio::test]
    async fn test_export_from_tui() {
        let dir = TempDir::new().unwrap();
        let mut app = make_app(&dir).await;

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('e'));

        let message = app.last_export.as_ref().unwrap();
        assert_eq!(message.payload, vec!["w1.jpg", "c1.jpg", "m1.jpg"]);
        assert!(app.bridge.cache().entry_path().exists());
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_next_key() {
        let dir = TempDir::new().unwrap();
        let mut app = make_app(&dir).await;

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // First key only dismisses the overlay
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
