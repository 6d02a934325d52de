//! Headless command palette state.
//!
//! Models the jump-to-icon dialog without rendering it: open/close via the
//! global shortcut, query editing, selection and navigation on confirm.
//! Every query edit is a fresh search over the catalog.

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::PaletteResult;
use crate::matcher::Matcher;
use crate::record::{Record, ScoredRecord};

/// Receives the route of the icon the user picked.
pub trait Navigator {
    /// Navigates to `route`.
    fn navigate(&mut self, route: &str) -> PaletteResult<()>;
}

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: &str) -> PaletteResult<()> {
        self.visited.push(route.to_string());
        Ok(())
    }
}

/// Builds the detail-page route for an icon name.
pub fn icon_route(prefix: &str, name: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        urlencoding::encode(name)
    )
}

/// Keys the palette reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    /// The global open/close shortcut (Ctrl+K / Cmd+K).
    Toggle,
    Escape,
    Up,
    Down,
    Enter,
    Backspace,
    Char(char),
}

impl PaletteKey {
    /// Parses a key chord such as `ctrl+k`, `cmd+k`, `esc` or `down`.
    ///
    /// Single characters map to [`PaletteKey::Char`].
    pub fn from_chord(chord: &str) -> Option<Self> {
        let mut chars = chord.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c));
        }

        match chord.to_lowercase().as_str() {
            "ctrl+k" | "cmd+k" | "meta+k" => Some(Self::Toggle),
            "esc" | "escape" => Some(Self::Escape),
            "up" | "arrowup" => Some(Self::Up),
            "down" | "arrowdown" => Some(Self::Down),
            "enter" | "return" => Some(Self::Enter),
            "backspace" => Some(Self::Backspace),
            "space" => Some(Self::Char(' ')),
            _ => None,
        }
    }
}

/// State for the icon command palette.
#[derive(Debug)]
pub struct PaletteState {
    catalog: Catalog,
    matcher: Matcher,
    is_open: bool,
    query: String,
    /// Indices into the catalog, best match first.
    results: Vec<usize>,
    selected_index: usize,
}

impl PaletteState {
    /// Creates a closed palette over `catalog` with default settings.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    /// Creates a closed palette over `catalog`.
    pub fn with_config(catalog: Catalog, config: SearchConfig) -> Self {
        let mut state = Self {
            catalog,
            matcher: Matcher::with_config(config),
            is_open: false,
            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
        };
        state.filter();
        state
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Opens the palette with an empty query.
    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.reset();
        }
    }

    /// Closes the palette, discarding the query and selection.
    pub fn close(&mut self) {
        self.is_open = false;
        self.reset();
    }

    /// Opens a closed palette or closes an open one.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replaces the query and re-runs the search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.filter();
    }

    /// Appends a character to the query.
    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
        self.filter();
    }

    /// Removes the last character of the query.
    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.filter();
        }
    }

    /// Clears the query.
    pub fn clear(&mut self) {
        self.query.clear();
        self.filter();
    }

    /// Current results, best first.
    pub fn results(&self) -> Vec<&Record> {
        let records = self.catalog.records();
        self.results.iter().map(|&idx| &records[idx]).collect()
    }

    /// Current results with their scores.
    pub fn scored_results(&mut self) -> Vec<ScoredRecord<'_>> {
        self.matcher.search_scored(self.catalog.records(), &self.query)
    }

    /// The highlighted record, if any.
    pub fn selected(&self) -> Option<&Record> {
        self.results
            .get(self.selected_index)
            .map(|&idx| &self.catalog.records()[idx])
    }

    /// Moves the selection to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Moves selection down with wrap-around.
    pub fn select_next(&mut self) {
        let total = self.results.len();
        if total == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % total;
    }

    /// Moves selection up with wrap-around.
    pub fn select_prev(&mut self) {
        let total = self.results.len();
        if total == 0 {
            return;
        }
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(total - 1);
    }

    /// Navigates to the selected icon and closes the palette.
    ///
    /// Returns the route, or `None` (palette stays open) when nothing is
    /// selected.
    pub fn confirm(&mut self, navigator: &mut dyn Navigator) -> PaletteResult<Option<String>> {
        let Some(record) = self.selected() else {
            return Ok(None);
        };

        let route = icon_route(&self.matcher.config().route_prefix, &record.name);
        navigator.navigate(&route)?;

        tracing::debug!("Palette navigated to {}", route);
        self.close();
        Ok(Some(route))
    }

    /// Applies one key press.
    ///
    /// While closed, only the toggle shortcut has an effect. Returns the
    /// route when the key caused a navigation.
    pub fn handle_key(
        &mut self,
        key: PaletteKey,
        navigator: &mut dyn Navigator,
    ) -> PaletteResult<Option<String>> {
        if !self.is_open {
            if key == PaletteKey::Toggle {
                self.open();
            }
            return Ok(None);
        }

        match key {
            PaletteKey::Toggle | PaletteKey::Escape => self.close(),
            PaletteKey::Up => self.select_prev(),
            PaletteKey::Down => self.select_next(),
            PaletteKey::Enter => return self.confirm(navigator),
            PaletteKey::Backspace => self.backspace(),
            PaletteKey::Char(c) => self.insert_char(c),
        }

        Ok(None)
    }

    fn reset(&mut self) {
        self.query.clear();
        self.filter();
    }

    /// Re-runs the search and moves the selection back to the top.
    fn filter(&mut self) {
        self.results = self
            .matcher
            .search_indices(self.catalog.records(), &self.query);
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Record::new("github")
                .with_aliases(["git", "octocat"])
                .with_categories(["brands", "dev"]),
            Record::new("gitlab").with_categories(["brands", "dev"]),
            Record::new("house").with_aliases(["home"]),
            Record::new("arrow left").with_categories(["arrows"]),
        ])
        .unwrap()
    }

    fn names(state: &PaletteState) -> Vec<&str> {
        state.results().iter().map(|r| r.name.as_str()).collect()
    }

    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn navigate(&mut self, route: &str) -> PaletteResult<()> {
            Err(PaletteError::navigation(route, "router unavailable"))
        }
    }

    #[test]
    fn test_icon_route() {
        assert_eq!(icon_route("/icons", "github"), "/icons/github");
        assert_eq!(icon_route("/icons/", "arrow left"), "/icons/arrow%20left");
    }

    #[test]
    fn test_from_chord() {
        assert_eq!(PaletteKey::from_chord("Ctrl+K"), Some(PaletteKey::Toggle));
        assert_eq!(PaletteKey::from_chord("cmd+k"), Some(PaletteKey::Toggle));
        assert_eq!(PaletteKey::from_chord("esc"), Some(PaletteKey::Escape));
        assert_eq!(PaletteKey::from_chord("k"), Some(PaletteKey::Char('k')));
        assert_eq!(PaletteKey::from_chord("space"), Some(PaletteKey::Char(' ')));
        assert_eq!(PaletteKey::from_chord("ctrl+shift+p"), None);
    }

    #[test]
    fn test_starts_closed_with_leading_records() {
        let state = PaletteState::new(catalog());
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
        assert_eq!(names(&state), vec!["github", "gitlab", "house", "arrow left"]);
    }

    #[test]
    fn test_toggle_shortcut() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.handle_key(PaletteKey::Toggle, &mut nav).unwrap();
        assert!(state.is_open());

        state.handle_key(PaletteKey::Toggle, &mut nav).unwrap();
        assert!(!state.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.handle_key(PaletteKey::Char('g'), &mut nav).unwrap();
        state.handle_key(PaletteKey::Enter, &mut nav).unwrap();

        assert_eq!(state.query(), "");
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn test_typing_filters_results() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.open();
        for c in "home".chars() {
            state.handle_key(PaletteKey::Char(c), &mut nav).unwrap();
        }

        assert_eq!(state.query(), "home");
        assert_eq!(names(&state), vec!["house"]);

        state.handle_key(PaletteKey::Backspace, &mut nav).unwrap();
        assert_eq!(state.query(), "hom");
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = PaletteState::new(catalog());
        state.open();
        state.set_query("git");
        assert_eq!(names(&state), vec!["github", "gitlab"]);

        assert_eq!(state.selected_index(), 0);
        state.select_prev();
        assert_eq!(state.selected_index(), 1);
        state.select_next();
        assert_eq!(state.selected_index(), 0);
        state.select_next();
        assert_eq!(state.selected().map(|r| r.name.as_str()), Some("gitlab"));

        // A new query resets the selection
        state.set_query("gitl");
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = PaletteState::new(catalog());
        state.open();
        state.set_query("git");
        assert!(state.select(1));
        assert!(!state.select(5));
        assert_eq!(state.selected_index(), 1);
    }

    #[test]
    fn test_confirm_navigates_and_closes() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.open();
        state.set_query("arrow");
        let route = state.handle_key(PaletteKey::Enter, &mut nav).unwrap();

        assert_eq!(route.as_deref(), Some("/icons/arrow%20left"));
        assert_eq!(nav.visited, vec!["/icons/arrow%20left"]);
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_confirm_without_results_stays_open() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.open();
        state.set_query("zzz-nomatch");
        assert!(state.results().is_empty());

        let route = state.confirm(&mut nav).unwrap();
        assert_eq!(route, None);
        assert!(state.is_open());
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn test_confirm_navigation_error_keeps_palette_open() {
        let mut state = PaletteState::new(catalog());
        state.open();
        state.set_query("house");

        let err = state.confirm(&mut FailingNavigator).unwrap_err();
        assert!(matches!(err, PaletteError::Navigation { .. }));
        assert!(state.is_open());
        assert_eq!(state.query(), "house");
    }

    #[test]
    fn test_escape_clears_query() {
        let mut state = PaletteState::new(catalog());
        let mut nav = RecordingNavigator::default();

        state.open();
        state.set_query("git");
        state.handle_key(PaletteKey::Escape, &mut nav).unwrap();
        assert!(!state.is_open());

        state.open();
        assert_eq!(state.query(), "");
        assert_eq!(state.results().len(), 4);
    }

    #[test]
    fn test_custom_route_prefix() {
        let config = SearchConfig::builder().route_prefix("/glyphs").build();
        let mut state = PaletteState::with_config(catalog(), config);
        let mut nav = RecordingNavigator::default();

        state.open();
        state.set_query("github");
        let route = state.confirm(&mut nav).unwrap();
        assert_eq!(route.as_deref(), Some("/glyphs/github"));
    }

    #[test]
    fn test_scored_results() {
        let mut state = PaletteState::new(catalog());
        state.open();
        state.set_query("octocat");

        let scored = state.scored_results();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].record.name, "github");
    }
}
