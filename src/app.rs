use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::api::{ApiError, Category, CommentNode, HnClient, Story};
use crate::favorites::FavoritesStore;
use crate::page::{LoadedPage, PageState};
use crate::refresh::{REFRESH_INTERVAL, RefreshTimer};
use crate::reveal::RevealState;

pub enum AsyncResult {
    Page {
        generation: u64,
        result: Result<LoadedPage, ApiError>,
    },
    FavoriteStories {
        generation: u64,
        stories: Vec<Story>,
    },
    Comments {
        story_id: u64,
        from: usize,
        nodes: Vec<CommentNode>,
    },
}

/// Loading state for the active list fetch.
#[derive(Debug, Default)]
pub struct LoadState {
    pub loading: bool,
    pub loading_start: Option<Instant>,
}

impl LoadState {
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.loading_start = Some(Instant::now());
        }
        // Don't clear loading_start when done - used for minimum spinner duration
    }

    pub fn should_show_spinner(&self) -> bool {
        const MIN_SPINNER_DURATION: std::time::Duration = std::time::Duration::from_millis(500);
        if let Some(start) = self.loading_start {
            self.loading || start.elapsed() < MIN_SPINNER_DURATION
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Stories,
    Favorites,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    NextPage,
    PrevPage,
    SwitchCategory(Category),
    ToggleFavorite,
    ShowFavorites,
    Back,
    RevealComments,
    LoadMoreComments,
    HideComments,
    ToggleCommentText,
    OpenUrl,
    OpenDiscussion,
    Refresh,
    AutoRefresh,
    ToggleHelp,
    Quit,
}

pub struct App {
    pub view: View,
    pub page_state: PageState,
    pub stories: Vec<Story>,
    pub favorites: FavoritesStore,
    pub favorite_stories: Vec<Story>,
    /// Reveal state per story card, reset on every page load.
    pub reveals: HashMap<u64, RevealState>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub load: LoadState,
    pub should_quit: bool,
    pub show_help: bool,
    pub client: HnClient,
    // Async task plumbing
    pub result_tx: mpsc::Sender<AsyncResult>,
    pub result_rx: mpsc::Receiver<AsyncResult>,
    pub refresh_tx: mpsc::Sender<()>,
    pub refresh_rx: mpsc::Receiver<()>,
    auto_refresh: Option<RefreshTimer>,
    pub generation: u64,
}

impl App {
    pub fn new(client: HnClient, favorites: FavoritesStore, category: Category, page: usize) -> Self {
        let (result_tx, result_rx) = mpsc::channel(10);
        let (refresh_tx, refresh_rx) = mpsc::channel(4);
        Self {
            view: View::default(),
            page_state: PageState::new(category, page),
            stories: Vec::new(),
            favorites,
            favorite_stories: Vec::new(),
            reveals: HashMap::new(),
            selected_index: 0,
            scroll_offset: 0,
            load: LoadState::default(),
            should_quit: false,
            show_help: false,
            client,
            result_tx,
            result_rx,
            refresh_tx,
            refresh_rx,
            auto_refresh: None,
            generation: 0,
        }
    }

    /// Initial load: fetch the starting page and arm the auto-refresh timer.
    pub fn mount(&mut self) {
        self.load_page(true);
        self.restart_timer();
    }

    pub fn handle_async_result(&mut self, result: AsyncResult) {
        match result {
            AsyncResult::Page { generation, result } => {
                if generation != self.generation {
                    debug!(generation, "discarding stale page result");
                    return;
                }
                self.load.set_loading(false);
                match result {
                    Ok(page) => {
                        self.stories = page.stories;
                        self.page_state.page = page.page;
                        self.page_state.total_pages = page.total_pages;
                        self.clamp_selection();
                    }
                    // The list keeps whatever it was showing; the periodic
                    // refresh will retry.
                    Err(e) => error!(error = %e, "page load failed"),
                }
            }
            AsyncResult::FavoriteStories { generation, stories } => {
                if generation != self.generation {
                    debug!(generation, "discarding stale favorites result");
                    return;
                }
                self.load.set_loading(false);
                self.favorite_stories = stories;
                self.clamp_selection();
            }
            AsyncResult::Comments {
                story_id,
                from,
                nodes,
            } => {
                if let Some(state) = self.reveals.get_mut(&story_id) {
                    state.absorb(from, nodes);
                }
            }
        }
    }

    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::SelectNext => self.select_next(),
            Message::SelectPrev => self.select_prev(),
            Message::SelectFirst => {
                self.selected_index = 0;
                self.scroll_offset = 0;
            }
            Message::SelectLast => self.select_last(),
            Message::NextPage => self.change_page(1),
            Message::PrevPage => self.change_page(-1),
            Message::SwitchCategory(category) => self.switch_category(category),
            Message::ToggleFavorite => self.toggle_favorite(),
            Message::ShowFavorites => self.show_favorites(),
            Message::Back => self.go_back(),
            Message::RevealComments => self.reveal_comments(),
            Message::LoadMoreComments => self.load_more_comments(),
            Message::HideComments => self.hide_comments(),
            Message::ToggleCommentText => self.toggle_comment_text(),
            Message::OpenUrl => self.open_url(),
            Message::OpenDiscussion => self.open_discussion(),
            Message::Refresh => self.manual_refresh(),
            Message::AutoRefresh => self.auto_refresh(),
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::Quit => self.should_quit = true,
        }
    }

    pub fn visible_stories(&self) -> &[Story] {
        match self.view {
            View::Stories => &self.stories,
            View::Favorites => &self.favorite_stories,
        }
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories().get(self.selected_index)
    }

    pub fn reveal_state(&self, story_id: u64) -> Option<&RevealState> {
        self.reveals.get(&story_id)
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_stories().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    fn select_next(&mut self) {
        let count = self.visible_stories().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn select_last(&mut self) {
        let count = self.visible_stories().len();
        if count > 0 {
            self.selected_index = count - 1;
        }
    }

    fn change_page(&mut self, direction: i64) {
        if self.view != View::Stories || self.load.loading {
            return;
        }
        let allowed = if direction > 0 {
            self.page_state.has_next()
        } else {
            self.page_state.has_prev()
        };
        if !allowed {
            return;
        }
        self.page_state.page = (self.page_state.page as i64 + direction) as usize;
        self.load_page(true);
        self.restart_timer();
    }

    fn switch_category(&mut self, category: Category) {
        if self.view == View::Stories && self.page_state.category == category {
            return;
        }
        self.view = View::Stories;
        self.page_state = PageState::new(category, 1);
        self.load_page(true);
        self.restart_timer();
    }

    /// Manual refresh: back to page 1 with a cleared list (stories view), or
    /// a re-resolve of the favorites set. Replaces the auto-refresh timer.
    fn manual_refresh(&mut self) {
        match self.view {
            View::Stories => {
                self.page_state.page = 1;
                self.load_page(true);
                self.restart_timer();
            }
            View::Favorites => self.spawn_favorites_fetch(),
        }
    }

    /// Periodic refresh re-fetches the current page in place. The list is
    /// not cleared, so a failure leaves the previous stories visible.
    fn auto_refresh(&mut self) {
        if self.view != View::Stories || self.load.loading {
            return;
        }
        self.generation += 1;
        self.load.set_loading(true);
        self.spawn_page_fetch();
    }

    fn load_page(&mut self, clear: bool) {
        self.generation += 1;
        self.load.set_loading(true);
        if clear {
            self.stories.clear();
            self.reveals.clear();
            self.selected_index = 0;
            self.scroll_offset = 0;
        }
        self.spawn_page_fetch();
    }

    fn show_favorites(&mut self) {
        if self.view == View::Favorites {
            return;
        }
        self.view = View::Favorites;
        self.cancel_timer();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.reveals.clear();
        self.spawn_favorites_fetch();
    }

    fn go_back(&mut self) {
        if self.view != View::Favorites {
            return;
        }
        self.view = View::Stories;
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.reveals.clear();
        self.load_page(false);
        self.restart_timer();
    }

    fn toggle_favorite(&mut self) {
        let Some(id) = self.selected_story().map(|s| s.id) else {
            return;
        };
        self.favorites.toggle(id);
        if self.view == View::Favorites {
            // The favorites list mirrors the set; unliking drops the card.
            self.favorite_stories.retain(|s| self.favorites.contains(s.id));
            self.clamp_selection();
        }
    }

    fn reveal_comments(&mut self) {
        let Some(story) = self.selected_story().cloned() else {
            return;
        };
        let state = self.reveals.entry(story.id).or_default();
        if state.is_revealed() {
            return;
        }
        let range = state.reveal(story.kids.len(), self.scroll_offset);
        if !range.is_empty() {
            let ids = story.kids[range.clone()].to_vec();
            self.spawn_comments_fetch(story.id, range.start, ids);
        }
    }

    fn load_more_comments(&mut self) {
        let Some(story) = self.selected_story().cloned() else {
            return;
        };
        let Some(state) = self.reveals.get_mut(&story.id) else {
            return;
        };
        if let Some(range) = state.load_more(story.kids.len()) {
            let ids = story.kids[range.clone()].to_vec();
            self.spawn_comments_fetch(story.id, range.start, ids);
        }
    }

    fn hide_comments(&mut self) {
        let Some(id) = self.selected_story().map(|s| s.id) else {
            return;
        };
        if let Some(state) = self.reveals.get_mut(&id)
            && let Some(anchor) = state.hide()
        {
            self.scroll_offset = anchor;
        }
    }

    fn toggle_comment_text(&mut self) {
        let Some(id) = self.selected_story().map(|s| s.id) else {
            return;
        };
        if let Some(state) = self.reveals.get_mut(&id) {
            state.toggle_text();
        }
    }

    fn open_url(&self) {
        if let Some(story) = self.selected_story() {
            let _ = open::that(story.content_url());
        }
    }

    fn open_discussion(&self) {
        if let Some(story) = self.selected_story() {
            let _ = open::that(story.hn_url());
        }
    }

    fn restart_timer(&mut self) {
        self.cancel_timer();
        self.auto_refresh = Some(RefreshTimer::start(
            self.refresh_tx.clone(),
            REFRESH_INTERVAL,
        ));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.auto_refresh.take() {
            timer.cancel();
        }
    }

    fn spawn_page_fetch(&self) {
        let client = self.client.clone();
        let tx = self.result_tx.clone();
        let generation = self.generation;
        let category = self.page_state.category;
        let page = self.page_state.page;

        tokio::spawn(async move {
            let result = client.fetch_page(category, page).await;
            let _ = tx.send(AsyncResult::Page { generation, result }).await;
        });
    }

    fn spawn_favorites_fetch(&mut self) {
        self.generation += 1;
        self.load.set_loading(true);
        let client = self.client.clone();
        let tx = self.result_tx.clone();
        let generation = self.generation;
        let ids = self.favorites.ids().to_vec();

        tokio::spawn(async move {
            let stories = client.fetch_stories_by_ids(&ids).await;
            let _ = tx
                .send(AsyncResult::FavoriteStories { generation, stories })
                .await;
        });
    }

    fn spawn_comments_fetch(&self, story_id: u64, from: usize, ids: Vec<u64>) {
        let client = self.client.clone();
        let tx = self.result_tx.clone();

        tokio::spawn(async move {
            let nodes = client.fetch_comment_nodes(&ids).await;
            let _ = tx
                .send(AsyncResult::Comments {
                    story_id,
                    from,
                    nodes,
                })
                .await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PAGE_SIZE;
    use crate::test_utils::{StoryBuilder, TestAppBuilder, sample_stories};

    #[test]
    fn test_new_app() {
        let app = TestAppBuilder::new().build();
        assert_eq!(app.view, View::Stories);
        assert_eq!(app.page_state.category, Category::Best);
        assert_eq!(app.page_state.page, 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_navigation() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();

        assert_eq!(app.selected_index, 0);
        app.update(Message::SelectNext);
        assert_eq!(app.selected_index, 1);
        app.update(Message::SelectLast);
        assert_eq!(app.selected_index, 4);
        app.update(Message::SelectNext); // Should not go past last
        assert_eq!(app.selected_index, 4);
        app.update(Message::SelectFirst);
        assert_eq!(app.selected_index, 0);
        app.update(Message::SelectPrev); // Should not go below 0
        assert_eq!(app.selected_index, 0);
    }

    #[tokio::test]
    async fn test_page_navigation_respects_bounds() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.page_state.total_pages = 3;

        app.update(Message::PrevPage); // already at page 1
        assert_eq!(app.page_state.page, 1);

        app.update(Message::NextPage);
        assert_eq!(app.page_state.page, 2);

        app.page_state.page = 3;
        app.load.set_loading(false);
        app.update(Message::NextPage); // at last page
        assert_eq!(app.page_state.page, 3);
    }

    #[tokio::test]
    async fn test_page_navigation_blocked_while_loading() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.page_state.total_pages = 3;
        app.load.set_loading(true);

        app.update(Message::NextPage);
        assert_eq!(app.page_state.page, 1);
    }

    #[tokio::test]
    async fn test_switch_category_resets_to_page_one() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.page_state.page = 2;
        app.page_state.total_pages = 3;

        app.update(Message::SwitchCategory(Category::Top));
        assert_eq!(app.page_state.category, Category::Top);
        assert_eq!(app.page_state.page, 1);
        assert!(app.stories.is_empty()); // cleared pending reload
    }

    #[test]
    fn test_stale_page_result_discarded() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.generation = 5;

        let stale = LoadedPage {
            stories: vec![StoryBuilder::new().id(999).build()],
            page: 2,
            total_pages: 9,
        };
        app.handle_async_result(AsyncResult::Page {
            generation: 4,
            result: Ok(stale),
        });

        assert_eq!(app.stories.len(), 5);
        assert_eq!(app.page_state.page, 1);
    }

    #[test]
    fn test_page_result_applies() {
        let mut app = TestAppBuilder::new().build();
        app.generation = 1;

        let stories: Vec<_> = (0..PAGE_SIZE as u64)
            .map(|i| StoryBuilder::new().id(i).build())
            .collect();
        app.handle_async_result(AsyncResult::Page {
            generation: 1,
            result: Ok(LoadedPage {
                stories,
                page: 2,
                total_pages: 3,
            }),
        });

        assert_eq!(app.stories.len(), PAGE_SIZE);
        assert_eq!(app.page_state.page, 2);
        assert_eq!(app.page_state.total_pages, 3);
        assert!(!app.load.loading);
    }

    #[test]
    fn test_failed_page_load_keeps_stale_stories() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.generation = 1;
        app.load.set_loading(true);

        app.handle_async_result(AsyncResult::Page {
            generation: 1,
            result: Err(ApiError::Network("connection failed".into())),
        });

        assert_eq!(app.stories.len(), 5);
        assert!(!app.load.loading);
    }

    #[test]
    fn test_toggle_favorite_roundtrip() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        let id = app.stories[0].id;

        app.update(Message::ToggleFavorite);
        assert!(app.favorites.contains(id));

        app.update(Message::ToggleFavorite);
        assert!(!app.favorites.contains(id));
    }

    #[test]
    fn test_unfavorite_in_favorites_view_drops_card() {
        let mut app = TestAppBuilder::new().build();
        let stories = sample_stories();
        for story in &stories {
            app.favorites.add(story.id);
        }
        app.view = View::Favorites;
        app.favorite_stories = stories;
        app.selected_index = 1;
        let dropped = app.favorite_stories[1].id;

        app.update(Message::ToggleFavorite);

        assert!(!app.favorites.contains(dropped));
        assert_eq!(app.favorite_stories.len(), 4);
        assert!(app.favorite_stories.iter().all(|s| s.id != dropped));
    }

    #[tokio::test]
    async fn test_reveal_load_more_hide_flow() {
        let story = StoryBuilder::new().id(7).kids(vec![1, 2, 3, 4, 5]).build();
        let mut app = TestAppBuilder::new().with_stories(vec![story]).build();
        app.scroll_offset = 12;

        app.update(Message::RevealComments);
        let rev = app.reveal_state(7).unwrap().revealed().unwrap();
        assert_eq!(rev.loaded_count, 2);
        assert_eq!(rev.scroll_anchor, 12);

        // Fetch lands
        app.handle_async_result(AsyncResult::Comments {
            story_id: 7,
            from: 0,
            nodes: vec![],
        });

        app.update(Message::LoadMoreComments);
        assert_eq!(app.reveal_state(7).unwrap().revealed().unwrap().loaded_count, 4);
        app.handle_async_result(AsyncResult::Comments {
            story_id: 7,
            from: 2,
            nodes: vec![],
        });

        app.update(Message::LoadMoreComments);
        assert_eq!(app.reveal_state(7).unwrap().revealed().unwrap().loaded_count, 5);

        app.scroll_offset = 40;
        app.update(Message::HideComments);
        assert!(!app.reveal_state(7).unwrap().is_revealed());
        assert_eq!(app.scroll_offset, 12); // restored to the reveal anchor
    }

    #[tokio::test]
    async fn test_reveal_twice_is_noop() {
        let story = StoryBuilder::new().id(7).kids(vec![1, 2, 3]).build();
        let mut app = TestAppBuilder::new().with_stories(vec![story]).build();

        app.update(Message::RevealComments);
        app.update(Message::RevealComments);
        let rev = app.reveal_state(7).unwrap().revealed().unwrap();
        assert_eq!(rev.loaded_count, 2);
    }

    #[test]
    fn test_comment_result_for_unknown_story_dropped() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.handle_async_result(AsyncResult::Comments {
            story_id: 999,
            from: 0,
            nodes: vec![],
        });
        assert!(app.reveal_state(999).is_none());
    }

    #[tokio::test]
    async fn test_show_favorites_and_back() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.selected_index = 3;

        app.update(Message::ShowFavorites);
        assert_eq!(app.view, View::Favorites);
        assert_eq!(app.selected_index, 0);

        app.update(Message::Back);
        assert_eq!(app.view, View::Stories);
    }

    #[tokio::test]
    async fn test_auto_refresh_ignored_in_favorites_view() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.update(Message::ShowFavorites);
        let generation = app.generation;

        app.update(Message::AutoRefresh);
        assert_eq!(app.generation, generation);
    }

    #[tokio::test]
    async fn test_manual_refresh_resets_to_page_one() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.page_state.page = 3;
        app.page_state.total_pages = 5;

        app.update(Message::Refresh);
        assert_eq!(app.page_state.page, 1);
        assert!(app.stories.is_empty());
    }
}
