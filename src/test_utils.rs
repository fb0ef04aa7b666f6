//! Test data builders for app and view testing.

use crate::api::{Category, Comment, CommentNode, HnClient, Story};
use crate::app::App;
use crate::favorites::FavoritesStore;

#[allow(dead_code)]
pub struct StoryBuilder {
    id: u64,
    title: String,
    url: Option<String>,
    score: u32,
    by: String,
    time: u64,
    kids: Vec<u64>,
}

impl Default for StoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StoryBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Story".to_string(),
            url: Some("https://example.com".to_string()),
            score: 100,
            by: "testuser".to_string(),
            time: 1700000000,
            kids: vec![],
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn no_url(mut self) -> Self {
        self.url = None;
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.by = author.to_string();
        self
    }

    pub fn time(mut self, time: u64) -> Self {
        self.time = time;
        self
    }

    pub fn kids(mut self, kids: Vec<u64>) -> Self {
        self.kids = kids;
        self
    }

    pub fn build(self) -> Story {
        Story {
            id: self.id,
            title: self.title,
            url: self.url,
            score: self.score,
            by: self.by,
            time: self.time,
            kids: self.kids,
        }
    }
}

pub struct CommentBuilder {
    id: u64,
    text: String,
    by: String,
    kids: Vec<u64>,
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            text: "Test comment".to_string(),
            by: "commenter".to_string(),
            kids: vec![],
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.by = author.to_string();
        self
    }

    pub fn kids(mut self, kids: Vec<u64>) -> Self {
        self.kids = kids;
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            text: self.text,
            by: self.by,
            kids: self.kids,
        }
    }

    pub fn node(self) -> CommentNode {
        CommentNode {
            comment: self.build(),
            children: vec![],
        }
    }

    pub fn node_with_children(self, children: Vec<CommentNode>) -> CommentNode {
        CommentNode {
            comment: self.build(),
            children,
        }
    }
}

#[allow(dead_code)]
pub struct TestAppBuilder {
    category: Category,
    page: usize,
    stories: Vec<Story>,
    selected_index: usize,
    scroll_offset: usize,
    loading: bool,
    favorite_ids: Vec<u64>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            category: Category::Best,
            page: 1,
            stories: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            loading: false,
            favorite_ids: Vec::new(),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn with_favorites(mut self, ids: Vec<u64>) -> Self {
        self.favorite_ids = ids;
        self
    }

    pub fn build(self) -> App {
        let mut favorites = FavoritesStore::ephemeral();
        // FavoritesStore::add prepends, so reverse to preserve given order.
        for id in self.favorite_ids.into_iter().rev() {
            favorites.add(id);
        }

        let mut app = App::new(HnClient::new(), favorites, self.category, self.page);
        app.stories = self.stories;
        app.selected_index = self.selected_index;
        app.scroll_offset = self.scroll_offset;
        if self.loading {
            app.load.set_loading(true);
        }
        app
    }
}

pub fn sample_stories() -> Vec<Story> {
    vec![
        StoryBuilder::new()
            .id(1)
            .title("Show HN: I built a terminal reader for Hacker News")
            .url("https://github.com/user/newsdeck")
            .score(142)
            .author("dang")
            .kids(vec![100, 104])
            .time(1700000000)
            .build(),
        StoryBuilder::new()
            .id(2)
            .title("Why Rust is the Future of Systems Programming")
            .url("https://example.com/rust-future")
            .score(89)
            .author("pg")
            .time(1699990000)
            .build(),
        StoryBuilder::new()
            .id(3)
            .title("Ask HN: What are you working on?")
            .no_url()
            .score(56)
            .author("sama")
            .kids(vec![110, 111, 112])
            .time(1699980000)
            .build(),
        StoryBuilder::new()
            .id(4)
            .title("The unreasonable effectiveness of simple HTML")
            .url("https://blog.example.com/simple-html")
            .score(234)
            .author("tptacek")
            .time(1699970000)
            .build(),
        StoryBuilder::new()
            .id(5)
            .title("A Deep Dive into Linux Kernel Networking")
            .url("https://lwn.net/kernel-networking")
            .score(167)
            .author("patio11")
            .time(1699960000)
            .build(),
    ]
}

#[allow(dead_code)]
pub fn sample_comment_nodes() -> Vec<CommentNode> {
    vec![
        CommentBuilder::new()
            .id(100)
            .text("This is a great project! I love the vim keybindings.")
            .author("commenter1")
            .kids(vec![101])
            .node_with_children(vec![
                CommentBuilder::new()
                    .id(101)
                    .text("Agreed, the bindings are really nice.")
                    .author("commenter2")
                    .node(),
            ]),
        CommentBuilder::new()
            .id(104)
            .text("Nice work! Any plans for search functionality?")
            .author("searcher")
            .node(),
    ]
}
