use serde::Deserialize;

/// Raw item record as returned by `item/{id}.json`.
///
/// Every field except `id` can be missing or null upstream, so the wire
/// shape is all-optional and validation happens in [`Story::from_item`] and
/// [`Comment::from_item`].
#[derive(Debug, Clone, Deserialize)]
pub struct HnItem {
    pub id: u64,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    pub item_type: Option<String>,
    pub by: Option<String>,
    pub time: Option<u64>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub score: Option<u32>,
    pub title: Option<String>,
    #[serde(default)]
    pub kids: Vec<u64>,
    pub deleted: Option<bool>,
    pub dead: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub score: u32,
    pub by: String,
    pub time: u64,
    pub kids: Vec<u64>,
}

impl Story {
    /// Items without a title (comments, deleted entries) are not stories.
    pub fn from_item(item: HnItem) -> Option<Self> {
        if item.deleted.unwrap_or(false) || item.dead.unwrap_or(false) {
            return None;
        }
        Some(Story {
            id: item.id,
            title: item.title?,
            url: item.url,
            score: item.score.unwrap_or(0),
            by: item.by.unwrap_or_else(|| "[deleted]".to_string()),
            time: item.time.unwrap_or(0),
            kids: item.kids,
        })
    }

    pub fn domain(&self) -> &str {
        self.url
            .as_ref()
            .and_then(|u| {
                u.split("://")
                    .nth(1)
                    .and_then(|s| s.split('/').next())
                    .map(|s| s.strip_prefix("www.").unwrap_or(s))
            })
            .unwrap_or("self")
    }

    /// URL to the HN discussion page for this story.
    pub fn hn_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// URL to the story content (article URL, or HN page for self-posts).
    pub fn content_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.hn_url())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub by: String,
    pub kids: Vec<u64>,
}

impl Comment {
    pub fn from_item(item: HnItem) -> Option<Self> {
        if item.deleted.unwrap_or(false) || item.dead.unwrap_or(false) {
            return None;
        }

        Some(Comment {
            id: item.id,
            text: html_escape::decode_html_entities(&item.text?).to_string(),
            by: item.by.unwrap_or_else(|| "[deleted]".to_string()),
            kids: item.kids,
        })
    }
}

/// A resolved comment with its fully resolved reply subtree.
///
/// `children` holds the replies in the order the parent's `kids` list gave
/// them; replies past the loader's depth cap are left unfetched, in which
/// case `comment.kids` is non-empty while `children` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including this one.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn total_count(&self) -> usize {
        1 + self.children.iter().map(CommentNode::total_count).sum::<usize>()
    }
}

/// The three story feeds the client can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Best,
    New,
    Top,
}

impl Category {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Best => "beststories",
            Category::New => "newstories",
            Category::Top => "topstories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Best => "Best",
            Category::New => "New",
            Category::Top => "Top",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Best, Category::New, Category::Top]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" | "beststories" => Ok(Category::Best),
            "new" | "newstories" => Ok(Category::New),
            "top" | "topstories" => Ok(Category::Top),
            _ => Err(format!("Unknown category: {s}. Use 'best', 'new' or 'top'")),
        }
    }
}
