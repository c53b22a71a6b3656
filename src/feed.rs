//! Posts, comments and views of a small user community, with keyword and
//! attribute indexes for selecting posts.

use ahash::{HashMap, HashMapExt, HashSet};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub type PostId = usize;

/// Lowercased word -> posts containing it, each post listed once per word.
pub type KeywordIndex = HashMap<String, Vec<PostId>>;

/// Attribute -> value -> users holding that value, in registration order.
pub type AttributeIndex = HashMap<String, HashMap<String, Vec<String>>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub comments: Vec<Comment>,
    /// Users who viewed the post, each listed once.
    pub viewers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub attributes: HashMap<String, String>,
    pub uploads: Vec<PostId>,
    /// Every view, repeated views included.
    pub seen: Vec<PostId>,
    pub comments: Vec<Comment>,
    /// Other user -> kind of connection, e.g. "coworker".
    pub connections: HashMap<String, String>,
}

/// Selects posts by words in their content and by attributes of the users
/// who uploaded them. An empty criterion does not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub attributes: Vec<(String, String)>,
}

impl PostFilter {
    pub fn new() -> PostFilter {
        PostFilter::default()
    }

    pub fn include(mut self, word: &str) -> PostFilter {
        self.include.push(word.to_string());
        self
    }

    pub fn exclude(mut self, word: &str) -> PostFilter {
        self.exclude.push(word.to_string());
        self
    }

    pub fn attribute(mut self, attribute: &str, value: &str) -> PostFilter {
        self.attributes
            .push((attribute.to_string(), value.to_string()));
        self
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Feed {
    users: Vec<User>,
    index: HashMap<String, usize>,
    posts: Vec<Post>,
}

impl Feed {
    pub fn new() -> Feed {
        Feed {
            users: Vec::new(),
            index: HashMap::new(),
            posts: Vec::new(),
        }
    }

    pub fn add_user<'a>(
        &mut self,
        username: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<()> {
        if self.index.contains_key(username) {
            return Err(Error::DuplicateUser(username.to_string()));
        }

        self.index.insert(username.to_string(), self.users.len());
        self.users.push(User {
            username: username.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(attribute, value)| (attribute.to_string(), value.to_string()))
                .collect(),
            uploads: Vec::new(),
            seen: Vec::new(),
            comments: Vec::new(),
            connections: HashMap::new(),
        });
        Ok(())
    }

    /// Records that `user` knows `other` as `kind`. Connections are one-way
    /// and a later call replaces the kind.
    pub fn connect(&mut self, user: &str, other: &str, kind: &str) -> Result<()> {
        self.user(other)?;
        self.user_mut(user)?
            .connections
            .insert(other.to_string(), kind.to_string());
        Ok(())
    }

    /// Writes a post authored by `user`. It is not listed as an upload of
    /// anyone until [`Feed::upload`] is called.
    pub fn create_post(&mut self, user: &str, content: &str) -> Result<PostId> {
        self.user(user)?;
        self.posts.push(Post {
            content: content.to_string(),
            user: user.to_string(),
            timestamp: Utc::now(),
            comments: Vec::new(),
            viewers: Vec::new(),
        });
        Ok(self.posts.len() - 1)
    }

    /// Lists `post` among the uploads of `user`, who need not be its author.
    pub fn upload(&mut self, user: &str, post: PostId) -> Result<()> {
        self.post(post)?;
        self.user_mut(user)?.uploads.push(post);
        Ok(())
    }

    pub fn view(&mut self, user: &str, post: PostId) -> Result<()> {
        self.post(post)?;
        self.user_mut(user)?.seen.push(post);

        let viewers = &mut self.posts[post].viewers;
        if !viewers.iter().any(|viewer| viewer == user) {
            viewers.push(user.to_string());
        }
        Ok(())
    }

    pub fn comment(&mut self, user: &str, post: PostId, content: &str) -> Result<()> {
        self.post(post)?;
        let comment = Comment {
            content: content.to_string(),
            user: user.to_string(),
            timestamp: Utc::now(),
        };
        self.user_mut(user)?.comments.push(comment.clone());
        self.posts[post].comments.push(comment);
        Ok(())
    }

    pub fn user(&self, username: &str) -> Result<&User> {
        self.index
            .get(username)
            .map(|&index| &self.users[index])
            .ok_or_else(|| Error::UnknownUser(username.to_string()))
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        match self.index.get(username) {
            Some(&index) => Ok(&mut self.users[index]),
            None => Err(Error::UnknownUser(username.to_string())),
        }
    }

    pub fn post(&self, post: PostId) -> Result<&Post> {
        self.posts.get(post).ok_or(Error::UnknownPost(post))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Splits every post at whitespace. Punctuation stays attached to its
    /// word, so "Pizza," and "pizza" are different keywords.
    pub fn keyword_index(&self) -> KeywordIndex {
        let mut keywords = KeywordIndex::new();
        for (id, post) in self.posts.iter().enumerate() {
            for word in post
                .content
                .split_whitespace()
                .map(str::to_lowercase)
                .unique()
            {
                keywords.entry(word).or_default().push(id);
            }
        }
        keywords
    }

    pub fn attribute_index(&self) -> AttributeIndex {
        let mut attributes = AttributeIndex::new();
        for user in &self.users {
            for (attribute, value) in &user.attributes {
                attributes
                    .entry(attribute.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_default()
                    .push(user.username.clone());
            }
        }
        attributes
    }

    /// Ids of the posts passing `filter`, in creation order.
    ///
    /// With attributes, only posts uploaded by a user holding every given
    /// attribute value are kept. With include words, a post must contain at
    /// least one of them. A post containing any exclude word is dropped.
    /// Words are matched case-insensitively against [`Feed::keyword_index`].
    pub fn filter_posts(&self, filter: &PostFilter) -> Vec<PostId> {
        let keywords = self.keyword_index();
        let mut selected: HashSet<PostId> = (0..self.posts.len()).collect();

        if !filter.attributes.is_empty() {
            let attributes = self.attribute_index();
            let mut users: HashSet<&str> = self
                .users
                .iter()
                .map(|user| user.username.as_str())
                .collect();
            for (attribute, value) in &filter.attributes {
                let holders: HashSet<&str> = attributes
                    .get(attribute)
                    .and_then(|values| values.get(value))
                    .into_iter()
                    .flatten()
                    .map(String::as_str)
                    .collect();
                users.retain(|user| holders.contains(user));
            }

            let uploaded: HashSet<PostId> = users
                .iter()
                .filter_map(|&user| self.user(user).ok())
                .flat_map(|user| user.uploads.iter().copied())
                .collect();
            selected.retain(|post| uploaded.contains(post));
        }

        let posts_with = |words: &[String]| -> HashSet<PostId> {
            words
                .iter()
                .filter_map(|word| keywords.get(&word.to_lowercase()))
                .flatten()
                .copied()
                .collect()
        };

        if !filter.include.is_empty() {
            let included = posts_with(&filter.include);
            selected.retain(|post| included.contains(post));
        }

        if !filter.exclude.is_empty() {
            let excluded = posts_with(&filter.exclude);
            selected.retain(|post| !excluded.contains(post));
        }

        let selected: Vec<PostId> = selected.into_iter().sorted().collect();
        debug!(
            posts = self.posts.len(),
            selected = selected.len(),
            "posts filtered"
        );
        selected
    }

    /// Contents of the posts passing `filter`, joined by single spaces. This
    /// is the raw text a word cloud would be drawn from.
    pub fn filtered_text(&self, filter: &PostFilter) -> String {
        self.filter_posts(filter)
            .into_iter()
            .map(|post| self.posts[post].content.as_str())
            .join(" ")
    }
}
