//! View state of the post list and the reducer that evolves it.
//!
//! # Design
//! `PostListState` is a plain snapshot. The only way to change it is
//! `reduce(state, action)`, which consumes the old snapshot and returns the
//! next one. Actions describing server results (`Loaded`, `Created`,
//! `Updated`, `Deleted`) are only dispatched after the request succeeded, so
//! the collection never holds unconfirmed data.
//!
//! The two drafts are independent: the new-post draft always exists and keeps
//! its text while an edit draft is open.

use std::collections::HashSet;
use std::fmt;

use crate::types::{CreatePost, Post, PostId};

/// Which draft an input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftScope {
    New,
    Edit,
}

/// Editable post field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
}

impl DraftField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DraftField::Title),
            "content" => Some(DraftField::Content),
            _ => None,
        }
    }
}

/// An open edit: a private copy of a post, detached from the list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    post: Post,
}

impl EditDraft {
    pub fn id(&self) -> &PostId {
        &self.post.id
    }

    pub fn post(&self) -> &Post {
        &self.post
    }
}

/// The remote operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "fetching posts",
            Operation::Create => "adding post",
            Operation::Update => "updating post",
            Operation::Delete => "deleting post",
        })
    }
}

/// A request that failed. All failure causes collapse into this one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub operation: Operation,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.operation, self.message)
    }
}

/// Everything that can happen to the post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Loaded(Vec<Post>),
    DraftFieldChanged {
        scope: DraftScope,
        field: DraftField,
        value: String,
    },
    Created(Post),
    EditStarted(Post),
    Updated(Post),
    EditCancelled,
    Deleted(PostId),
    Failed(Failure),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListState {
    posts: Vec<Post>,
    new_draft: CreatePost,
    edit_draft: Option<EditDraft>,
    last_failure: Option<Failure>,
}

impl PostListState {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    pub fn new_draft(&self) -> &CreatePost {
        &self.new_draft
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit_draft.as_ref()
    }

    /// Whether the edit dialog is open.
    pub fn is_editing(&self) -> bool {
        self.edit_draft.is_some()
    }

    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        reduce(self, action)
    }
}

/// Compute the next state. Pure: no I/O, no logging.
pub fn reduce(mut state: PostListState, action: Action) -> PostListState {
    match action {
        Action::Loaded(posts) => {
            state.posts = dedup_by_id(posts);
            state.last_failure = None;
        }
        Action::DraftFieldChanged {
            scope,
            field,
            value,
        } => match scope {
            DraftScope::New => {
                let draft = &mut state.new_draft;
                set_field(&mut draft.title, &mut draft.content, field, value);
            }
            DraftScope::Edit => {
                if let Some(draft) = state.edit_draft.as_mut() {
                    set_field(&mut draft.post.title, &mut draft.post.content, field, value);
                }
            }
        },
        Action::Created(post) => {
            // A server repeating an id replaces the stale entry rather than
            // breaking id uniqueness.
            match state.posts.iter().position(|p| p.id == post.id) {
                Some(index) => state.posts[index] = post,
                None => state.posts.push(post),
            }
            state.new_draft = CreatePost::default();
            state.last_failure = None;
        }
        Action::EditStarted(post) => {
            state.edit_draft = Some(EditDraft { post });
        }
        Action::Updated(post) => {
            if let Some(existing) = state.posts.iter_mut().find(|p| p.id == post.id) {
                *existing = post;
            }
            state.edit_draft = None;
            state.last_failure = None;
        }
        Action::EditCancelled => {
            state.edit_draft = None;
        }
        Action::Deleted(id) => {
            state.posts.retain(|p| p.id != id);
            state.last_failure = None;
        }
        Action::Failed(failure) => {
            state.last_failure = Some(failure);
        }
    }
    state
}

fn set_field(title: &mut String, content: &mut String, field: DraftField, value: String) {
    match field {
        DraftField::Title => *title = value,
        DraftField::Content => *content = value,
    }
}

/// Keep the first occurrence of each id, preserving server order.
fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    posts
        .into_iter()
        .filter(|post| seen.insert(post.id.clone()))
        .collect()
}
