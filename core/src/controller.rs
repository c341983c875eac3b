//! Keeps the local post list in step with the backend.
//!
//! # Design
//! Every network operation follows the same shape: build a request from the
//! current snapshot, await the `Transport`, parse, then dispatch exactly one
//! action into the reducer. Success dispatches the server's canonical record;
//! failure is logged, recorded as `last_failure`, and returned, while the
//! collection and drafts are left as they were.
//!
//! Operations take `&mut self`, so one controller never has two requests in
//! flight. A host that wants parallel requests must serialize them through
//! its own queue.

use tracing::{debug, warn};

use crate::client::PostClient;
use crate::error::ApiError;
use crate::state::{Action, DraftField, DraftScope, Failure, Operation, PostListState};
use crate::transport::Transport;
use crate::types::{Post, PostId};

pub struct PostListController<T> {
    client: PostClient,
    transport: T,
    state: PostListState,
}

impl<T: Transport> PostListController<T> {
    pub fn new(client: PostClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: PostListState::default(),
        }
    }

    pub fn state(&self) -> &PostListState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    /// Replace the local collection with the server's.
    pub async fn load_all(&mut self) -> Result<(), ApiError> {
        let result = async {
            let response = self.transport.execute(self.client.build_list_posts()).await?;
            self.client.parse_list_posts(response)
        }
        .await;
        match result {
            Ok(posts) => {
                debug!(count = posts.len(), "Loaded posts");
                self.dispatch(Action::Loaded(posts));
                Ok(())
            }
            Err(e) => Err(self.report(Operation::Load, e)),
        }
    }

    /// Set one field of the new-post or edit draft. No validation.
    pub fn update_draft_field(&mut self, scope: DraftScope, field: DraftField, value: impl Into<String>) {
        self.dispatch(Action::DraftFieldChanged {
            scope,
            field,
            value: value.into(),
        });
    }

    /// Create a post from the new-post draft and return the server's record.
    pub async fn submit_new_post(&mut self) -> Result<Post, ApiError> {
        let draft = self.state.new_draft().clone();
        let result = async {
            let request = self.client.build_create_post(&draft)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_create_post(response)
        }
        .await;
        match result {
            Ok(post) => {
                debug!(id = %post.id, "Created post");
                self.dispatch(Action::Created(post.clone()));
                Ok(post)
            }
            Err(e) => Err(self.report(Operation::Create, e)),
        }
    }

    /// Open edit mode on a copy of `post`.
    pub fn begin_edit(&mut self, post: &Post) {
        self.dispatch(Action::EditStarted(post.clone()));
    }

    /// Send the edit draft. Does nothing when no edit is open.
    ///
    /// On failure edit mode stays open so the user can retry or cancel.
    pub async fn submit_edited_post(&mut self) -> Result<(), ApiError> {
        let Some(draft) = self.state.edit_draft() else {
            debug!("No edit in progress, nothing to submit");
            return Ok(());
        };
        let edited = draft.post().clone();
        let result = async {
            let request = self.client.build_update_post(&edited)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_update_post(response)
        }
        .await;
        match result {
            Ok(mut post) => {
                // The request targeted `edited.id`; reconcile against that
                // entry even if the server echoes a different key.
                if post.id != edited.id {
                    warn!(sent = %edited.id, received = %post.id, "Update response carried a different id");
                    post.id = edited.id;
                }
                debug!(id = %post.id, "Updated post");
                self.dispatch(Action::Updated(post));
                Ok(())
            }
            Err(e) => Err(self.report(Operation::Update, e)),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::EditCancelled);
    }

    /// Delete `id` remotely, then drop it locally.
    pub async fn delete_post(&mut self, id: &PostId) -> Result<(), ApiError> {
        let result = async {
            let response = self.transport.execute(self.client.build_delete_post(id)).await?;
            self.client.parse_delete_post(response)
        }
        .await;
        match result {
            Ok(()) => {
                debug!(id = %id, "Deleted post");
                self.dispatch(Action::Deleted(id.clone()));
                Ok(())
            }
            Err(e) => Err(self.report(Operation::Delete, e)),
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    fn report(&mut self, operation: Operation, error: ApiError) -> ApiError {
        warn!(%operation, error = %error, "Request failed");
        self.dispatch(Action::Failed(Failure {
            operation,
            message: error.to_string(),
        }));
        error
    }
}
