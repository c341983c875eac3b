//! Plain-text rendering of posts and drafts.

use std::fmt::Write;

use blog_core::{Post, PostListState};

pub fn post(post: &Post) -> String {
    let mut out = format!("[{}] {}\n", post.id, post.title);
    for line in post.content.lines() {
        let _ = writeln!(out, "    {line}");
    }
    out
}

pub fn post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts yet.\n".to_string();
    }
    posts.iter().map(post).collect::<Vec<_>>().join("\n")
}

pub fn drafts(state: &PostListState) -> String {
    let new = state.new_draft();
    let mut out = format!("new post: title={:?} content={:?}\n", new.title, new.content);
    match state.edit_draft() {
        Some(edit) => {
            let post = edit.post();
            let _ = writeln!(
                out,
                "editing {}: title={:?} content={:?}",
                post.id, post.title, post.content
            );
        }
        None => out.push_str("not editing\n"),
    }
    out
}
