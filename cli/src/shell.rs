//! Interactive session over a `PostListController`.
//!
//! Field input goes to the edit draft while an edit is open and to the
//! new-post draft otherwise. A failed request prints the recorded failure and
//! the session continues.

use std::io::Write;

use anyhow::Result;
use blog_core::{ApiError, DraftField, DraftScope, PostId, PostListController, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

const HELP: &str = "\
commands:
  list                 show posts
  reload               fetch posts from the server again
  title <text>         set the title of the current draft
  content <text>       set the content of the current draft (\\n for newline)
  add                  publish the new-post draft
  edit <id>            start editing a post
  update               save the open edit
  cancel               close the open edit without saving
  delete <id>          delete a post
  draft                show both drafts
  help                 show this text
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    Reload,
    SetField(DraftField, String),
    Add,
    Edit(PostId),
    Update,
    Cancel,
    Delete(PostId),
    Draft,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_end_matches(['\r', '\n'])),
        None => (line.trim_end(), ""),
    };

    let command = match word {
        "" => ShellCommand::Empty,
        "list" | "ls" => ShellCommand::List,
        "reload" => ShellCommand::Reload,
        "title" | "content" => {
            let field = DraftField::parse(word).ok_or_else(|| format!("unknown field {word}"))?;
            ShellCommand::SetField(field, unescape(rest))
        }
        "add" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(required_id(word, rest)?),
        "update" | "save" => ShellCommand::Update,
        "cancel" => ShellCommand::Cancel,
        "delete" | "rm" => ShellCommand::Delete(required_id(word, rest)?),
        "draft" => ShellCommand::Draft,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command {other:?}; type help")),
    };
    Ok(command)
}

fn required_id(word: &str, rest: &str) -> Result<PostId, String> {
    match rest.trim() {
        "" => Err(format!("usage: {word} <id>")),
        id => Ok(PostId::new(id)),
    }
}

/// `\n` becomes a newline and `\\` a backslash; anything else is literal.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn prompt<T: Transport>(controller: &PostListController<T>) -> String {
    match controller.state().edit_draft() {
        Some(edit) => format!("edit {}> ", edit.id()),
        None => "> ".to_string(),
    }
}

/// Print the recorded failure, if the request failed; otherwise hand back
/// the success value.
fn report<T: Transport, W: Write, V>(
    out: &mut W,
    controller: &PostListController<T>,
    result: Result<V, ApiError>,
) -> Result<Option<V>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            if let Some(failure) = controller.state().last_failure() {
                writeln!(out, "{failure}")?;
            }
            Ok(None)
        }
    }
}

pub async fn run<T, R, W>(controller: &mut PostListController<T>, input: R, out: &mut W) -> Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "My Blog")?;
    let loaded = controller.load_all().await;
    if report(out, controller, loaded)?.is_some() {
        write!(out, "{}", render::post_list(controller.posts()))?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{}", prompt(controller))?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::List => write!(out, "{}", render::post_list(controller.posts()))?,
            ShellCommand::Reload => {
                let result = controller.load_all().await;
                if report(out, controller, result)?.is_some() {
                    write!(out, "{}", render::post_list(controller.posts()))?;
                }
            }
            ShellCommand::SetField(field, value) => {
                let scope = if controller.state().is_editing() {
                    DraftScope::Edit
                } else {
                    DraftScope::New
                };
                controller.update_draft_field(scope, field, value);
            }
            ShellCommand::Add => {
                let result = controller.submit_new_post().await;
                if let Some(post) = report(out, controller, result)? {
                    write!(out, "added {}", render::post(&post))?;
                }
            }
            ShellCommand::Edit(id) => match controller.state().find(&id).cloned() {
                Some(post) => {
                    controller.begin_edit(&post);
                    write!(out, "{}", render::drafts(controller.state()))?;
                }
                None => writeln!(out, "no post with id {id}")?,
            },
            ShellCommand::Update => {
                let Some(id) = controller.state().edit_draft().map(|edit| edit.id().clone()) else {
                    writeln!(out, "not editing; use edit <id> first")?;
                    continue;
                };
                let result = controller.submit_edited_post().await;
                if report(out, controller, result)?.is_some() {
                    if let Some(post) = controller.state().find(&id) {
                        write!(out, "updated {}", render::post(post))?;
                    }
                }
            }
            ShellCommand::Cancel => controller.cancel_edit(),
            ShellCommand::Delete(id) => {
                let result = controller.delete_post(&id).await;
                if report(out, controller, result)?.is_some() {
                    writeln!(out, "deleted {id}")?;
                }
            }
            ShellCommand::Draft => write!(out, "{}", render::drafts(controller.state()))?,
            ShellCommand::Help => write!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}
