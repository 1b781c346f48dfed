//! Plain terminal rendering of the deepest pane

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use super::event_loop::Popup;
use crate::handler::Coordinates;
use crate::tree::{BookmarkInfo, BookmarkKind};

/// Rows above the first list item
const HEADER_ROWS: u16 = 2;

fn item_label(item: &BookmarkInfo) -> String {
    match item.kind {
        BookmarkKind::Folder => format!("{}/", item.title),
        BookmarkKind::Separator => "────────".to_string(),
        BookmarkKind::Bookmark if item.title.is_empty() => item.url.clone(),
        BookmarkKind::Bookmark => item.title.clone(),
    }
}

/// Screen row of item `index`, or `None` when it falls on or below the
/// status row
fn item_row(index: usize, height: u16) -> Option<u16> {
    let row = u16::try_from(index).ok()?.checked_add(HEADER_ROWS)?;
    (row < height.saturating_sub(1)).then_some(row)
}

/// Breadcrumb of every open pane
pub fn breadcrumb(popup: &Popup) -> String {
    popup
        .panes()
        .trees()
        .iter()
        .map(|tree| tree.parent.title.as_str())
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Draw one frame and record where the highlighted item is
pub fn render_frame<W: Write>(out: &mut W, popup: &mut Popup, status: &str) -> io::Result<()> {
    let (_, height) = crossterm::terminal::size().unwrap_or((80, 24));
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(breadcrumb(popup)))?;

    let list_index = popup.panes().len().saturating_sub(1);
    let highlighted = popup.session().lists().highlighted(list_index);
    let mut highlight_row = None;

    if let Some(tree) = popup.panes().last() {
        for (index, item) in tree.children.iter().enumerate() {
            let Some(row) = item_row(index, height) else {
                break;
            };
            let selected = highlighted == Some(index);
            queue!(out, MoveTo(0, row))?;
            if selected {
                highlight_row = Some(row);
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(format!("> {}", item_label(item))),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(out, Print(format!("  {}", item_label(item))))?;
            }
        }
        if tree.children.is_empty() {
            queue!(out, MoveTo(0, HEADER_ROWS), Print("  (empty folder)"))?;
        }
    }

    if let Some(row) = highlight_row {
        popup
            .session_mut()
            .set_coordinates(Coordinates::new(2, i32::from(row)));
    }

    queue!(out, MoveTo(0, height.saturating_sub(1)), Print(status))?;
    out.flush()
}
