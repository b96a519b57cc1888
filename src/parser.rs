use crate::block::{Block, ListKind};
use crate::inline;

const MAX_HEADING_LEVEL: usize = 6;

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    parse_lines(markdown.lines())
}

/// Classify each line in order. Only the open list carries over between lines.
pub fn parse_lines<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut blocks = Vec::new();
    let mut state = ListState::default();

    for line in lines {
        process_line(strip_line_ending(line.as_ref()), &mut state, &mut blocks);
    }
    state.close(&mut blocks);

    blocks
}

/// At most one list is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ListState {
    #[default]
    None,
    Open(ListKind),
}

impl ListState {
    /// Make sure a list of `kind` is open, closing a list of the other kind first.
    fn enter(&mut self, kind: ListKind, blocks: &mut Vec<Block>) {
        if *self == ListState::Open(kind) {
            return;
        }
        self.close(blocks);
        log::trace!("open <{}>", kind.tag());
        blocks.push(Block::ListStart(kind));
        *self = ListState::Open(kind);
    }

    fn close(&mut self, blocks: &mut Vec<Block>) {
        if let ListState::Open(kind) = std::mem::take(self) {
            log::trace!("close <{}>", kind.tag());
            blocks.push(Block::ListEnd(kind));
        }
    }
}

fn process_line(line: &str, state: &mut ListState, blocks: &mut Vec<Block>) {
    if let Some((level, text)) = heading(line) {
        state.close(blocks);
        blocks.push(Block::Heading {
            level,
            text: text.to_string(),
        });
        return;
    }

    if let Some((kind, item)) = list_item(line) {
        state.enter(kind, blocks);
        blocks.push(Block::ListItem(item.to_string()));
        return;
    }

    state.close(blocks);

    if line.trim_end().is_empty() {
        blocks.push(Block::LineBreak);
    } else {
        blocks.push(Block::Paragraph(inline::render(line)));
    }
}

/// `#`..`######`, one whitespace separator, then the (possibly empty)
/// heading text. Anything after the separator is kept as written.
fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&level) {
        return None;
    }

    let mut rest = line[level..].chars();
    match rest.next() {
        Some(sep) if sep.is_whitespace() => Some((level as u8, rest.as_str())),
        _ => None,
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(item) = line.strip_prefix("- ") {
        Some((ListKind::Unordered, item))
    } else {
        line.strip_prefix("* ").map(|item| (ListKind::Ordered, item))
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
