use crate::block::Block;

/// Convert blocks to HTML, one line per block
pub fn blocks_to_html(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(block_to_html).collect()
}

fn block_to_html(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::ListStart(kind) => format!("<{}>", kind.tag()),
        Block::ListItem(text) => format!("<li>{text}</li>"),
        Block::ListEnd(kind) => format!("</{}>", kind.tag()),
        Block::LineBreak => "<br/>".to_string(),
        Block::Paragraph(text) => format!("<p>{text}</p>"),
    }
}
