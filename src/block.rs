/// The two list flavours. `- ` opens an unordered list, `* ` an ordered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// HTML element name for this list.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// One output fragment, in document order. Each renders to a single HTML line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    ListStart(ListKind),
    ListItem(String),
    ListEnd(ListKind),
    LineBreak,
    /// Paragraph text with inline substitutions already applied.
    Paragraph(String),
}
