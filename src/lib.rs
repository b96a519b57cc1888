mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;

pub use block::{Block, ListKind};
pub use config::{Config, LogConfig};
pub use error::{Error, Result};

use std::fs;
use std::path::Path;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Parse already-split lines. Trailing `\n` or `\r\n` on each line is ignored.
pub fn parse_lines<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parser::parse_lines(lines)
}

/// Convert markdown lines to HTML lines.
///
/// Every input line becomes zero or more output lines; list open and close
/// tags get lines of their own. No I/O, and no state survives the call.
pub fn transform<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    html::blocks_to_html(&parse_lines(lines))
}

/// Convert markdown to an HTML document, lines joined by `\n` with no
/// trailing newline.
pub fn markdown_to_html(markdown: &str) -> String {
    transform(markdown.lines()).join("\n")
}

/// Apply only the inline substitutions used for paragraph text.
pub fn render_inline(text: &str) -> String {
    inline::render(text)
}

/// Convert the markdown file at `input` and write the HTML to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    if !input.is_file() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }

    let markdown = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::debug!("read {} ({} bytes)", input.display(), markdown.len());

    let lines = transform(markdown.lines());
    log::debug!("{} html lines", lines.len());

    fs::write(output, lines.join("\n")).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!("created {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_returns_blocks() {
        assert_eq!(
            parse("## Sub\n* x"),
            vec![
                Block::Heading {
                    level: 2,
                    text: "Sub".to_string(),
                },
                Block::ListStart(ListKind::Ordered),
                Block::ListItem("x".to_string()),
                Block::ListEnd(ListKind::Ordered),
            ]
        );
    }

    #[test]
    fn render_inline_runs_all_passes() {
        assert_eq!(
            render_inline("**b** __e__ ((cab)) [[abc]]"),
            "<b>b</b> <em>e</em> ab 900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(render_inline("no markup"), "no markup");
    }

    #[test]
    fn convert_file_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "# Hi\n- a\n").unwrap();

        convert_file(&input, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<h1>Hi</h1>\n<ul>\n<li>a</li>\n</ul>"
        );
    }

    #[test]
    fn convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.md");

        let err = convert_file(&input, &dir.path().join("out.html")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        assert_eq!(err.to_string(), format!("Missing {}", input.display()));
    }

    #[test]
    fn directory_is_not_an_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(dir.path(), &dir.path().join("out.html")).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.md");
        fs::write(&input, [0xff, 0xfe, b'\n']).unwrap();

        let err = convert_file(&input, &dir.path().join("out.html")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
