use md5::{Digest, Md5};

/// Apply the inline passes to paragraph text, in order: `**bold**`,
/// `__emphasis__`, `[[hash]]`, `((strip))`.
///
/// Each pass sees the output of the previous one. Delimiters pair
/// leftmost-first with the nearest closer; an opener without a closer is
/// left in place along with the rest of the line.
pub fn render(text: &str) -> String {
    let text = replace_pairs(text, "**", "**", |inner| format!("<b>{inner}</b>"));
    let text = replace_pairs(&text, "__", "__", |inner| format!("<em>{inner}</em>"));
    let text = replace_pairs(&text, "[[", "]]", md5_hex);
    replace_pairs(&text, "((", "))", strip_c)
}

/// Replace every complete `open ... close` span with `f(inner)`.
fn replace_pairs<F>(text: &str, open: &str, close: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&f(&after_open[..end]));
        rest = &after_open[end + close.len()..];
    }

    out.push_str(rest);
    out
}

/// Lowercase hex MD5 of the exact bytes.
fn md5_hex(inner: &str) -> String {
    hex::encode(Md5::digest(inner.as_bytes()))
}

fn strip_c(inner: &str) -> String {
    inner.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
}
