//! Rich-text labels.
//!
//! Playlist rows and the now-playing panel use a tiny Pango-style markup:
//! `<b>`, `<i>`, `<big>`, `<small>`, the five XML entities, and `\n` for
//! line breaks. Parsing produces styled spans grouped by line so the view can
//! draw them without knowing anything about tags.

use thiserror::Error;

/// Each `<big>` / `<small>` step scales the font by this factor.
const SCALE_STEP: f32 = 1.2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("unknown tag <{0}>")]
    UnknownTag(String),
    #[error("expected </{expected}>, found </{found}>")]
    MismatchedClose { expected: String, found: String },
    #[error("closing tag </{0}> has no opening tag")]
    UnexpectedClose(String),
    #[error("tag <{0}> is never closed")]
    Unclosed(String),
    #[error("tag starting at byte {0} has no closing '>'")]
    UnterminatedTag(usize),
    #[error("unknown entity &{0};")]
    UnknownEntity(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Bold,
    Italic,
    Big,
    Small,
}

impl Tag {
    fn from_name(name: &str) -> Result<Self, MarkupError> {
        match name {
            "b" => Ok(Tag::Bold),
            "i" => Ok(Tag::Italic),
            "big" => Ok(Tag::Big),
            "small" => Ok(Tag::Small),
            other => Err(MarkupError::UnknownTag(other.to_string())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Big => "big",
            Tag::Small => "small",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Style {
    bold: bool,
    italic: bool,
    scale: i8,
}

impl Style {
    fn from_stack(stack: &[Tag]) -> Self {
        stack.iter().fold(Style::default(), |mut style, tag| {
            match tag {
                Tag::Bold => style.bold = true,
                Tag::Italic => style.italic = true,
                Tag::Big => style.scale = style.scale.saturating_add(1),
                Tag::Small => style.scale = style.scale.saturating_sub(1),
            }
            style
        })
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Net number of `<big>` (positive) or `<small>` (negative) steps.
    pub scale: i8,
}

impl Span {
    /// Font size for this span relative to `base`.
    pub fn size(&self, base: f32) -> f32 {
        base * SCALE_STEP.powi(i32::from(self.scale))
    }
}

/// Parsed markup: one `Vec<Span>` per line. Never has zero lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    lines: Vec<Vec<Span>>,
}

impl Markup {
    pub fn parse(src: &str) -> Result<Self, MarkupError> {
        let mut lines: Vec<Vec<Span>> = vec![Vec::new()];
        let mut stack: Vec<Tag> = Vec::new();
        let mut i = 0;

        while let Some(c) = src[i..].chars().next() {
            let tail = &src[i..];
            match c {
                '<' => {
                    let end = tail.find('>').ok_or(MarkupError::UnterminatedTag(i))?;
                    let inner = tail[1..end].trim();

                    if let Some(name) = inner.strip_prefix('/') {
                        let name = name.trim();
                        let tag = Tag::from_name(name)?;
                        match stack.pop() {
                            Some(open) if open == tag => {}
                            Some(open) => {
                                return Err(MarkupError::MismatchedClose {
                                    expected: open.name().to_string(),
                                    found: name.to_string(),
                                });
                            }
                            None => return Err(MarkupError::UnexpectedClose(name.to_string())),
                        }
                    } else {
                        stack.push(Tag::from_name(inner)?);
                    }

                    i += end + 1;
                }
                '&' => {
                    let Some(end) = tail.find(';') else {
                        return Err(MarkupError::UnknownEntity(tail[1..].to_string()));
                    };
                    let decoded = match &tail[1..end] {
                        "amp" => '&',
                        "lt" => '<',
                        "gt" => '>',
                        "quot" => '"',
                        "apos" => '\'',
                        other => return Err(MarkupError::UnknownEntity(other.to_string())),
                    };
                    push_char(&mut lines, decoded, Style::from_stack(&stack));
                    i += end + 1;
                }
                '\n' => {
                    lines.push(Vec::new());
                    i += 1;
                }
                _ => {
                    push_char(&mut lines, c, Style::from_stack(&stack));
                    i += c.len_utf8();
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(MarkupError::Unclosed(open.name().to_string()));
        }

        Ok(Self { lines })
    }

    /// Escape text so it can be embedded in markup verbatim.
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&apos;"),
                c => out.push(c),
            }
        }
        out
    }

    pub fn lines(&self) -> &[Vec<Span>] {
        &self.lines
    }

    /// Text with tags stripped, lines joined by `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[cfg(test)]
    pub fn contains(&self, needle: &str) -> bool {
        self.plain_text().contains(needle)
    }
}

fn push_char(lines: &mut [Vec<Span>], c: char, style: Style) {
    let Some(line) = lines.last_mut() else { return };

    if let Some(last) = line.last_mut() {
        if last.bold == style.bold && last.italic == style.italic && last.scale == style.scale {
            last.text.push(c);
            return;
        }
    }

    line.push(Span {
        text: c.to_string(),
        bold: style.bold,
        italic: style.italic,
        scale: style.scale,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_title_then_plain_artist() {
        let m = Markup::parse("<b>Dreamy Days</b>\nRoots Manuva").unwrap();

        assert_eq!(m.lines().len(), 2);
        assert_eq!(m.lines()[0].len(), 1);
        assert_eq!(m.lines()[0][0].text, "Dreamy Days");
        assert!(m.lines()[0][0].bold);
        assert_eq!(m.lines()[1][0].text, "Roots Manuva");
        assert!(!m.lines()[1][0].bold);
    }

    #[test]
    fn nested_tags_combine() {
        let m = Markup::parse("<big><b>A</b>B</big><small><small>c</small></small>").unwrap();
        let spans = &m.lines()[0];

        assert_eq!(spans.len(), 3);
        assert_eq!((spans[0].bold, spans[0].scale), (true, 1));
        assert_eq!((spans[1].bold, spans[1].scale), (false, 1));
        assert_eq!(spans[2].scale, -2);
        assert!(spans[0].size(10.0) > 10.0);
        assert!(spans[2].size(10.0) < 10.0);
    }

    #[test]
    fn plain_text_is_a_single_span() {
        let m = Markup::parse("Hadjaha").unwrap();
        let expected = vec![vec![Span {
            text: "Hadjaha".into(),
            bold: false,
            italic: false,
            scale: 0,
        }]];
        assert_eq!(m.lines(), expected.as_slice());
    }

    #[test]
    fn empty_input_has_one_empty_line() {
        let m = Markup::parse("").unwrap();
        assert_eq!(m.lines().len(), 1);
        assert!(m.lines()[0].is_empty());
        assert_eq!(m.plain_text(), "");
    }

    #[test]
    fn entities_decode() {
        let m = Markup::parse("<i>Tom &amp; Jerry &lt;3</i>").unwrap();
        assert_eq!(m.plain_text(), "Tom & Jerry <3");
        assert!(m.lines()[0][0].italic);
    }

    #[test]
    fn escape_round_trips_through_parse() {
        let raw = r#"<b> & "x" 'y'"#;
        let m = Markup::parse(&Markup::escape(raw)).unwrap();
        assert_eq!(m.plain_text(), raw);
    }

    #[test]
    fn rejects_bad_markup() {
        assert_eq!(
            Markup::parse("<u>x</u>"),
            Err(MarkupError::UnknownTag("u".into()))
        );
        assert_eq!(
            Markup::parse("<b><i>x</b></i>"),
            Err(MarkupError::MismatchedClose {
                expected: "i".into(),
                found: "b".into()
            })
        );
        assert_eq!(
            Markup::parse("x</b>"),
            Err(MarkupError::UnexpectedClose("b".into()))
        );
        assert_eq!(
            Markup::parse("<b>x"),
            Err(MarkupError::Unclosed("b".into()))
        );
        assert_eq!(
            Markup::parse("ab<b"),
            Err(MarkupError::UnterminatedTag(2))
        );
        assert_eq!(
            Markup::parse("&nbsp;"),
            Err(MarkupError::UnknownEntity("nbsp".into()))
        );
    }
}
