/*!
Compiles format picture text into a sequence of nodes.
*/

use std::sync::Arc;

use crate::{
    error::{compile, Error},
    tables::{self, Keyword, Suffix, SuffixKind},
};

/// How characters between keywords in a format picture are treated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Anything that isn't a keyword passes through to the output:
    /// punctuation as separators, whitespace as spaces and everything else
    /// verbatim.
    Free,
    /// Only `-./,':;` and the space are allowed between fields. Any other
    /// raw character is a compile error. Quoted literals are still fine.
    Standard,
}

/// One compiled element of a format picture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Node {
    /// A keyword together with its accumulated suffix flags.
    Action { keyword: &'static Keyword, suffix: Suffix },
    /// A character copied to the output verbatim.
    Literal(char),
    /// A punctuation character copied to the output.
    Separator(char),
    /// A whitespace character copied to the output.
    Space(char),
}

/// A compiled format picture, ready to render.
///
/// The node sequence is behind an `Arc` so a cache can hand out the same
/// compilation to many callers without copying it.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub(crate) nodes: Arc<[Node]>,
}

impl Pattern {
    /// Compiles `pattern` into a sequence of nodes.
    ///
    /// Compilation only fails in [`Mode::Standard`], when the pattern
    /// contains a raw character outside the allowed separator set. In
    /// [`Mode::Free`] every string compiles.
    pub fn compile(pattern: &str, mode: Mode) -> Result<Pattern, Error> {
        let nodes = compile_nodes(pattern, mode)?;
        Ok(Pattern { nodes: nodes.into() })
    }

    pub(crate) fn from_nodes(nodes: Arc<[Node]>) -> Pattern {
        Pattern { nodes }
    }
}

/// Tokenizes a pattern. The node count never exceeds the pattern's
/// character count, since every node consumes at least one character.
pub(crate) fn compile_nodes(
    pattern: &str,
    mode: Mode,
) -> Result<Vec<Node>, Error> {
    let mut nodes = Vec::with_capacity(pattern.len());
    // `FM` toggles fill mode for everything that follows rather than
    // attaching to a single keyword.
    let mut fill = false;
    let mut input = pattern;

    while !input.is_empty() {
        // A quoted run copies its contents verbatim. A backslash escapes
        // the next character (so `\"` does not close the run), an
        // unterminated run extends to the end of the pattern, and a
        // trailing backslash stands for itself.
        if let Some(rest) = input.strip_prefix('"') {
            input = rest;
            while let Some(ch) = next_char(&mut input) {
                if ch == '"' {
                    break;
                }
                let ch = match ch {
                    '\\' => next_char(&mut input).unwrap_or('\\'),
                    ch => ch,
                };
                nodes.push(Node::Literal(ch));
            }
            continue;
        }
        // Outside a quoted run, `\"` drops the backslash and classifies
        // the quote like any other raw character. Without this rule there
        // would be no way to emit a literal quote.
        if let Some(rest) = input.strip_prefix("\\\"") {
            input = rest;
            nodes.push(classify('"', mode)?);
            continue;
        }

        let mut suffix = Suffix::empty();
        if let Some(s) = tables::suffix_search(input, SuffixKind::Prefix) {
            if s.flag == Suffix::FILL {
                fill = !fill;
            } else {
                suffix = suffix.union(s.flag);
            }
            input = &input[s.name.len()..];
        }
        if let Some(keyword) = tables::keyword_search(input) {
            input = &input[keyword.len()..];
            if let Some(s) = tables::suffix_search(input, SuffixKind::Postfix)
            {
                suffix = suffix.union(s.flag);
                input = &input[s.name.len()..];
            }
            if fill {
                suffix = suffix.union(Suffix::FILL);
            }
            nodes.push(Node::Action { keyword, suffix });
            continue;
        }
        // A consumed prefix suffix with no keyword after it stays
        // consumed.
        if let Some(ch) = next_char(&mut input) {
            nodes.push(classify(ch, mode)?);
        }
    }
    Ok(nodes)
}

fn next_char(input: &mut &str) -> Option<char> {
    let ch = input.chars().next()?;
    *input = &input[ch.len_utf8()..];
    Some(ch)
}

fn classify(ch: char, mode: Mode) -> Result<Node, Error> {
    match mode {
        Mode::Standard => {
            if ch == ' ' {
                Ok(Node::Space(ch))
            } else if matches!(ch, '-' | '.' | '/' | ',' | '\'' | ':' | ';')
            {
                Ok(Node::Separator(ch))
            } else {
                Err(compile::Error::InvalidSeparator { ch }.into())
            }
        }
        Mode::Free => {
            if ch.is_ascii_whitespace() {
                Ok(Node::Space(ch))
            } else if ch.is_ascii_graphic() && !ch.is_ascii_alphanumeric() {
                Ok(Node::Separator(ch))
            } else {
                Ok(Node::Literal(ch))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::FieldId;

    fn nodes(pattern: &str, mode: Mode) -> Vec<Node> {
        compile_nodes(pattern, mode).unwrap()
    }

    fn action(name: &str) -> Node {
        action_suffix(name, Suffix::empty())
    }

    fn action_suffix(name: &str, suffix: Suffix) -> Node {
        let keyword = tables::keyword_search(name).unwrap();
        assert_eq!(keyword.name, name, "not an exact keyword: {name}");
        Node::Action { keyword, suffix }
    }

    #[test]
    fn basic() {
        assert_eq!(
            nodes("YYYY-MM-DD", Mode::Free),
            vec![
                action("YYYY"),
                Node::Separator('-'),
                action("MM"),
                Node::Separator('-'),
                action("DD"),
            ]
        );
        assert_eq!(
            nodes("HH24:MI", Mode::Standard),
            vec![action("HH24"), Node::Separator(':'), action("MI")]
        );
    }

    #[test]
    fn postfix_suffixes() {
        assert_eq!(
            nodes("DDTH", Mode::Free),
            vec![action_suffix("DD", Suffix::ORDINAL_UPPER)]
        );
        assert_eq!(
            nodes("DDth", Mode::Free),
            vec![action_suffix("DD", Suffix::ORDINAL_LOWER)]
        );
        assert_eq!(
            nodes("DDSP", Mode::Free),
            vec![action_suffix("DD", Suffix::SPELL_OUT)]
        );
    }

    #[test]
    fn fill_toggles() {
        assert_eq!(
            nodes("FMDD DD", Mode::Free),
            vec![
                action_suffix("DD", Suffix::FILL),
                Node::Space(' '),
                action_suffix("DD", Suffix::FILL),
            ]
        );
        assert_eq!(
            nodes("FMDD FMDD", Mode::Free),
            vec![
                action_suffix("DD", Suffix::FILL),
                Node::Space(' '),
                action("DD"),
            ]
        );
    }

    #[test]
    fn localized_prefix() {
        assert_eq!(
            nodes("TMDay", Mode::Free),
            vec![action_suffix("Day", Suffix::LOCALIZED)]
        );
        // A prefix suffix with no keyword after it stays consumed.
        assert_eq!(
            nodes("FMX", Mode::Free),
            vec![Node::Literal('X')]
        );
    }

    #[test]
    fn quoted_runs() {
        assert_eq!(
            nodes("\"Q:\" Q", Mode::Free),
            vec![
                Node::Literal('Q'),
                Node::Literal(':'),
                Node::Space(' '),
                action("Q"),
            ]
        );
        // Backslash escapes inside a quoted run.
        assert_eq!(
            nodes("\"a\\\"b\"", Mode::Free),
            vec![
                Node::Literal('a'),
                Node::Literal('"'),
                Node::Literal('b'),
            ]
        );
        // Unterminated runs extend to the end of the pattern.
        assert_eq!(
            nodes("\"abc", Mode::Free),
            vec![
                Node::Literal('a'),
                Node::Literal('b'),
                Node::Literal('c'),
            ]
        );
        // A trailing backslash stands for itself.
        assert_eq!(nodes("\"\\", Mode::Free), vec![Node::Literal('\\')]);
        // Quoted text is exempt from standard mode's separator check.
        assert_eq!(
            nodes("\"@\"", Mode::Standard),
            vec![Node::Literal('@')]
        );
    }

    #[test]
    fn escaped_quote_outside_run() {
        assert_eq!(
            nodes("\\\"YYYY\\\"", Mode::Free),
            vec![Node::Separator('"'), action("YYYY"), Node::Separator('"')]
        );
    }

    #[test]
    fn free_mode_classification() {
        assert_eq!(
            nodes("x7\u{e9}\t", Mode::Free),
            vec![
                Node::Literal('x'),
                Node::Literal('7'),
                Node::Literal('\u{e9}'),
                Node::Space('\t'),
            ]
        );
    }

    #[test]
    fn standard_mode_rejects_raw_characters() {
        for ok in ["YYYY-MM-DD", "HH24:MI:SS", "DD.MM.YYYY", "DD,';: /MM"] {
            assert!(compile_nodes(ok, Mode::Standard).is_ok(), "{ok}");
        }
        let err = compile_nodes("YYYY @ DD", Mode::Standard).unwrap_err();
        assert!(err.is_invalid_separator());
        insta::assert_snapshot!(
            err,
            @"invalid character '@' in format picture, only `-./,':;` and spaces may separate fields"
        );
    }

    #[test]
    fn iso_and_gregorian_are_distinct() {
        let iw = match &nodes("IW", Mode::Free)[0] {
            Node::Action { keyword, .. } => keyword.field,
            node => panic!("unexpected node: {node:?}"),
        };
        let ww = match &nodes("WW", Mode::Free)[0] {
            Node::Action { keyword, .. } => keyword.field,
            node => panic!("unexpected node: {node:?}"),
        };
        assert_eq!(iw, FieldId::IsoWeek);
        assert_eq!(ww, FieldId::WeekOfYear);
    }

    quickcheck::quickcheck! {
        // Free mode compiles anything, with at most one node per
        // character.
        fn prop_free_mode_total(pattern: String) -> bool {
            match compile_nodes(&pattern, Mode::Free) {
                Ok(nodes) => nodes.len() <= pattern.chars().count(),
                Err(_) => false,
            }
        }

        // Compilation is a pure function of its inputs.
        fn prop_compile_deterministic(pattern: String) -> bool {
            compile_nodes(&pattern, Mode::Free).unwrap()
                == compile_nodes(&pattern, Mode::Free).unwrap()
        }
    }
}
