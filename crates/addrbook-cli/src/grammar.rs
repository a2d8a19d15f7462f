use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Remove,
    SetBirthday,
    BirthdayOf,
    PhonesOf,
    ShowAll,
    Search,
    Save,
    Load,
    Export,
    Import,
    Exit,
}

/// Every keyword the prompt understands. Multi-word keywords accept any whitespace between
/// their words.
pub const KEYWORDS: &[(&str, CommandKind)] = &[
    ("hello", CommandKind::Hello),
    ("add", CommandKind::Add),
    ("change", CommandKind::Change),
    ("remove", CommandKind::Remove),
    ("set birthday", CommandKind::SetBirthday),
    ("birthday of", CommandKind::BirthdayOf),
    ("phones of", CommandKind::PhonesOf),
    ("show all", CommandKind::ShowAll),
    ("search", CommandKind::Search),
    ("save", CommandKind::Save),
    ("load", CommandKind::Load),
    ("export", CommandKind::Export),
    ("import", CommandKind::Import),
    ("good bye", CommandKind::Exit),
    ("close", CommandKind::Exit),
    ("exit", CommandKind::Exit),
];

/// A line made of this token alone saves and exits.
pub const TERMINATOR: &str = ".";

pub const MAX_ARGS: usize = 3;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = keywords_longest_first()
        .iter()
        .map(|(keyword, _)| {
            keyword
                .split(' ')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    let token = r"\s+([\w./\\:+-]+)";
    Regex::new(&format!(
        r"(?i)^\s*({alternation})(?:{token})?(?:{token})?(?:{token})?\s*$"
    ))
    .expect("command pattern compiles")
});

/// Keywords ordered so that a longer keyword is always tried before any shorter one.
pub fn keywords_longest_first() -> Vec<(&'static str, CommandKind)> {
    let mut keywords = KEYWORDS.to_vec();
    keywords.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keywords
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args([Option<String>; MAX_ARGS]);

impl Args {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Args::default();
        for (slot, value) in args.0.iter_mut().zip(values) {
            *slot = Some(value.into());
        }
        args
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|value| value.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub kind: CommandKind,
    /// Lowercase keyword with single spaces, e.g. `set birthday`.
    pub keyword: String,
    pub args: Args,
}

/// Splits a line into a known keyword and up to three argument tokens.
///
/// A token is a run of word characters, `.`, `+`, `-` and path separators, which covers
/// names, phone numbers, dates and file paths.
///
/// Returns `None` for anything that is not a keyword followed only by argument tokens.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.trim() == TERMINATOR {
        return Some(ParsedLine {
            kind: CommandKind::Exit,
            keyword: TERMINATOR.to_string(),
            args: Args::default(),
        });
    }

    let captures = LINE_PATTERN.captures(line)?;
    let keyword = captures
        .get(1)?
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let kind = KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == keyword)
        .map(|(_, kind)| *kind)?;
    let args = Args::new((2..=MAX_ARGS + 1).filter_map(|index| {
        captures.get(index).map(|token| token.as_str().to_string())
    }));

    Some(ParsedLine {
        kind,
        keyword,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::{keywords_longest_first, parse_line, Args, CommandKind, KEYWORDS};

    fn parsed(line: &str) -> (CommandKind, Vec<String>) {
        let parsed = parse_line(line).unwrap_or_else(|| panic!("{line:?} should parse"));
        let args = (0..3)
            .filter_map(|index| parsed.args.get(index).map(str::to_string))
            .collect();
        (parsed.kind, args)
    }

    #[test]
    fn parses_keyword_and_arguments() {
        assert_eq!(parsed("hello"), (CommandKind::Hello, vec![]));
        assert_eq!(
            parsed("add John 0501234567"),
            (CommandKind::Add, vec!["John".into(), "0501234567".into()])
        );
        assert_eq!(
            parsed("change John 0501234567 0677654321"),
            (
                CommandKind::Change,
                vec!["John".into(), "0501234567".into(), "0677654321".into()]
            )
        );
        assert_eq!(
            parsed("set birthday Ann 01.01.2000"),
            (CommandKind::SetBirthday, vec!["Ann".into(), "01.01.2000".into()])
        );
        assert_eq!(
            parsed("save backup.db"),
            (CommandKind::Save, vec!["backup.db".into()])
        );
        assert_eq!(
            parsed("export /tmp/book-2024/contacts.csv"),
            (CommandKind::Export, vec!["/tmp/book-2024/contacts.csv".into()])
        );
    }

    #[test]
    fn keywords_are_case_insensitive_and_arguments_verbatim() {
        let line = parse_line("  PHONES   Of  JoHn ").expect("parse line");
        assert_eq!(line.kind, CommandKind::PhonesOf);
        assert_eq!(line.keyword, "phones of");
        assert_eq!(line.args.get(0), Some("JoHn"));
    }

    #[test]
    fn argument_tokens_are_loosely_typed() {
        assert_eq!(
            parsed("add John 123"),
            (CommandKind::Add, vec!["John".into(), "123".into()])
        );
        assert_eq!(
            parsed("add Олена 0501234567"),
            (CommandKind::Add, vec!["Олена".into(), "0501234567".into()])
        );
    }

    #[test]
    fn every_terminator_maps_to_exit() {
        for line in ["good bye", "GOOD   BYE", "close", "exit", ".", "  .  "] {
            assert_eq!(parse_line(line).expect("parse line").kind, CommandKind::Exit, "{line:?}");
        }
    }

    #[test]
    fn rejects_unknown_or_overlong_input() {
        for line in [
            "",
            "what's up",
            "address John",
            "addJohn 0501234567",
            "show",
            "add a b c d",
            "add John 050-123@4567",
            ". exit",
            "please add John 0501234567",
        ] {
            assert!(parse_line(line).is_none(), "{line:?} should not parse");
        }
    }

    #[test]
    fn longer_keywords_are_tried_first() {
        let ordered = keywords_longest_first();
        assert_eq!(ordered.len(), KEYWORDS.len());
        for pair in ordered.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
        assert_eq!(ordered[0].0, "set birthday");
    }

    #[test]
    fn args_helpers() {
        let args = Args::new(["a", "b"]);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get(1), Some("b"));
        assert_eq!(args.get(2), None);
        assert_eq!(args.get(7), None);
        assert_eq!(Args::default().len(), 0);
    }
}
