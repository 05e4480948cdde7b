#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Exclude, // -
    Exact,   // =
}

impl Prefix {
    fn symbol(self) -> &'static str {
        match self {
            Prefix::Exclude => "-",
            Prefix::Exact => "=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(Option<Prefix>, String),
    Phrase(Option<Prefix>, String),
    /// `OR` or `|`
    Delimiter,
}

/// Split a raw query into tokens. Never fails: an unterminated quote runs
/// to end of input and a prefix with nothing after it is kept as a literal.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        let prefix = match chars[i] {
            '-' => Some(Prefix::Exclude),
            '=' => Some(Prefix::Exact),
            _ => None,
        };
        if prefix.is_some() {
            i += 1;
        }

        if i < len && chars[i] == '"' {
            let phrase = read_quoted(&chars, &mut i);
            // `""` has nothing to search for
            if !phrase.is_empty() {
                tokens.push(Token::Phrase(prefix, phrase));
            }
            continue;
        }

        let word = read_word(&chars, &mut i);
        match (prefix, word.as_str()) {
            (None, "OR" | "|") => tokens.push(Token::Delimiter),
            (Some(p), "") => tokens.push(Token::Word(None, p.symbol().to_string())),
            (prefix, _) => tokens.push(Token::Word(prefix, word)),
        }
    }

    tokens
}

fn read_quoted(chars: &[char], i: &mut usize) -> String {
    *i += 1; // skip opening quote
    let mut s = String::new();
    while *i < chars.len() {
        if chars[*i] == '"' {
            *i += 1; // skip closing quote
            break;
        }
        s.push(chars[*i]);
        *i += 1;
    }
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn read_word(chars: &[char], i: &mut usize) -> String {
    let mut word = String::new();
    while *i < chars.len() && !chars[*i].is_whitespace() {
        word.push(chars[*i]);
        *i += 1;
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_and_phrases() {
        assert_eq!(
            tokenize(r#"-herp ="herp  derp" flerp"#),
            vec![
                Token::Word(Some(Prefix::Exclude), "herp".to_string()),
                Token::Phrase(Some(Prefix::Exact), "herp derp".to_string()),
                Token::Word(None, "flerp".to_string()),
            ]
        );
    }

    #[test]
    fn test_delimiters_are_case_sensitive() {
        assert_eq!(
            tokenize("a OR b | c or d"),
            vec![
                Token::Word(None, "a".to_string()),
                Token::Delimiter,
                Token::Word(None, "b".to_string()),
                Token::Delimiter,
                Token::Word(None, "c".to_string()),
                Token::Word(None, "or".to_string()),
                Token::Word(None, "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_or_prefixed_delimiter_is_literal() {
        assert_eq!(
            tokenize(r#""OR" -|"#),
            vec![
                Token::Phrase(None, "OR".to_string()),
                Token::Word(Some(Prefix::Exclude), "|".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(
            tokenize(r#"foo "bar baz"#),
            vec![
                Token::Word(None, "foo".to_string()),
                Token::Phrase(None, "bar baz".to_string()),
            ]
        );
    }

    #[test]
    fn test_dangling_prefix_is_literal() {
        assert_eq!(
            tokenize("a - b ="),
            vec![
                Token::Word(None, "a".to_string()),
                Token::Word(None, "-".to_string()),
                Token::Word(None, "b".to_string()),
                Token::Word(None, "=".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_phrase_dropped() {
        assert_eq!(tokenize(r#""" -"  ""#), vec![]);
        assert!(tokenize(" \t\n ").is_empty());
    }
}
