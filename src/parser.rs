// parser.rs

/// Splits a command line into words, honoring single quotes, double quotes and
/// backslash escapes. A quoted empty string (`''`) yields an empty word.
pub fn split_words(line: &str) -> Vec<String> {
    enum State { Normal, Single, Double }
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut state = State::Normal;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut cur));
                        in_word = false;
                    }
                }
                _ => {
                    cur.push(ch);
                    in_word = true;
                }
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '\\' | '"') => {
                        cur.push(next);
                        chars.next();
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    if in_word {
        words.push(cur);
    }
    words
}

#[cfg(test)]
mod test {
    use super::split_words;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_words("  set  one two "), vec!["set", "one", "two"]);
    }

    #[test]
    fn quotes_keep_words_together() {
        assert_eq!(split_words(r#"set 'a  b' "c d""#), vec!["set", "a  b", "c d"]);
        assert_eq!(split_words("set ab'c d'e"), vec!["set", "abc de"]);
    }

    #[test]
    fn escapes() {
        assert_eq!(split_words(r"set a\ b"), vec!["set", "a b"]);
        assert_eq!(split_words(r#"set "say \"hi\" \n""#), vec!["set", r#"say "hi" \n"#]);
        assert_eq!(split_words(r"set 'no\escape'"), vec!["set", r"no\escape"]);
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(split_words("set ''"), vec!["set", ""]);
        assert!(split_words("   ").is_empty());
    }
}
