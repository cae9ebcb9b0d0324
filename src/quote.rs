// POSIX shell single-quote escaping

/// Quote a value so a POSIX shell reads it back as exactly one word.
///
/// Inside single quotes nothing is special except the quote itself, so each
/// embedded `'` closes the quoted run, emits `\'` and opens a new run.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

/// Quote every argument and join them with single spaces
pub fn join<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "''")]
    #[case("plain", "'plain'")]
    #[case("Test 123", "'Test 123'")]
    #[case("it's", "'it'\\''s'")]
    #[case("'", "''\\'''")]
    #[case("$(reboot)", "'$(reboot)'")]
    fn quotes_value(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote(input), expected);
    }

    #[rstest]
    #[case("Test 123")]
    #[case("O'Brien's Wifi")]
    #[case("''''")]
    #[case("a; rm -rf / #")]
    #[case("`id`")]
    #[case("$(id) && echo pwned")]
    #[case("line1\nline2")]
    #[case("back\\slash \"double\"")]
    #[case("  leading and trailing  ")]
    #[case("ünïcödé 📶")]
    fn shell_splits_back_to_one_word(#[case] input: &str) {
        let words = shell_words::split(&quote(input)).unwrap();
        assert_eq!(words, vec![input.to_string()]);
    }

    #[test]
    fn join_keeps_argument_boundaries() {
        let args = ["sudo", "bash", "-c", "echo 'hi' && id"];
        let words = shell_words::split(&join(args)).unwrap();
        assert_eq!(words, args);
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join(Vec::<String>::new()), "");
    }
}
