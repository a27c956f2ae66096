//! Delimiter tokenizer with whitespace trimming, for pulling apart
//! `--lvalue = rvalue1, rvalue2` style option strings. The delimiter is
//! chosen per call, so a caller can split the lvalue on `=` and then walk
//! the rvalues on `,`.

/// Borrowing tokenizer over a source string. Tokens come back with
/// surrounding whitespace trimmed; a token that is empty after trimming
/// yields `None` (parsing state still advances past its delimiter).
pub struct Tokenizer<'a> {
    rest: &'a str,
    last_delim: Option<char>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            rest: src,
            last_delim: None,
        }
    }

    /// The next token up to `delim` (or end of input), trimmed.
    pub fn next_token(&mut self, delim: char) -> Option<&'a str> {
        if self.rest.is_empty() {
            self.last_delim = None;
            return None;
        }

        let token = match self.rest.find(delim) {
            Some(pos) => {
                let token = &self.rest[..pos];
                self.rest = &self.rest[pos + delim.len_utf8()..];
                self.last_delim = Some(delim);
                token
            }
            None => {
                let token = self.rest;
                self.rest = "";
                self.last_delim = None;
                token
            }
        };

        let trimmed = token.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    /// The delimiter that terminated the most recent token, or `None` when
    /// the token ran to the end of the input.
    pub fn last_delim(&self) -> Option<char> {
        self.last_delim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-renders an option string the way the original sample harness did:
    /// lvalue split on `=`, rvalues split on `,`, everything trimmed.
    fn rejoin(src: &str) -> String {
        let mut tok = Tokenizer::new(src);
        let mut out = String::new();
        if let Some(lvalue) = tok.next_token('=') {
            out.push_str(lvalue);
            let mut sep = " = ";
            while let Some(rvalue) = tok.next_token(',') {
                out.push_str(sep);
                out.push_str(rvalue);
                sep = ",";
            }
        }
        out
    }

    #[test]
    fn test_option_string_vectors() {
        assert_eq!(rejoin(""), "");
        assert_eq!(rejoin("--lvalue=rvalue1"), "--lvalue = rvalue1");
        assert_eq!(rejoin("--lvalue=rvalue1,revalue2"), "--lvalue = rvalue1,revalue2");
        assert_eq!(
            rejoin("--lvalue=rvalue1,revalue2,three"),
            "--lvalue = rvalue1,revalue2,three"
        );
        assert_eq!(rejoin("--lvalue = rvalue1, rvalue2"), "--lvalue = rvalue1,rvalue2");
        assert_eq!(rejoin("--lvalue\t=\trvalue1,\trevalue2"), "--lvalue = rvalue1,revalue2");
        assert_eq!(rejoin("--lvalue="), "--lvalue");
        assert_eq!(rejoin("--lvalue"), "--lvalue");
    }

    #[test]
    fn test_unicode_values_pass_through() {
        assert_eq!(
            rejoin(" --lvalue = はい。 , はい。, おはようございます"),
            "--lvalue = はい。,はい。,おはようございます"
        );
        assert_eq!(
            rejoin(" --値 = はい。 , はい。, おはようございます"),
            "--値 = はい。,はい。,おはようございます"
        );
    }

    #[test]
    fn test_last_delim_tracking() {
        let mut tok = Tokenizer::new("a=b");
        assert_eq!(tok.next_token('='), Some("a"));
        assert_eq!(tok.last_delim(), Some('='));
        assert_eq!(tok.next_token('='), Some("b"));
        assert_eq!(tok.last_delim(), None);
    }

    #[test]
    fn test_whitespace_only_token_is_none() {
        let mut tok = Tokenizer::new("  =b");
        assert_eq!(tok.next_token('='), None);
        // state advanced past the delimiter regardless
        assert_eq!(tok.next_token('='), Some("b"));
    }
}
