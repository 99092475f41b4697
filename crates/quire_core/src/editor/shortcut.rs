//! Line-start shortcut tokens.
//!
//! A shortcut is a two-character token typed at the start of a line and
//! followed by a space. Recognition is case-insensitive; unknown tokens
//! leave the text untouched.

/// The fixed shortcut set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Level-1 heading.
    H1,
    /// Level-2 heading.
    H2,
    /// Level-3 heading.
    H3,
    /// 2x2 editable table.
    T1,
    /// 3x3 editable table.
    T2,
    /// 3-item bulleted list.
    L1,
    /// 3-item numbered list.
    L2,
    /// Ruled blank space, 2 line-heights.
    B1,
    /// Ruled blank space, 4 line-heights.
    B2,
}

impl Shortcut {
    /// Parses an uppercased-or-not token into a shortcut.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "H1" => Some(Self::H1),
            "H2" => Some(Self::H2),
            "H3" => Some(Self::H3),
            "T1" => Some(Self::T1),
            "T2" => Some(Self::T2),
            "L1" => Some(Self::L1),
            "L2" => Some(Self::L2),
            "B1" => Some(Self::B1),
            "B2" => Some(Self::B2),
            _ => None,
        }
    }

    /// Canonical token spelling.
    pub fn token(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::B1 => "B1",
            Self::B2 => "B2",
        }
    }
}

/// Tests line text for a leading shortcut token.
///
/// The text must contain a space and the substring before the first space
/// must be exactly two characters long. On a match, returns the shortcut and
/// the remaining text with the token plus one separating space stripped.
pub fn match_shortcut(text: &str) -> Option<(Shortcut, &str)> {
    let space_at = text.find(' ')?;
    let token = &text[..space_at];
    if token.chars().count() != 2 {
        return None;
    }

    let shortcut = Shortcut::from_token(token)?;
    Some((shortcut, &text[space_at + 1..]))
}

#[cfg(test)]
mod tests {
    use super::{match_shortcut, Shortcut};

    #[test]
    fn matches_known_tokens_case_insensitively() {
        assert_eq!(
            match_shortcut("H1 My Title"),
            Some((Shortcut::H1, "My Title"))
        );
        assert_eq!(match_shortcut("b2 "), Some((Shortcut::B2, "")));
        assert_eq!(match_shortcut("l1 items"), Some((Shortcut::L1, "items")));
    }

    #[test]
    fn rejects_unknown_or_malformed_prefixes() {
        assert_eq!(match_shortcut("XY hello"), None);
        assert_eq!(match_shortcut("H1"), None);
        assert_eq!(match_shortcut("ABC text"), None);
        assert_eq!(match_shortcut("H 1 text"), None);
        assert_eq!(match_shortcut(""), None);
    }

    #[test]
    fn strips_only_the_separating_space() {
        assert_eq!(match_shortcut("H2  padded"), Some((Shortcut::H2, " padded")));
    }
}
