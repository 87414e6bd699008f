//! Character classes used by the scanner, the member-name parser and the
//! string quoter.

use unicode_general_category::{get_general_category, GeneralCategory};

/// LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR.
#[inline]
pub(crate) const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// JSON5 white space: the fixed set below plus every `Zs` character.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{FEFF}'
    ) || get_general_category(c) == GeneralCategory::SpaceSeparator
}

pub(crate) fn is_member_name_start(c: char) -> bool {
    if matches!(c, '$' | '_' | '\u{200C}' | '\u{200D}') {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::LetterNumber
    )
}

pub(crate) fn is_member_name_part(c: char) -> bool {
    is_member_name_start(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
        )
}

/// Characters the serializer always writes as `\u` escapes.
///
/// Characters above U+FFFF are written as a UTF-16 pair, and every surrogate
/// code unit is escaped, so they all qualify.
pub(crate) fn needs_unicode_escape(c: char) -> bool {
    u32::from(c) > 0xFFFF
        || matches!(
            get_general_category(c),
            GeneralCategory::Format
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for c in ['\t', '\u{0B}', '\u{0C}', ' ', '\u{A0}', '\u{FEFF}', '\u{2003}', '\u{3000}'] {
            assert!(is_whitespace(c), "{:?}", c);
        }
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('\u{200B}'));
    }

    #[test]
    fn test_line_terminators() {
        assert!(is_line_terminator('\u{2028}'));
        assert!(is_line_terminator('\r'));
        assert!(!is_line_terminator('\u{0B}'));
    }

    #[test]
    fn test_member_name_classes() {
        assert!(is_member_name_start('$'));
        assert!(is_member_name_start('\u{200C}'));
        assert!(is_member_name_start('指'));
        assert!(is_member_name_start('Ⅻ'));
        assert!(!is_member_name_start('1'));
        assert!(!is_member_name_start('-'));
        assert!(is_member_name_part('1'));
        assert!(is_member_name_part('\u{0301}'));
        assert!(is_member_name_part('\u{203F}'));
        assert!(!is_member_name_part(' '));
    }

    #[test]
    fn test_escape_classes() {
        assert!(needs_unicode_escape('\u{0}'));
        assert!(needs_unicode_escape('\u{200B}'));
        assert!(needs_unicode_escape('\u{2028}'));
        assert!(needs_unicode_escape('\u{E000}'));
        assert!(!needs_unicode_escape('é'));
        assert!(needs_unicode_escape('😀'));
        assert!(needs_unicode_escape('\u{10FFFF}'));
        assert!(!needs_unicode_escape('\u{FFFD}'));
    }
}
