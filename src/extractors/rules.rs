// src/extractors/rules.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
// Length ceilings bound false positives from body lines that happen to start
// like a heading.
pub const BOOK_HEADING_MAX_CHARS: usize = 100;
pub const CAPS_HEADING_MAX_CHARS: usize = 60;

// --- Regex Patterns for Line Matching (Lazy Static) ---
// Book headings in the Gutenberg KJV text look like
// "THE FIRST BOOK OF MOSES: CALLED GENESIS".
static BOOK_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:THE|THE BOOK OF|BOOK OF|THE FIRST BOOK OF|THE SECOND BOOK OF)\s+.+$")
        .expect("Failed to compile BOOK_HEADING_RE")
});

// Verse-leading-number lines: "1 In the beginning God created..."
static VERSE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(.*)$").expect("Failed to compile VERSE_LINE_RE")
});

// Chapter headings: "CHAPTER I", "Chapter 12"
static CHAPTER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^CHAPTER\s+([IVXLCDM0-9]+)\b").expect("Failed to compile CHAPTER_LINE_RE")
});

// Inline chapter:verse markers: "1:1 And it came to pass..."
static INLINE_VERSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d+)\s+(.*)$").expect("Failed to compile INLINE_VERSE_RE")
});

// --- Line Classification ---

/// Structural meaning of one non-blank line in a line-oriented source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A book heading, already sanitized and title-cased.
    BookHeading(String),
    /// A verse line: leading number plus the verse body.
    Verse { number: u32, text: String },
    /// A chapter heading with its converted number.
    Chapter(u32),
}

/// Classifies one trimmed line under the KJV-style rules.
///
/// Rules are tried in a fixed order with first-match-wins: book heading,
/// verse line, chapter line. A line matching no rule returns `None` and is
/// skipped by the caller; "no match" is normal control flow, never an error.
pub fn classify_line(line: &str) -> Option<LineEvent> {
    if BOOK_HEADING_RE.is_match(line) && line.chars().count() < BOOK_HEADING_MAX_CHARS {
        return Some(LineEvent::BookHeading(sanitize_book_name(line)));
    }

    if let Some(caps) = VERSE_LINE_RE.captures(line) {
        if let Ok(number) = caps[1].parse::<u32>() {
            return Some(LineEvent::Verse {
                number,
                text: caps[2].trim().to_string(),
            });
        }
        // A digit-led line can match no later rule either.
        return None;
    }

    if let Some(caps) = CHAPTER_LINE_RE.captures(line) {
        return chapter_number(&caps[1]).map(LineEvent::Chapter);
    }

    None
}

/// All-caps heading predicate for Book of Mormon style texts, e.g.
/// "FIRST BOOK OF NEPHI". Non-letter characters are ignored; the line must
/// contain at least one letter and no lowercase ones.
pub fn is_caps_heading(line: &str) -> bool {
    line.chars().count() < CAPS_HEADING_MAX_CHARS
        && line.chars().any(char::is_alphabetic)
        && !line.chars().any(char::is_lowercase)
}

/// Parses a self-contained "chapter:verse text" line, e.g.
/// "1:1 I, Nephi, having been born of goodly parents...".
pub fn parse_inline_verse(line: &str) -> Option<(u32, u32, String)> {
    let caps = INLINE_VERSE_RE.captures(line)?;
    let chapter = caps[1].parse().ok()?;
    let verse = caps[2].parse().ok()?;
    Some((chapter, verse, caps[3].trim().to_string()))
}

// --- Normalization Helpers ---

/// Strips everything but ASCII alphanumerics and spaces, then title-cases
/// each word: "THE FIRST BOOK OF MOSES: CALLED GENESIS" becomes
/// "The First Book Of Moses Called Genesis".
pub fn sanitize_book_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.chars() {
        if !c.is_ascii_alphanumeric() && c != ' ' {
            continue;
        }
        if c.is_ascii_alphabetic() {
            if prev_alpha {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Converts a chapter token to a number. Decimal tokens parse directly;
/// anything else is summed as Roman numeral characters.
pub fn chapter_number(token: &str) -> Option<u32> {
    token.parse::<u32>().ok().or_else(|| roman_to_int(token))
}

/// Additive Roman numeral conversion: each character contributes its face
/// value, unknown characters contribute zero, and no subtractive pairs are
/// handled ("IV" sums to 6, not 4). Known limitation, kept deliberately:
/// the historical corpus output depends on the additive values.
pub fn roman_to_int(token: &str) -> Option<u32> {
    let mut total: u32 = 0;
    for ch in token.chars() {
        total += match ch.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => 0,
        };
    }
    (total > 0).then_some(total)
}
