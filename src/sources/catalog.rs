// src/sources/catalog.rs

/// Project Gutenberg plain-text mirror of the King James Version (ebook id 10).
pub const KJV_TEXT_URL: &str = "https://www.gutenberg.org/cache/epub/10/pg10.txt";

/// Project Gutenberg plain-text mirror of the Book of Mormon (ebook id 17).
pub const BOOK_OF_MORMON_TEXT_URL: &str = "https://www.gutenberg.org/cache/epub/17/pg17.txt";

/// Base URL of the official study-site scripture pages.
pub const STUDY_SITE_BASE: &str = "https://www.churchofjesuschrist.org/study/scriptures";

/// Sample Doctrine & Covenants / Pearl of Great Price page fragments.
/// A full run would enumerate every section; these cover a representative
/// handful and can be overridden from the command line.
pub fn default_study_fragments() -> Vec<String> {
    [
        "dc/4?lang=eng",
        "dc/6?lang=eng",
        "pgp/moses/1?lang=eng",
        "pgp/abr/3?lang=eng",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Resolves a study-page fragment path against the study-site base.
pub fn study_page_url(fragment: &str) -> String {
    format!("{}/{}", STUDY_SITE_BASE, fragment.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_page_url_join() {
        assert_eq!(
            study_page_url("dc/4?lang=eng"),
            "https://www.churchofjesuschrist.org/study/scriptures/dc/4?lang=eng"
        );
        // A leading slash must not produce a double separator
        assert_eq!(
            study_page_url("/dc/4?lang=eng"),
            "https://www.churchofjesuschrist.org/study/scriptures/dc/4?lang=eng"
        );
    }

    #[test]
    fn test_default_fragments_are_nonempty() {
        let frags = default_study_fragments();
        assert_eq!(frags.len(), 4);
        assert!(frags.iter().all(|f| !f.is_empty()));
    }
}
