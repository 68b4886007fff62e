//! Category slug normalisation and validation.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and single hyphens. [`slugify`] derives one from a
//! human-readable category name; [`is_valid_slug`] checks an existing value.

const SEPARATOR: char = '-';

/// Normalise a category name into a URL-safe slug.
///
/// The name is lowercased, an `&` with whitespace on both sides becomes the
/// word `and`, every run of characters outside `[a-z0-9]` collapses into a
/// single hyphen, and leading or trailing hyphens are dropped. Any other `&`,
/// including one at the very start or end of the name, is an ordinary
/// separator. Applying the function to its own output returns the same value.
///
/// # Examples
/// ```
/// use storefront::domain::slugify;
///
/// assert_eq!(slugify("Shoes & Bags"), "shoes-and-bags");
/// assert_eq!(slugify("R&D"), "r-d");
/// assert_eq!(slugify("  Men's  T-Shirts!! "), "men-s-t-shirts");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    let chars: Vec<char> = name.chars().flat_map(char::to_lowercase).collect();
    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            push_word_char(&mut slug, &mut pending_separator, ch);
        } else if ch == '&' && is_spaced(&chars, index) {
            pending_separator = true;
            for word_ch in "and".chars() {
                push_word_char(&mut slug, &mut pending_separator, word_ch);
            }
            pending_separator = true;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// `true` when the character at `index` has whitespace on both sides.
fn is_spaced(chars: &[char], index: usize) -> bool {
    let before = index.checked_sub(1).and_then(|prev| chars.get(prev));
    let after = chars.get(index + 1);
    matches!((before, after), (Some(b), Some(a)) if b.is_whitespace() && a.is_whitespace())
}

fn push_word_char(slug: &mut String, pending_separator: &mut bool, ch: char) {
    if *pending_separator && !slug.is_empty() {
        slug.push(SEPARATOR);
    }
    *pending_separator = false;
    slug.push(ch);
}

/// Return `true` when `value` is a valid slug.
pub fn is_valid_slug(value: &str) -> bool {
    is_trimmed_non_empty(value) && has_allowed_slug_chars(value) && has_clean_separators(value)
}

fn is_trimmed_non_empty(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == SEPARATOR)
}

fn has_clean_separators(value: &str) -> bool {
    !value.starts_with(SEPARATOR) && !value.ends_with(SEPARATOR) && !value.contains("--")
}
