use std::fmt::{Display, Write};

/// Concatenates the [`Display`] output of each element of `items`, placing `separator` between
/// consecutive elements.
///
/// A `None` slice produces an empty string and a `None` separator is treated as `""`. A `None`
/// element contributes no text of its own but still takes up a position, so the separators around
/// it are kept.
///
/// # Examples
/// ```
/// # use arputil::arrays::join;
/// assert_eq!(join(Some(&[Some("a"), None, Some("c")][..]), Some("-")), "a--c");
/// assert_eq!(join::<&str>(None, Some("-")), "");
/// assert_eq!(join(Some(&[Some(1), Some(2)][..]), None), "12");
/// ```
pub fn join<T: Display>(items: Option<&[Option<T>]>, separator: Option<&str>) -> String {
    match items {
        Some(items) => join_with(items, separator.unwrap_or(""), |buf, item| {
            if let Some(item) = item {
                push_display(buf, item);
            }
        }),
        None => String::new(),
    }
}

/// The same as [`join`], for slices where no element can be absent, such as numbers. Every element
/// is rendered using its [`Display`] implementation.
///
/// # Examples
/// ```
/// # use arputil::arrays::join_values;
/// assert_eq!(join_values(Some(&[1.5, 2.0, -3.25][..]), Some(", ")), "1.5, 2, -3.25");
/// ```
pub fn join_values<T: Display>(items: Option<&[T]>, separator: Option<&str>) -> String {
    match items {
        Some(items) => join_with(items, separator.unwrap_or(""), push_display),
        None => String::new(),
    }
}

/// Formats a slice the way a list's debug output looks: `[a, b, c]`. Returns `"null"` if `items`
/// is `None`.
///
/// # Examples
/// ```
/// # use arputil::arrays::format;
/// assert_eq!(format(Some(&[Some(1), Some(2)][..])), "[1, 2]");
/// assert_eq!(format::<u8>(Some(&[][..])), "[]");
/// assert_eq!(format::<u8>(None), "null");
/// ```
pub fn format<T: Display>(items: Option<&[Option<T>]>) -> String {
    match items {
        Some(_) => format!("[{}]", join(items, Some(", "))),
        None => String::from("null"),
    }
}

fn join_with<T>(items: &[T], separator: &str, mut render: impl FnMut(&mut String, &T)) -> String {
    let mut buf = String::with_capacity(items.len() * 4);
    for (i, item) in items.iter().enumerate() {
        render(&mut buf, item);
        if i + 1 < items.len() {
            buf.push_str(separator);
        }
    }
    buf
}

fn push_display<T: Display>(buf: &mut String, item: &T) {
    // Writing into a String never fails.
    let _ = write!(buf, "{item}");
}
