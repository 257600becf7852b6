use std::ptr;

/// Returns true if `target` is one of the elements of `items`, either as the very same value in
/// memory or by [`PartialEq`]. A `None` target matches a `None` element. Always false if `items` is
/// `None`.
///
/// # Examples
/// ```
/// # use arputil::arrays::contains;
/// let items = [Some("a"), None, Some("b")];
/// assert!(contains(Some(&items[..]), Some(&"b")));
/// assert!(contains(Some(&items[..]), None));
/// assert!(!contains(Some(&items[..]), Some(&"c")));
/// ```
pub fn contains<T: PartialEq>(items: Option<&[Option<T>]>, target: Option<&T>) -> bool {
    items.is_some_and(|items| {
        items.iter().any(|item| match (item.as_ref(), target) {
            (Some(item), Some(target)) => ptr::eq(item, target) || item == target,
            (None, None) => true,
            _ => false,
        })
    })
}
