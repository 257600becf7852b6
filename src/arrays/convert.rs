use std::collections::HashSet;

use crate::util::error::{CapacityOverflow, InvalidArgumentError, ListError};

/// Collects the unique strings in `items` into a [`HashSet`]. Returns `None` if `items` is `None`.
///
/// # Examples
/// ```
/// # use arputil::arrays::as_set;
/// let set = as_set(Some(&["a", "b", "a"][..])).unwrap();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a") && set.contains("b"));
/// ```
pub fn as_set<S: AsRef<str>>(items: Option<&[S]>) -> Option<HashSet<String>> {
    items.map(|items| items.iter().map(|item| item.as_ref().to_owned()).collect())
}

/// Appends a clone of every element of every slice in `arrays` to `collection`, slice by slice and
/// in element order.
///
/// Unlike [`as_list`], this performs no check on the slices themselves: absent slices can't be
/// expressed here at all.
///
/// # Errors
/// Returns [`InvalidArgumentError`] if `collection` is `None`.
pub fn add_all<T, C>(
    collection: Option<&mut C>,
    arrays: &[&[T]],
) -> Result<(), InvalidArgumentError>
where
    T: Clone,
    C: Extend<T>,
{
    let collection = collection.ok_or(InvalidArgumentError("collection cannot be null"))?;
    for array in arrays {
        collection.extend(array.iter().cloned());
    }
    Ok(())
}

/// Builds a new [`Vec`] holding the elements of every slice in `arrays`, in order. The [`Vec`] is
/// allocated up front with the combined length of all slices.
///
/// # Errors
/// - [`ListError::InvalidArgument`] if any of the slices is `None`.
/// - [`ListError::CapacityOverflow`] if the combined length doesn't fit in a `usize`.
///
/// The list itself is only allocated once every slice has been checked.
///
/// # Examples
/// ```
/// # use arputil::arrays::as_list;
/// let list = as_list(&[Some(&["a"][..]), Some(&["b", "c"][..])]).unwrap();
/// assert_eq!(list, ["a", "b", "c"]);
/// assert!(as_list::<&str>(&[Some(&["a"][..]), None]).is_err());
/// ```
pub fn as_list<T: Clone>(arrays: &[Option<&[T]>]) -> Result<Vec<T>, ListError> {
    let mut size = 0;
    let mut present = Vec::with_capacity(arrays.len());
    for &array in arrays {
        let array = array.ok_or(InvalidArgumentError("Null arrays not allowed"))?;
        size = usize::checked_add(size, array.len()).ok_or(CapacityOverflow)?;
        present.push(array);
    }

    let mut result = Vec::with_capacity(size);
    add_all(Some(&mut result), &present)?;
    Ok(result)
}
