use crate::util::error::IndexOutOfBounds;

/// Copies every row of `src` into the start of the matching row of `dest`, cloning each element.
/// Nothing happens if either argument is `None`.
///
/// Rows of `dest` are never resized. Rows are copied in order and each one is checked before it is
/// written, so when a destination row is too short (or `dest` has too few rows) an error is
/// returned after all earlier rows have already been copied.
///
/// # Errors
/// Returns [`IndexOutOfBounds`] if `dest` has fewer rows than `src`, or if any row of `dest` is
/// shorter than the corresponding row of `src`.
///
/// # Examples
/// ```
/// # use arputil::arrays::matrix_copy;
/// let src = vec![vec![1, 2], vec![3]];
/// let mut dest = vec![vec![0, 0, 0], vec![0, 0]];
/// matrix_copy(Some(&src[..]), Some(&mut dest[..])).unwrap();
/// assert_eq!(dest, [vec![1, 2, 0], vec![3, 0]]);
/// ```
pub fn matrix_copy<T, S, D>(
    src: Option<&[S]>,
    dest: Option<&mut [D]>,
) -> Result<(), IndexOutOfBounds>
where
    T: Clone,
    S: AsRef<[T]>,
    D: AsMut<[T]>,
{
    let (Some(src), Some(dest)) = (src, dest) else {
        return Ok(());
    };

    let rows = dest.len();
    for (i, row) in src.iter().enumerate() {
        let row = row.as_ref();
        let dest_row = match dest.get_mut(i) {
            Some(dest_row) => dest_row.as_mut(),
            None => return Err(IndexOutOfBounds { index: i, len: rows }),
        };

        if dest_row.len() < row.len() {
            return Err(IndexOutOfBounds { index: row.len() - 1, len: dest_row.len() });
        }
        dest_row[..row.len()].clone_from_slice(row);
    }
    Ok(())
}

/// Overwrites every element of every present row of `matrix` with a clone of `value`. Nothing
/// happens if `matrix` is `None`, and rows which are `None` are skipped.
///
/// # Examples
/// ```
/// # use arputil::arrays::matrix_fill;
/// let mut matrix = vec![Some(vec![1, 2]), None, Some(vec![3])];
/// matrix_fill(Some(&mut matrix[..]), 7);
/// assert_eq!(matrix, [Some(vec![7, 7]), None, Some(vec![7])]);
/// ```
pub fn matrix_fill<T, R>(matrix: Option<&mut [Option<R>]>, value: T)
where
    T: Clone,
    R: AsMut<[T]>,
{
    if let Some(matrix) = matrix {
        for row in matrix.iter_mut().flatten() {
            row.as_mut().fill(value.clone());
        }
    }
}
