use std::hash::Hash;

use hashbrown::HashSet;

/// Returns the index and value of the greatest element. Ties resolve to the first occurrence.
///
/// ```
/// use assist_common::utils::generics::find_max;
///
/// assert_eq!(find_max(&[3, 9, 1, 9]), Some((1, &9)));
/// assert_eq!(find_max::<i32>(&[]), None);
/// ```
pub fn find_max<T: PartialOrd>(values: &[T]) -> Option<(usize, &T)> {
    let mut best: Option<(usize, &T)> = None;
    for (index, value) in values.iter().enumerate() {
        if best.map_or(true, |(_, current)| value > current) {
            best = Some((index, value));
        }
    }
    best
}

/// Returns the index and value of the smallest element. Ties resolve to the first occurrence.
pub fn find_min<T: PartialOrd>(values: &[T]) -> Option<(usize, &T)> {
    let mut best: Option<(usize, &T)> = None;
    for (index, value) in values.iter().enumerate() {
        if best.map_or(true, |(_, current)| value < current) {
            best = Some((index, value));
        }
    }
    best
}

/// Returns the index of the first element equal to `needle`.
pub fn index_of<T: PartialEq>(values: &[T], needle: &T) -> Option<usize> {
    values.iter().position(|value| value == needle)
}

/// Returns the distinct elements of `values`, in order of first occurrence.
///
/// ```
/// use assist_common::utils::generics::unique;
///
/// assert_eq!(unique(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// ```
pub fn unique<T: Clone + Eq + Hash>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().filter(|value| seen.insert(*value)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use crate::utils::generics::*;

    #[test]
    fn test_find_max_and_min() {
        let values = [4.5, -1.0, 8.25, 8.25, -1.0];
        assert_eq!(find_max(&values), Some((2, &8.25)));
        assert_eq!(find_min(&values), Some((1, &-1.0)));
        assert_eq!(find_min::<u8>(&[]), None);
    }

    #[test]
    fn test_find_max_strings() {
        let values = ["pear", "apple", "zucchini"];
        assert_eq!(find_max(&values), Some((2, &"zucchini")));
        assert_eq!(find_min(&values), Some((1, &"apple")));
    }

    #[test]
    fn test_index_of() {
        let values = vec![10, 20, 30, 20];
        assert_eq!(index_of(&values, &20), Some(1));
        assert_eq!(index_of(&values, &40), None);
    }

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 1, 2, 3, 2, 1]), vec![1, 2, 3]);
        assert!(unique::<u32>(&[]).is_empty());
    }
}
