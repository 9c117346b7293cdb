/// The order a [`Traversal`](super::iter::Traversal) visits storage indices in.
///
/// The linear orders map cursor positions to indices arithmetically and carry
/// no extra state. The remaining orders walk a permutation of all indices
/// computed once, up front, from the sequence contents at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Route {
    /// Insertion order.
    Forward,
    /// Reverse insertion order.
    Backward,
    /// A precomputed permutation of all storage indices.
    Permuted(Vec<usize>),
}

impl Route {
    /// Indices sorted by ascending element value. The sort is stable, so equal
    /// values keep their insertion order.
    pub(super) fn ascending<T: Ord>(items: &[T]) -> Self {
        Self::Permuted(sorted_indices(items))
    }

    /// Indices sorted by descending element value. Equal values still keep
    /// their insertion order, which a plain reversal of the ascending table
    /// would not give.
    pub(super) fn descending<T: Ord>(items: &[T]) -> Self {
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| items[b].cmp(&items[a]));
        Self::Permuted(order)
    }

    /// Smallest, largest, second smallest, second largest and so on inward.
    /// For an odd count the single middle value of the sorted table is emitted
    /// once at the end.
    pub(super) fn side_cross<T: Ord>(items: &[T]) -> Self {
        let sorted = sorted_indices(items);
        let mut order = Vec::with_capacity(sorted.len());

        let mut left = 0;
        let mut right = sorted.len();
        while left < right {
            order.push(sorted[left]);
            left += 1;
            if left < right {
                right -= 1;
                order.push(sorted[right]);
            }
        }

        Self::Permuted(order)
    }

    /// From the middle position outward, alternating left and right. Values
    /// are ignored entirely.
    ///
    /// For odd `len` the walk starts at `mid = len / 2`, then visits
    /// `mid-1, mid+1, mid-2, mid+2, ..`. For even `len` it starts with the two
    /// positions straddling the center, `mid-1` then `mid`, and expands the
    /// same way. A side that runs out is skipped while the other continues.
    pub(super) fn middle_out(len: usize) -> Self {
        let mut order = Vec::with_capacity(len);
        if len == 0 {
            return Self::Permuted(order);
        }

        let mid = len / 2;
        let mut left = mid;
        if len % 2 == 0 {
            order.push(mid - 1);
            left = mid - 1;
        }
        order.push(mid);
        let mut right = mid + 1;

        while left > 0 || right < len {
            if left > 0 {
                left -= 1;
                order.push(left);
            }
            if right < len {
                order.push(right);
                right += 1;
            }
        }

        Self::Permuted(order)
    }

    /// Maps a cursor position to a storage index. The caller guarantees
    /// `cursor < len`.
    #[inline]
    pub(super) fn index_at(&self, cursor: usize, len: usize) -> usize {
        match self {
            Self::Forward => cursor,
            Self::Backward => len - 1 - cursor,
            Self::Permuted(order) => order[cursor],
        }
    }
}

/// Indices of `items` sorted by element value, stable over insertion order.
fn sorted_indices<T: Ord>(items: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[a].cmp(&items[b]));
    order
}

#[cfg(test)]
mod test {
    use super::*;

    fn permutation(route: Route) -> Vec<usize> {
        match route {
            Route::Permuted(order) => order,
            other => panic!("expected a permutation, got {other:?}"),
        }
    }

    #[test]
    fn ascending_sorts_indices() {
        let order = permutation(Route::ascending(&[3, 1, 4, 2]));
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn ascending_is_stable() {
        // Two pairs of equal values, each pair must keep insertion order.
        let order = permutation(Route::ascending(&[2, 1, 2, 1]));
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn descending_sorts_indices() {
        let order = permutation(Route::descending(&[3, 1, 4, 2]));
        assert_eq!(order, vec![2, 0, 3, 1]);
    }

    #[test]
    fn descending_is_stable() {
        let order = permutation(Route::descending(&[2, 1, 2, 1]));
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn side_cross_even() {
        // Sorted values 1,2,3,4 live at indices 1,3,0,2.
        let order = permutation(Route::side_cross(&[3, 1, 4, 2]));
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn side_cross_odd_emits_middle_once() {
        let order = permutation(Route::side_cross(&[3, 1, 4, 2, 5]));
        assert_eq!(order, vec![1, 4, 3, 2, 0]);
    }

    #[test]
    fn side_cross_single() {
        assert_eq!(permutation(Route::side_cross(&[42])), vec![0]);
    }

    #[test]
    fn middle_out_odd() {
        assert_eq!(permutation(Route::middle_out(5)), vec![2, 1, 3, 0, 4]);
        assert_eq!(permutation(Route::middle_out(7)), vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn middle_out_even() {
        assert_eq!(permutation(Route::middle_out(4)), vec![1, 2, 0, 3]);
        assert_eq!(permutation(Route::middle_out(6)), vec![2, 3, 1, 4, 0, 5]);
    }

    #[test]
    fn middle_out_tiny() {
        assert_eq!(permutation(Route::middle_out(0)), Vec::<usize>::new());
        assert_eq!(permutation(Route::middle_out(1)), vec![0]);
        assert_eq!(permutation(Route::middle_out(2)), vec![0, 1]);
    }

    #[test]
    fn linear_index_mapping() {
        assert_eq!(Route::Forward.index_at(0, 4), 0);
        assert_eq!(Route::Forward.index_at(3, 4), 3);
        assert_eq!(Route::Backward.index_at(0, 4), 3);
        assert_eq!(Route::Backward.index_at(3, 4), 0);
    }
}
