//! In-place stable merge sort over an inclusive index range.

/// Sort the whole slice. Empty and single-element slices are a no-op.
pub fn sort<T: Ord + Copy>(values: &mut [T]) {
    if values.len() > 1 {
        merge_sort(values, 0, values.len() - 1);
    }
}

/// Sort `values[lo..=hi]` in place by recursive divide-and-conquer.
///
/// Stable: the merge step takes the left element on ties, so equal keys keep
/// their relative input order.
pub fn merge_sort<T: Ord + Copy>(values: &mut [T], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    merge_sort(values, lo, mid);
    merge_sort(values, mid + 1, hi);
    merge(values, lo, mid, hi);
}

/// Merge the two sorted halves `values[lo..=mid]` and `values[mid+1..=hi]`
/// through a temporary buffer sized to the range.
fn merge<T: Ord + Copy>(values: &mut [T], lo: usize, mid: usize, hi: usize) {
    let mut temp = Vec::with_capacity(hi - lo + 1);
    let mut i = lo;
    let mut j = mid + 1;

    while i <= mid && j <= hi {
        if values[i] <= values[j] {
            temp.push(values[i]);
            i += 1;
        } else {
            temp.push(values[j]);
            j += 1;
        }
    }
    while i <= mid {
        temp.push(values[i]);
        i += 1;
    }
    while j <= hi {
        temp.push(values[j]);
        j += 1;
    }

    values[lo..=hi].copy_from_slice(&temp);
}
