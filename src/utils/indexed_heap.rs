/*!
# Indexed Min-Heap

A binary min-heap with decrease-key that operates directly on a borrowed value
array instead of owning its priorities. The borrow lasts for the heap's
lifetime, so callers keep a single copy of the values (typically a graph's
degree array) while the heap has exclusive access to it.

Two inverse permutations relate external ids to heap slots:

- `slot_of[id]` is the slot currently holding `id`,
- `id_at[slot]` is the id currently stored in `slot`.

Only the first `len` slots form the active heap. Extraction swaps the minimum
into the slot just past the active region and shrinks it, so slots `[len, n)`
hold extracted ids in reverse extraction order and an extracted id's
extraction rank can be recovered from its parked slot.
*/

use num::PrimInt;

use crate::node::*;

/// Min-heap over a borrowed `&mut [V]`, keyed by position: the id of an entry
/// is its index in the original array.
#[derive(Debug)]
pub struct IndexedMinHeap<'a, V>
where
    V: PrimInt,
{
    /// Priorities, permuted in place alongside `id_at`
    values: &'a mut [V],
    /// Inverse of `id_at`
    slot_of: Vec<NumNodes>,
    /// Inverse of `slot_of`
    id_at: Vec<Node>,
    /// Size of the active region; slots beyond it are parked
    len: usize,
}

impl<'a, V> IndexedMinHeap<'a, V>
where
    V: PrimInt,
{
    /// Builds a heap over all entries of `values` in O(n) via bottom-up
    /// sift-down.
    ///
    /// # Panics
    /// Panics if there are more than `Node::MAX` entries.
    pub fn new(values: &'a mut [V]) -> Self {
        let n = values.len();
        assert!(n <= Node::MAX as usize);

        let mut heap = Self {
            values,
            slot_of: (0..n as NumNodes).collect(),
            id_at: (0..n as Node).collect(),
            len: n,
        };

        for slot in (0..n / 2).rev() {
            heap.sift_down(slot);
        }

        heap
    }

    /// Number of not-yet-extracted entries
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if every entry has been extracted
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes and returns the id with the smallest value among the active
    /// entries, or `None` once all entries are extracted. Ties are broken by
    /// slot order, deterministically for fixed heap contents.
    ///
    /// The extracted id is parked in the slot just past the shrunken active
    /// region; its value is left untouched from this point on.
    pub fn pop_min(&mut self) -> Option<Node> {
        if self.len == 0 {
            return None;
        }

        self.swap_slots(0, self.len - 1);
        self.len -= 1;
        self.sift_down(0);

        Some(self.id_at[self.len])
    }

    /// Decrements the value of `id` by one and restores heap order, returning
    /// the slot `id` occupied *before* any movement.
    ///
    /// If `id` has already been extracted, its parked slot (`>= len()`) is
    /// returned and no value is touched, so the caller can distinguish active
    /// from extracted ids by comparing the result against [`len`](Self::len).
    pub fn decrement(&mut self, id: Node) -> usize {
        let slot = self.slot_of[id as usize] as usize;

        if slot < self.len {
            debug_assert!(self.values[slot] > V::zero());
            self.values[slot] = self.values[slot] - V::one();
            self.sift_up(slot);
        }

        slot
    }

    /// Swaps two slots including their permutation entries
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.id_at.swap(a, b);
        self.slot_of[self.id_at[a] as usize] = a as NumNodes;
        self.slot_of[self.id_at[b] as usize] = b as NumNodes;
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.len {
                break;
            }

            let mut smallest = if self.values[left] < self.values[slot] {
                left
            } else {
                slot
            };

            let right = left + 1;
            if right < self.len && self.values[right] < self.values[smallest] {
                smallest = right;
            }

            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.values[slot] < self.values[parent] {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_inverse_permutations<V: PrimInt>(heap: &IndexedMinHeap<'_, V>) {
        for slot in 0..heap.id_at.len() {
            assert_eq!(heap.slot_of[heap.id_at[slot] as usize] as usize, slot);
        }
    }

    #[test]
    fn pops_values_in_sorted_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1usize, 2, 7, 100, 1000] {
            let original: Vec<u32> = (0..n).map(|_| rng.random_range(0..50)).collect();

            let mut values = original.clone();
            let mut heap = IndexedMinHeap::new(&mut values);
            assert_inverse_permutations(&heap);

            let mut popped = Vec::with_capacity(n);
            while let Some(id) = heap.pop_min() {
                popped.push(original[id as usize]);
            }

            assert!(heap.is_empty());
            assert!(heap.pop_min().is_none());

            let mut sorted = original.clone();
            sorted.sort_unstable();
            assert_eq!(popped, sorted);
        }
    }

    #[test]
    fn decrement_repositions() {
        let mut values = vec![5u32, 1, 7];
        let mut heap = IndexedMinHeap::new(&mut values);

        assert_eq!(heap.pop_min(), Some(1));

        // Bring id 2 from 7 down to 2, below id 0's 5
        for _ in 0..5 {
            let slot = heap.decrement(2);
            assert!(slot < 2);
        }
        assert_inverse_permutations(&heap);

        assert_eq!(heap.pop_min(), Some(2));
        assert_eq!(heap.pop_min(), Some(0));
    }

    #[test]
    fn extracted_ids_report_parked_slots() {
        let mut values = vec![3u32, 1, 2];
        let mut heap = IndexedMinHeap::new(&mut values);

        assert_eq!(heap.pop_min(), Some(1));
        assert_eq!(heap.len(), 2);

        // id 1 is parked one past the active region and keeps its value
        let slot = heap.decrement(1);
        assert_eq!(slot, 2);
        assert_eq!(heap.values[slot], 1);

        assert_eq!(heap.pop_min(), Some(2));

        // Parked slots encode reverse extraction order
        let slot = heap.decrement(2);
        assert_eq!(slot, 1);
        let slot = heap.decrement(1);
        assert_eq!(slot, 2);

        assert_eq!(heap.pop_min(), Some(0));
        assert_inverse_permutations(&heap);
    }

    #[test]
    fn randomized_with_decrements() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let n = 300usize;

        // Distinct positive even values; a single decrement keeps them
        // distinct, so the expected extraction order stays fully determined
        let mut original: Vec<u32> = (1..=n as u32).map(|x| 2 * x).collect();
        original.shuffle(rng);

        let mut values = original.clone();
        let mut heap = IndexedMinHeap::new(&mut values);

        let mut adjusted = original.clone();
        for id in 0..n as Node {
            if rng.random_bool(0.5) {
                heap.decrement(id);
                adjusted[id as usize] -= 1;
            }
        }
        assert_inverse_permutations(&heap);

        let mut expected: Vec<Node> = (0..n as Node).collect();
        expected.sort_unstable_by_key(|&id| adjusted[id as usize]);

        let mut popped = Vec::with_capacity(n);
        while let Some(id) = heap.pop_min() {
            popped.push(id);
        }

        assert_eq!(popped, expected);
    }
}
