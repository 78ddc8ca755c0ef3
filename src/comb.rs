//! Combinatorics. Permutations and combinations are enumerated as ordinal vectors (positions
//! into some slice of items) in lexicographic order, which fixes the tie-breaking order of
//! every exhaustive search built on them.

/// `n!`, saturating at [u64::MAX].
pub fn count_permutations(n: usize) -> u64 {
    (2..=n as u64).fold(1u64, |product, i| product.saturating_mul(i))
}

/// The binomial coefficient _C(n, r)_.
pub fn count_combinations(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    let r = usize::min(r, n - r) as u64;
    let n = n as u64;
    (0..r).fold(1u64, |product, i| product * (n - i) / (i + 1))
}

/// Writes `items[ordinals[i]]` into `arrangement[i]` for each `i`.
#[inline(always)]
pub fn arrange<T: Copy>(items: &[T], ordinals: &[usize], arrangement: &mut [T]) {
    for (slot, &ordinal) in arrangement.iter_mut().zip(ordinals) {
        *slot = items[ordinal];
    }
}

/// All orderings of `n` items.
pub struct Permuter {
    n: usize,
}
impl Permuter {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn count(&self) -> u64 {
        count_permutations(self.n)
    }
}

impl IntoIterator for Permuter {
    type Item = Vec<usize>;
    type IntoIter = PermutationIter;

    fn into_iter(self) -> Self::IntoIter {
        PermutationIter {
            ordinals: (0..self.n).collect(),
            exhausted: false,
        }
    }
}

pub struct PermutationIter {
    ordinals: Vec<usize>,
    exhausted: bool,
}
impl Iterator for PermutationIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.ordinals.clone();
        self.exhausted = !next_permutation(&mut self.ordinals);
        Some(current)
    }
}

/// Advances `ordinals` to its lexicographic successor, returning `false` once the last
/// (descending) arrangement has been reached.
fn next_permutation(ordinals: &mut [usize]) -> bool {
    let len = ordinals.len();
    if len < 2 {
        return false;
    }
    let mut pivot = len - 1;
    while pivot > 0 && ordinals[pivot - 1] >= ordinals[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let mut successor = len - 1;
    while ordinals[successor] <= ordinals[pivot - 1] {
        successor -= 1;
    }
    ordinals.swap(pivot - 1, successor);
    ordinals[pivot..].reverse();
    true
}

/// All `r`-subsets of `n` items, each in ascending order.
pub struct Combinator {
    n: usize,
    r: usize,
}
impl Combinator {
    pub fn new(n: usize, r: usize) -> Self {
        Self { n, r }
    }

    pub fn count(&self) -> u64 {
        count_combinations(self.n, self.r)
    }
}

impl IntoIterator for Combinator {
    type Item = Vec<usize>;
    type IntoIter = CombinationIter;

    fn into_iter(self) -> Self::IntoIter {
        CombinationIter {
            n: self.n,
            ordinals: (0..self.r).collect(),
            exhausted: self.r > self.n,
        }
    }
}

pub struct CombinationIter {
    n: usize,
    ordinals: Vec<usize>,
    exhausted: bool,
}
impl Iterator for CombinationIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.ordinals.clone();

        // rightmost ordinal that has not reached its ceiling
        let r = self.ordinals.len();
        let mut index = r;
        while index > 0 && self.ordinals[index - 1] == self.n - r + index - 1 {
            index -= 1;
        }
        if index == 0 {
            self.exhausted = true;
        } else {
            self.ordinals[index - 1] += 1;
            for following in index..r {
                self.ordinals[following] = self.ordinals[following - 1] + 1;
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_permutations() {
        assert_eq!(1, count_permutations(0));
        assert_eq!(1, count_permutations(1));
        assert_eq!(120, count_permutations(5));
        assert_eq!(40_320, count_permutations(8));
        assert_eq!(u64::MAX, count_permutations(30));
    }

    #[test]
    fn test_count_combinations() {
        assert_eq!(1, count_combinations(5, 0));
        assert_eq!(5, count_combinations(5, 1));
        assert_eq!(1, count_combinations(5, 5));
        assert_eq!(10, count_combinations(5, 3));
        assert_eq!(6, count_combinations(6, 5));
        assert_eq!(120, count_combinations(10, 3));
        assert_eq!(0, count_combinations(3, 4));
    }

    #[test]
    fn permutations_in_order() {
        let outputs = Permuter::new(3).into_iter().collect::<Vec<_>>();
        let expected_outputs = vec![
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ]
        .iter()
        .map(|array| array.to_vec())
        .collect::<Vec<_>>();
        assert_eq!(expected_outputs, outputs);
    }

    #[test]
    fn permutations_counted() {
        for n in 0..=6 {
            let permuter = Permuter::new(n);
            let expected = permuter.count();
            assert_eq!(expected, permuter.into_iter().count() as u64, "n = {n}");
        }
    }

    #[test]
    fn permutations_unique() {
        let mut outputs = Permuter::new(5).into_iter().collect::<Vec<_>>();
        assert_eq!(120, outputs.len());
        outputs.sort();
        outputs.dedup();
        assert_eq!(120, outputs.len());
    }

    #[test]
    fn combinations_in_order() {
        let outputs = Combinator::new(4, 2).into_iter().collect::<Vec<_>>();
        let expected_outputs = vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
            .iter()
            .map(|array| array.to_vec())
            .collect::<Vec<_>>();
        assert_eq!(expected_outputs, outputs);

        let outputs = Combinator::new(6, 5).into_iter().collect::<Vec<_>>();
        assert_eq!(
            vec![
                vec![0, 1, 2, 3, 4],
                vec![0, 1, 2, 3, 5],
                vec![0, 1, 2, 4, 5],
                vec![0, 1, 3, 4, 5],
                vec![0, 2, 3, 4, 5],
                vec![1, 2, 3, 4, 5],
            ],
            outputs
        );
    }

    #[test]
    fn combinations_edge_cases() {
        assert_eq!(vec![Vec::<usize>::new()], Combinator::new(3, 0).into_iter().collect::<Vec<_>>());
        assert_eq!(vec![vec![0, 1, 2]], Combinator::new(3, 3).into_iter().collect::<Vec<_>>());
        assert_eq!(0, Combinator::new(2, 3).into_iter().count());
    }

    #[test]
    fn test_arrange() {
        let items = ['a', 'b', 'c', 'd'];
        let mut arrangement = ['_'; 3];
        arrange(&items, &[3, 0, 2], &mut arrangement);
        assert_eq!(['d', 'a', 'c'], arrangement);
    }
}
