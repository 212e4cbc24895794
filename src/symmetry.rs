//! Permutation and sign-flip orbits of generator points.
//!
//! Fully symmetric cubature formulas are tabulated as a handful of generator
//! points, one per orbit. Expanding a generator into every point reachable by
//! permuting coordinates and flipping signs of the nonzero coordinates is what
//! keeps the published tables compact, and it is the combinatorial core of
//! this crate.

/// Every distinct permutation of `values`, exactly once.
///
/// The input is treated as a multiset: repeated values do not produce
/// repeated permutations. Values are grouped into `(value, count)` pairs and
/// each group in turn claims every combination of the still-empty slots of
/// every partial arrangement, so the cost is proportional to the number of
/// distinct permutations (`n! / prod(count_i!)`) rather than `n!`.
pub fn distinct_permutations<T: Clone + PartialEq>(values: &[T]) -> Vec<Vec<T>> {
    let mut groups: Vec<(&T, usize)> = Vec::new();
    for value in values {
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((value, 1)),
        }
    }

    let mut templates: Vec<Vec<Option<T>>> = vec![vec![None; values.len()]];
    for (value, count) in groups {
        let mut filled = Vec::new();
        for template in &templates {
            let open: Vec<usize> = template
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_none())
                .map(|(i, _)| i)
                .collect();
            for slots in combinations(&open, count) {
                let mut next = template.clone();
                for i in slots {
                    next[i] = Some(value.clone());
                }
                filled.push(next);
            }
        }
        templates = filled;
    }

    // every slot is filled once all groups are placed
    templates
        .into_iter()
        .map(|template| template.into_iter().flatten().collect())
        .collect()
}

/// Sign-flip orbit of a magnitude vector.
///
/// Each nonzero entry contributes the choice `{v, -v}`; zero entries keep a
/// single sign, so the orbit has `2^(nonzero count)` points and contains no
/// duplicates. Position order is significant and preserved.
pub fn sign_orbit(magnitudes: &[f64]) -> Vec<Vec<f64>> {
    cartesian_product(&sign_choices(magnitudes))
}

/// Full symmetric orbit of a generator point: every coordinate permutation
/// combined with every sign assignment of the nonzero coordinates.
///
/// The permutation step runs over the per-position sign-choice sets rather
/// than the raw coordinates, so two positions are interchangeable exactly
/// when their magnitudes are equal (zeros included). Each arrangement then
/// expands to its sign combinations; arrangements are pairwise distinct, so
/// the union needs no deduplication. Orbit size is the distinct-permutation
/// count of the magnitudes times `2^(nonzero count)`.
pub fn full_symmetric_orbit(generator: &[f64]) -> Vec<Vec<f64>> {
    distinct_permutations(&sign_choices(generator))
        .iter()
        .flat_map(|arrangement| cartesian_product(arrangement))
        .collect()
}

fn sign_choices(magnitudes: &[f64]) -> Vec<Vec<f64>> {
    magnitudes
        .iter()
        .map(|&x| if x == 0.0 { vec![x] } else { vec![x, -x] })
        .collect()
}

fn cartesian_product(choices: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut points: Vec<Vec<f64>> = vec![Vec::with_capacity(choices.len())];
    for axis in choices {
        let mut extended = Vec::with_capacity(points.len() * axis.len());
        for prefix in &points {
            for &value in axis {
                let mut point = prefix.clone();
                point.push(value);
                extended.push(point);
            }
        }
        points = extended;
    }
    points
}

/// All `k`-element choices from `pool`, in lexicographic order.
fn combinations(pool: &[usize], k: usize) -> Vec<Vec<usize>> {
    let n = pool.len();
    if k > n {
        return Vec::new();
    }
    let mut idx: Vec<usize> = (0..k).collect();
    let mut out = Vec::new();
    loop {
        out.push(idx.iter().map(|&i| pool[i]).collect());
        // rightmost cursor that can still advance
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
