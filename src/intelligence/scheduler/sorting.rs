// ABOUTME: Pareto dominance, fast non-dominated sorting and crowding distance
// ABOUTME: Ranking metadata is kept in arrays indexed by population position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

/// Whether `a` Pareto-dominates `b` under maximisation
#[must_use]
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (x, y) in a.iter().zip(b) {
        if x < y {
            return false;
        }
        if x > y {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Partition individuals into fronts; front 0 is non-dominated
///
/// Returns the fronts as lists of indices into `objectives`, in rank order.
#[must_use]
pub fn fast_non_dominated_sort(objectives: &[Vec<f64>]) -> Vec<Vec<usize>> {
    let n = objectives.len();
    let mut domination_sets: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut dominated_count = vec![0_usize; n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for p in 0..n {
        for q in 0..n {
            if p == q {
                continue;
            }
            if dominates(&objectives[p], &objectives[q]) {
                domination_sets[p].push(q);
            } else if dominates(&objectives[q], &objectives[p]) {
                dominated_count[p] += 1;
            }
        }
        if dominated_count[p] == 0 {
            current.push(p);
        }
    }

    while !current.is_empty() {
        let mut next = Vec::new();
        for &p in &current {
            for &q in &domination_sets[p] {
                dominated_count[q] -= 1;
                if dominated_count[q] == 0 {
                    next.push(q);
                }
            }
        }
        fronts.push(current);
        current = next;
    }
    fronts
}

/// Crowding distance of each front member, aligned with `front`
///
/// Objective extremes get `+inf`. Objectives with no spread inside the
/// front are skipped.
#[must_use]
pub fn crowding_distance(front: &[usize], objectives: &[Vec<f64>]) -> Vec<f64> {
    let mut distance = vec![0.0; front.len()];
    let Some(first) = front.first() else {
        return distance;
    };
    let dimensions = objectives[*first].len();

    // positions into `front`, reordered per objective
    let mut order: Vec<usize> = (0..front.len()).collect();
    for m in 0..dimensions {
        order.sort_by(|&a, &b| {
            objectives[front[a]][m]
                .partial_cmp(&objectives[front[b]][m])
                .unwrap_or(Ordering::Equal)
        });
        let (Some(&lowest), Some(&highest)) = (order.first(), order.last()) else {
            continue;
        };
        let min = objectives[front[lowest]][m];
        let max = objectives[front[highest]][m];
        let range = max - min;
        if range <= 0.0 || !range.is_finite() {
            continue;
        }

        distance[lowest] = f64::INFINITY;
        distance[highest] = f64::INFINITY;
        for window in order.windows(3) {
            let (prev, mid, next) = (window[0], window[1], window[2]);
            if distance[mid].is_finite() {
                distance[mid] += (objectives[front[next]][m] - objectives[front[prev]][m]) / range;
            }
        }
    }
    distance
}

/// Per-generation ranking scratch, indexed by population position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Fronts in rank order
    pub fronts: Vec<Vec<usize>>,
    /// Front index of each individual
    pub ranks: Vec<usize>,
    /// Crowding distance of each individual within its front
    pub crowding: Vec<f64>,
}

impl Ranking {
    /// Rank a population from its objective vectors
    #[must_use]
    pub fn compute(objectives: &[Vec<f64>]) -> Self {
        let fronts = fast_non_dominated_sort(objectives);
        let mut ranks = vec![0; objectives.len()];
        let mut crowding = vec![0.0; objectives.len()];
        for (rank, front) in fronts.iter().enumerate() {
            let distances = crowding_distance(front, objectives);
            for (&index, distance) in front.iter().zip(distances) {
                ranks[index] = rank;
                crowding[index] = distance;
            }
        }
        Self {
            fronts,
            ranks,
            crowding,
        }
    }

    /// Size of the Pareto front
    #[must_use]
    pub fn pareto_front_size(&self) -> usize {
        self.fronts.first().map_or(0, Vec::len)
    }

    /// Lower rank first, then larger crowding distance
    #[must_use]
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.ranks[a].cmp(&self.ranks[b]).then_with(|| {
            self.crowding[b]
                .partial_cmp(&self.crowding[a])
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Fill up to `cap` survivors front by front
    ///
    /// The front that would overflow is cut by descending crowding distance.
    #[must_use]
    pub fn select_survivors(&self, cap: usize) -> Vec<usize> {
        let mut survivors = Vec::with_capacity(cap);
        for front in &self.fronts {
            let remaining = cap - survivors.len();
            if remaining == 0 {
                break;
            }
            if front.len() <= remaining {
                survivors.extend_from_slice(front);
                continue;
            }
            let mut cut = front.clone();
            cut.sort_by(|&a, &b| {
                self.crowding[b]
                    .partial_cmp(&self.crowding[a])
                    .unwrap_or(Ordering::Equal)
            });
            survivors.extend_from_slice(&cut[..remaining]);
            break;
        }
        survivors
    }
}
