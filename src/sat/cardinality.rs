//! Cardinality constraints compiled to CNF
//!
//! CaDiCaL accepts plain clauses only, so "at least k of n" and "at most k
//! of n" are compiled with a two-sided sequential counter: for each prefix
//! of the literal list, register variables `s[i][j]` hold "at least j of
//! the first i literals are true", defined in both directions:
//!
//! ```text
//! s[i][j] <-> s[i-1][j] OR (x_i AND s[i-1][j-1])
//! ```
//!
//! The final registers `s[n][1..=k]` are usable as output literals, which
//! is what the transition encoder needs: the Game of Life formula tests
//! three thresholds (2, 3, 4) over the same neighbor set.

use super::constraints::Clause;

/// Allocates auxiliary solver variables past the cell variable range.
#[derive(Debug)]
pub struct AuxAllocator {
    next: i32,
}

impl AuxAllocator {
    /// Start allocating at `first_free` (one past the highest reserved id)
    pub fn new(first_free: i32) -> Self {
        Self { next: first_free }
    }

    pub fn fresh(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Highest variable id handed out so far, or `first_free - 1` if none
    pub fn high_water(&self) -> i32 {
        self.next - 1
    }
}

/// Emit a counter over `lits` and return the output literals for
/// `AtLeast(lits, j)` for `j = 1..=max_k`. `outputs[j - 1]` is `None` when
/// the threshold is unreachable (`j > lits.len()`), i.e. constant false.
pub fn at_least_thresholds(
    lits: &[i32],
    max_k: usize,
    aux: &mut AuxAllocator,
    clauses: &mut Vec<Clause>,
) -> Vec<Option<i32>> {
    let mut prev: Vec<Option<i32>> = vec![None; max_k];

    for &x in lits {
        let mut cur: Vec<Option<i32>> = vec![None; max_k];

        for j in 1..=max_k {
            if j == 1 {
                // s[i][1] <-> s[i-1][1] OR x_i; for the first literal the
                // register is the literal itself.
                match prev[0] {
                    None => cur[0] = Some(x),
                    Some(carry) => {
                        let s = aux.fresh();
                        clauses.push(Clause::binary(-carry, s));
                        clauses.push(Clause::binary(-x, s));
                        clauses.push(Clause::new(vec![-s, carry, x]));
                        cur[0] = Some(s);
                    }
                }
                continue;
            }

            // s[i-1][j-1]: without it the threshold is unreachable here.
            // prev[j-1] being Some implies prev[j-2] is Some, so the carry
            // never exists without the step input.
            if let Some(step) = prev[j - 2] {
                let s = aux.fresh();
                clauses.push(Clause::new(vec![-x, -step, s]));
                match prev[j - 1] {
                    Some(carry) => {
                        clauses.push(Clause::binary(-carry, s));
                        clauses.push(Clause::new(vec![-s, carry, x]));
                        clauses.push(Clause::new(vec![-s, carry, step]));
                    }
                    None => {
                        clauses.push(Clause::binary(-s, x));
                        clauses.push(Clause::binary(-s, step));
                    }
                }
                cur[j - 1] = Some(s);
            }
        }

        prev = cur;
    }

    prev
}

/// Emit clauses equivalent to "at most `k` of `lits` are true"
pub fn at_most(lits: &[i32], k: usize, aux: &mut AuxAllocator, clauses: &mut Vec<Clause>) {
    if k >= lits.len() {
        return;
    }

    if k == 0 {
        for &lit in lits {
            clauses.push(Clause::unit(-lit));
        }
        return;
    }

    let outputs = at_least_thresholds(lits, k + 1, aux, clauses);
    if let Some(exceeded) = outputs[k] {
        clauses.push(Clause::unit(-exceeded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadical::Solver;

    fn solver_with(clauses: &[Clause]) -> Solver {
        let mut solver = Solver::new();
        for clause in clauses {
            solver.add_clause(clause.literals.iter().copied());
        }
        solver
    }

    #[test]
    fn test_threshold_outputs_track_true_count() {
        let lits = vec![1, 2, 3];
        let mut aux = AuxAllocator::new(4);
        let mut clauses = Vec::new();
        let outs = at_least_thresholds(&lits, 3, &mut aux, &mut clauses);

        // Fix exactly two of three inputs true
        clauses.push(Clause::unit(1));
        clauses.push(Clause::unit(2));
        clauses.push(Clause::unit(-3));

        let mut solver = solver_with(&clauses);
        assert_eq!(solver.solve(), Some(true));

        assert_eq!(solver.value(outs[0].unwrap()), Some(true)); // >= 1
        assert_eq!(solver.value(outs[1].unwrap()), Some(true)); // >= 2
        assert_eq!(solver.value(outs[2].unwrap()), Some(false)); // >= 3
    }

    #[test]
    fn test_unreachable_thresholds_are_none() {
        let lits = vec![1, 2];
        let mut aux = AuxAllocator::new(3);
        let mut clauses = Vec::new();
        let outs = at_least_thresholds(&lits, 4, &mut aux, &mut clauses);

        assert!(outs[0].is_some());
        assert!(outs[1].is_some());
        assert!(outs[2].is_none());
        assert!(outs[3].is_none());

        let outs = at_least_thresholds(&[], 2, &mut aux, &mut clauses);
        assert_eq!(outs, vec![None, None]);
    }

    #[test]
    fn test_forcing_output_forces_inputs() {
        // Forcing ">= 2 of 3" true and one input false leaves exactly one
        // model shape: both remaining inputs true.
        let lits = vec![1, 2, 3];
        let mut aux = AuxAllocator::new(4);
        let mut clauses = Vec::new();
        let outs = at_least_thresholds(&lits, 2, &mut aux, &mut clauses);

        clauses.push(Clause::unit(outs[1].unwrap()));
        clauses.push(Clause::unit(-1));

        let mut solver = solver_with(&clauses);
        assert_eq!(solver.solve(), Some(true));
        assert_eq!(solver.value(2), Some(true));
        assert_eq!(solver.value(3), Some(true));
    }

    #[test]
    fn test_at_most_violated_is_unsat() {
        let lits = vec![1, 2, 3];
        let mut aux = AuxAllocator::new(4);
        let mut clauses = Vec::new();
        at_most(&lits, 1, &mut aux, &mut clauses);

        clauses.push(Clause::unit(1));
        clauses.push(Clause::unit(2));

        let mut solver = solver_with(&clauses);
        assert_eq!(solver.solve(), Some(false));
    }

    #[test]
    fn test_at_most_satisfied_within_bound() {
        let lits = vec![1, 2, 3];
        let mut aux = AuxAllocator::new(4);
        let mut clauses = Vec::new();
        at_most(&lits, 2, &mut aux, &mut clauses);

        clauses.push(Clause::unit(1));
        clauses.push(Clause::unit(2));

        let mut solver = solver_with(&clauses);
        assert_eq!(solver.solve(), Some(true));
        assert_eq!(solver.value(3), Some(false));
    }

    #[test]
    fn test_at_most_zero_is_unit_negations() {
        let lits = vec![1, 2];
        let mut aux = AuxAllocator::new(3);
        let mut clauses = Vec::new();
        at_most(&lits, 0, &mut aux, &mut clauses);

        assert_eq!(clauses.len(), 2);
        assert!(clauses.contains(&Clause::unit(-1)));
        assert!(clauses.contains(&Clause::unit(-2)));
        assert_eq!(aux.high_water(), 2); // no auxiliaries allocated
    }

    #[test]
    fn test_at_most_trivial_bound_emits_nothing() {
        let lits = vec![1, 2];
        let mut aux = AuxAllocator::new(3);
        let mut clauses = Vec::new();
        at_most(&lits, 2, &mut aux, &mut clauses);
        at_most(&lits, 5, &mut aux, &mut clauses);

        assert!(clauses.is_empty());
    }
}
