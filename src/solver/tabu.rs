//! Tabu search on the critical-path neighborhood.
//!
//! # Algorithm
//!
//! Each iteration `k`:
//! 1. Cut the critical path of the *current* schedule into blocks.
//! 2. Evaluate every boundary swap whose task pair `(t1, t2)` is allowed
//!    at `k`; keep the valid candidate with the smallest makespan (first
//!    found wins ties).
//! 3. Move to that candidate even when it is worse than the current
//!    schedule.
//! 4. If it beats the global best, record it and forbid the reverse pair
//!    `(t2, t1)` until iteration `k + tenure`.
//!
//! There is no aspiration criterion: a forbidden move stays forbidden
//! even when it would improve the best schedule.
//!
//! # Reference
//! Glover & Laguna (1997), "Tabu Search", Ch. 2

use tracing::{debug, info, trace};

use super::{Deadline, ExitCause, GreedySolver, SolveResult, Solver};
use crate::dispatching::PriorityRule;
use crate::encoding::{Encoding, ResourceOrder};
use crate::models::{Instance, Schedule, Task};
use crate::neighborhood::{blocks_of_critical_path, neighbors, Swap};

/// Forbidden task pairs, stored as a square matrix over task ids.
///
/// `expiry[t1][t2]` is the first iteration at which putting `t2` right
/// after `t1`'s slot by a swap of `(t1, t2)` is legal again. Every entry
/// starts at 0 (always legal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuList {
    num_tasks: usize,
    size: usize,
    tenure: usize,
    expiry: Vec<usize>,
}

impl TabuList {
    /// Creates an empty list sized for the instance.
    pub fn new(instance: &Instance, tenure: usize) -> Self {
        let size = instance.total_tasks();
        Self {
            num_tasks: instance.num_tasks(),
            size,
            tenure,
            expiry: vec![0; size * size],
        }
    }

    /// Number of iterations a move stays forbidden.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    fn index(&self, t1: Task, t2: Task) -> usize {
        t1.id(self.num_tasks) * self.size + t2.id(self.num_tasks)
    }

    /// Iteration from which the pair is legal again.
    pub fn expiry(&self, t1: Task, t2: Task) -> usize {
        self.expiry[self.index(t1, t2)]
    }

    /// Whether swapping the pair is legal at `iteration`.
    pub fn is_allowed(&self, t1: Task, t2: Task, iteration: usize) -> bool {
        self.expiry(t1, t2) <= iteration
    }

    /// Forbids the pair until `iteration + tenure`.
    pub fn forbid(&mut self, t1: Task, t2: Task, iteration: usize) {
        let idx = self.index(t1, t2);
        self.expiry[idx] = iteration + self.tenure;
    }
}

/// A move performed by one [`TabuSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabuMove {
    /// Iteration the move was made in.
    pub iteration: usize,
    /// Applied swap.
    pub swap: Swap,
    /// Tasks in the swapped slots before the swap, in slot order.
    pub tasks: (Task, Task),
    /// Makespan after the move.
    pub makespan: i64,
    /// Whether the move produced a new global best.
    pub improved_best: bool,
}

/// State of a running tabu search.
///
/// [`TabuSolver`] drives it to a deadline; it can also be stepped by hand.
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    current: ResourceOrder<'a>,
    current_schedule: Schedule<'a>,
    best: Schedule<'a>,
    tabu: TabuList,
    iteration: usize,
}

impl<'a> TabuSearch<'a> {
    /// Starts a search from a feasible schedule.
    pub fn new(initial: Schedule<'a>, tenure: usize) -> Self {
        let instance = initial.instance();
        Self {
            current: ResourceOrder::from_schedule(&initial),
            tabu: TabuList::new(instance, tenure),
            best: initial.clone(),
            current_schedule: initial,
            iteration: 0,
        }
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best schedule seen so far.
    pub fn best(&self) -> &Schedule<'a> {
        &self.best
    }

    /// Schedule the search currently sits on.
    pub fn current(&self) -> &Schedule<'a> {
        &self.current_schedule
    }

    /// The forbidden-move matrix.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    /// Consumes the search and returns the best schedule.
    pub fn into_best(self) -> Schedule<'a> {
        self.best
    }

    /// Runs one iteration.
    ///
    /// Returns the move made, or `None` when every neighbor was forbidden
    /// or infeasible (the current schedule is then kept).
    pub fn step(&mut self) -> Option<TabuMove> {
        let k = self.iteration;
        self.iteration += 1;

        let blocks = blocks_of_critical_path(&self.current, &self.current_schedule.critical_path());
        let mut chosen: Option<(Swap, (Task, Task), Schedule<'a>)> = None;

        for swap in blocks.iter().flat_map(neighbors) {
            let (t1, t2) = swap.tasks(&self.current);
            if !self.tabu.is_allowed(t1, t2, k) {
                trace!(iteration = k, %swap, %t1, %t2, "move is tabu");
                continue;
            }

            swap.apply_on(&mut self.current);
            match self.current.to_schedule() {
                Some(candidate) => {
                    let better = chosen
                        .as_ref()
                        .map_or(true, |(_, _, s)| candidate.makespan() < s.makespan());
                    if better {
                        chosen = Some((swap, (t1, t2), candidate));
                    } else {
                        trace!(iteration = k, %swap, makespan = candidate.makespan(), "candidate rejected");
                    }
                }
                None => trace!(iteration = k, %swap, "candidate infeasible"),
            }
            swap.apply_on(&mut self.current);
        }

        let (swap, (t1, t2), schedule) = chosen?;
        let makespan = schedule.makespan();
        let improved_best = makespan < self.best.makespan();
        if improved_best {
            debug!(event = "tabu_improved", iteration = k, %swap, makespan);
            self.best = schedule.clone();
            self.tabu.forbid(t2, t1, k);
        }

        swap.apply_on(&mut self.current);
        self.current_schedule = schedule;

        Some(TabuMove {
            iteration: k,
            swap,
            tasks: (t1, t2),
            makespan,
            improved_best,
        })
    }
}

/// Tabu search solver seeded by EST_LRPT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabuSolver {
    /// Iteration cap.
    pub max_iterations: usize,
    /// Iterations a reversed move stays forbidden.
    pub tenure: usize,
}

impl TabuSolver {
    /// Creates a tabu solver.
    pub fn new(max_iterations: usize, tenure: usize) -> Self {
        Self {
            max_iterations,
            tenure,
        }
    }
}

impl Solver for TabuSolver {
    fn name(&self) -> String {
        format!("tabu({}, {})", self.max_iterations, self.tenure)
    }

    fn solve<'a>(&self, instance: &'a Instance, deadline: Deadline) -> SolveResult<'a> {
        let (_, seed) = GreedySolver::new(PriorityRule::EstLrpt).construct(instance);
        info!(
            event = "tabu_start",
            instance = %instance.name,
            max_iterations = self.max_iterations,
            tenure = self.tenure,
            seed_makespan = seed.makespan(),
        );

        let mut search = TabuSearch::new(seed, self.tenure);
        while search.iteration() < self.max_iterations && !deadline.is_past() {
            search.step();
        }

        let exit_cause = if search.iteration() == self.max_iterations {
            ExitCause::Blocked
        } else {
            ExitCause::Timeout
        };
        info!(
            event = "tabu_end",
            instance = %instance.name,
            makespan = search.best().makespan(),
            iterations = search.iteration(),
            exit = %exit_cause,
        );
        SolveResult::new(search.into_best(), exit_cause)
    }
}
