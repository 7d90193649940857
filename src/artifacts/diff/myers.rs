//! Myers' greedy shortest edit script search
//!
//! Every `(d, k)` state of the search is stored once in an arena as a node that
//! points back at the state it was reached from. The frontier only remembers, per
//! diagonal, how far the furthest path got and which node it ended on. Once the
//! terminal node is found the script is rebuilt by walking the parent links, so no
//! partial history is ever copied.
//!
//! The down/right decision prefers the right move (a removal) when both neighbours
//! reach equally far. Several minimal scripts usually exist for one input pair and
//! that rule is what picks one of them, so it must not change.

use crate::artifacts::diff::edit::{Edit, EditScript};
use derive_new::new;
use std::fmt::Display;
use thiserror::Error;

/// Traces single search steps when built with the `debug_search` feature
macro_rules! search_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_search")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The search ran past `a_len + b_len` edits, which only happens when element
    /// equality is not an equivalence relation.
    #[error("no edit script found for sequences of length {a_len} and {b_len}")]
    SearchExhausted { a_len: usize, b_len: usize },
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditScript;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, DiffError>;
    fn backtrack(&self, trace: Self::Trace) -> Self::EditScript;

    fn diff(&self) -> Result<Self::EditScript, DiffError> {
        let trace = self.compute_shortest_edit()?;
        Ok(self.backtrack(trace))
    }

    fn format_diff(&self) -> Result<Vec<String>, DiffError>
    where
        T: Display,
        Self::EditScript: AsRef<[Edit<T>]>,
    {
        let edits = self.diff()?;
        Ok(edits.as_ref().iter().map(Edit::as_string).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Index into `b`
    Insert(usize),
    /// Index into `a`
    Remove(usize),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<usize>,
    step: Option<Step>,
    snake_start: usize,
    snake_len: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Reach {
    x: usize,
    node: Option<usize>,
}

/// Furthest reach per diagonal, indexed by `k + offset`
#[derive(Debug)]
struct Frontier {
    reaches: Vec<Reach>,
    offset: isize,
}

impl Frontier {
    fn new(max: usize) -> Self {
        Frontier {
            reaches: vec![Reach::default(); 2 * max + 3],
            offset: max as isize + 1,
        }
    }

    fn get(&self, k: isize) -> Reach {
        self.reaches[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, reach: Reach) {
        self.reaches[(k + self.offset) as usize] = reach;
    }
}

/// Arena of visited states plus the index of the one that reached the end of both
/// sequences.
#[derive(Debug)]
pub struct SearchTrace {
    arena: Vec<Node>,
    terminal: usize,
    distance: usize,
}

impl SearchTrace {
    /// Number of inserts and removes on the path found.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Number of states explored before the search ended.
    pub fn explored(&self) -> usize {
        self.arena.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = SearchTrace;
    type EditScript = EditScript<T>;

    fn compute_shortest_edit(&self) -> Result<Self::Trace, DiffError> {
        let (n, m) = (self.a.len(), self.b.len());
        let max = n + m;

        let mut frontier = Frontier::new(max);
        frontier.set(1, Reach { x: 0, node: None });
        let mut arena: Vec<Node> = Vec::new();

        for d in 0..=(max as isize) {
            for k in (-d..=d).step_by(2) {
                let go_down =
                    k == -d || (k != d && frontier.get(k - 1).x < frontier.get(k + 1).x);

                let (x, parent) = if go_down {
                    let reach = frontier.get(k + 1);
                    (reach.x, reach.node)
                } else {
                    let reach = frontier.get(k - 1);
                    (reach.x + 1, reach.node)
                };
                let y = x as isize - k;

                // the virtual first step and off-grid states carry no edit
                let step = if go_down {
                    (1..=m as isize)
                        .contains(&y)
                        .then(|| Step::Insert(y as usize - 1))
                } else {
                    (1..=n).contains(&x).then(|| Step::Remove(x - 1))
                };

                let (mut x_end, mut y_end) = (x, y);
                while x_end < n
                    && (0..m as isize).contains(&y_end)
                    && self.a[x_end] == self.b[y_end as usize]
                {
                    // snake
                    x_end += 1;
                    y_end += 1;
                }

                search_trace!(d, k, x, y, x_end, y_end, go_down, "search step");

                let node = arena.len();
                arena.push(Node {
                    parent,
                    step,
                    snake_start: x,
                    snake_len: x_end - x,
                });

                if x_end >= n && y_end >= m as isize {
                    tracing::debug!(
                        distance = d,
                        explored = arena.len(),
                        a_len = n,
                        b_len = m,
                        "found shortest edit script"
                    );
                    return Ok(SearchTrace {
                        arena,
                        terminal: node,
                        distance: d as usize,
                    });
                }

                frontier.set(
                    k,
                    Reach {
                        x: x_end,
                        node: Some(node),
                    },
                );
            }
        }

        Err(DiffError::SearchExhausted { a_len: n, b_len: m })
    }

    fn backtrack(&self, trace: Self::Trace) -> Self::EditScript {
        let mut path = Vec::new();
        let mut cursor = Some(trace.terminal);
        while let Some(index) = cursor {
            let node = &trace.arena[index];
            path.push(node);
            cursor = node.parent;
        }

        let mut script = Vec::with_capacity(self.a.len() + trace.distance);
        for node in path.into_iter().rev() {
            match node.step {
                Some(Step::Insert(j)) => script.push(Edit::Insert {
                    value: self.b[j].clone(),
                }),
                Some(Step::Remove(i)) => script.push(Edit::Remove {
                    value: self.a[i].clone(),
                }),
                None => {}
            }

            let snake = &self.a[node.snake_start..node.snake_start + node.snake_len];
            script.extend(snake.iter().map(|value| Edit::Keep {
                value: value.clone(),
            }));
        }

        script
    }
}

/// Computes the minimal edit script turning `a` into `b`.
pub fn compute_edit_script<T: Eq + Clone>(a: &[T], b: &[T]) -> Result<EditScript<T>, DiffError> {
    MyersDiff::new(a, b).diff()
}
