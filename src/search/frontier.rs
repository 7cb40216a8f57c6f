use std::collections::VecDeque;

use grid_util::point::Point;
use itertools::Itertools;

use super::context::SearchContext;
use super::strategy::FrontierKind;

/// Cells waiting to be expanded, ordered according to a [FrontierKind].
#[derive(Clone, Debug)]
pub enum Frontier {
    CostList(Vec<Point>),
    Queue(VecDeque<Point>),
    Stack(Vec<Point>),
}

impl Frontier {
    pub fn new(kind: FrontierKind) -> Frontier {
        match kind {
            FrontierKind::CostList => Frontier::CostList(Vec::new()),
            FrontierKind::Queue => Frontier::Queue(VecDeque::new()),
            FrontierKind::Stack => Frontier::Stack(Vec::new()),
        }
    }

    pub fn push(&mut self, point: Point) {
        match self {
            Frontier::CostList(list) | Frontier::Stack(list) => list.push(point),
            Frontier::Queue(queue) => queue.push_back(point),
        }
    }

    /// Removes the next cell to expand. The cost list yields the cell with the lowest
    /// f-cost, then the lowest h-cost, then the one inserted first.
    pub fn pop(&mut self, context: &SearchContext) -> Option<Point> {
        match self {
            Frontier::CostList(list) => {
                let best = list.iter().position_min_by_key(|p| {
                    context
                        .get(p)
                        .map_or((i32::MAX, i32::MAX), |node| (node.f_cost(), node.h_cost))
                })?;
                // Order is kept so that later ties still favour older entries
                Some(list.remove(best))
            }
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::CostList(list) | Frontier::Stack(list) => list.len(),
            Frontier::Queue(queue) => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
