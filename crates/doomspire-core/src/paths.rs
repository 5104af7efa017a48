//! Reachability and enumeration utilities for agents.
//!
//! Agents call these before building an action: which paths a champion
//! can walk with a die, and which harvests a die allows.

use crate::board::Resource;
use crate::player::ResourceBundle;
use crate::position::Position;
use std::collections::HashSet;

/// Every path of at most `budget` steps starting at `start`.
///
/// Paths move orthogonally, stay on the board and never revisit a cell.
/// Every prefix is emitted, including the zero-step path `[start]`.
pub fn reachable_paths(start: Position, budget: u32) -> Vec<Vec<Position>> {
    let mut paths = Vec::new();
    if !start.is_on_board() {
        return paths;
    }

    let mut current = vec![start];
    let mut visited = HashSet::from([start]);
    dfs_paths(&mut current, &mut visited, budget, &mut paths);
    paths
}

fn dfs_paths(
    current: &mut Vec<Position>,
    visited: &mut HashSet<Position>,
    remaining: u32,
    paths: &mut Vec<Vec<Position>>,
) {
    paths.push(current.clone());
    if remaining == 0 {
        return;
    }

    let Some(&here) = current.last() else {
        return;
    };
    for next in here.neighbors() {
        if visited.contains(&next) {
            continue;
        }
        visited.insert(next);
        current.push(next);
        dfs_paths(current, visited, remaining - 1, paths);
        current.pop();
        visited.remove(&next);
    }
}

/// Distinct cells reachable within `budget` steps, start included
pub fn reachable_destinations(start: Position, budget: u32) -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for path in reachable_paths(start, budget) {
        if let Some(&end) = path.last() {
            if seen.insert(end) {
                result.push(end);
            }
        }
    }
    result.sort();
    result
}

/// The shortest enumerated path ending at `destination`, if any
pub fn path_to(start: Position, destination: Position, budget: u32) -> Option<Vec<Position>> {
    reachable_paths(start, budget)
        .into_iter()
        .filter(|p| p.last() == Some(&destination))
        .min_by_key(Vec::len)
}

/// Harvests a die of value `budget` allows.
///
/// Each option takes a single resource type in a quantity from 1 to
/// `budget`; the empty bundle (pass) is always first. Mixed-type
/// combinations are not offered.
pub fn harvest_options(available: &[Resource], budget: u32) -> Vec<ResourceBundle> {
    let mut options = vec![ResourceBundle::new()];
    for &resource in available {
        for amount in 1..=budget {
            let option = ResourceBundle::single(resource, amount);
            if !options.contains(&option) {
                options.push(option);
            }
        }
    }
    options
}
