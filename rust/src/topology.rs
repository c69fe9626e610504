//! Topological ordering over dense node indices.

use std::collections::VecDeque;

use crate::error::CpmError;

/// Order nodes so every arc `(from, to)` has `from` before `to`.
///
/// Uses Kahn's algorithm. Sources are seeded in index order and successors
/// are released in arc order, so the result is stable for a given input.
///
/// # Errors
/// `CpmError::CircularDependency` if some nodes can never be released.
pub fn topological_order(
    node_count: usize,
    arcs: &[(usize, usize)],
) -> Result<Vec<usize>, CpmError> {
    let mut in_degree = vec![0usize; node_count];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(from, to) in arcs {
        in_degree[to] += 1;
        successors[from].push(to);
    }

    let mut queue: VecDeque<usize> = (0..node_count).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(node_count);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &next in &successors[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() != node_count {
        return Err(CpmError::CircularDependency {
            unordered: node_count - order.len(),
        });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_declared_out_of_order() {
        // 2 -> 0 -> 1
        let order = topological_order(3, &[(0, 1), (2, 0)]).unwrap();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_parallel_arcs_are_counted() {
        let order = topological_order(2, &[(0, 1), (0, 1)]).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(topological_order(0, &[]).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_cycle_detected() {
        // 0 -> 1 -> 2 -> 1, plus 2 -> 3 downstream of the cycle
        let result = topological_order(4, &[(0, 1), (1, 2), (2, 1), (2, 3)]);
        assert_eq!(result, Err(CpmError::CircularDependency { unordered: 3 }));
    }

    #[test]
    fn test_self_loop_detected() {
        let result = topological_order(1, &[(0, 0)]);
        assert_eq!(result, Err(CpmError::CircularDependency { unordered: 1 }));
    }
}
