//! Textual reporting of elimination progress and the solution.
//!
//! Prints a per-step trace (pivot, multipliers, intermediate system
//! state) and the final solution lines `<name> = <value>` with
//! unknowns named by successive ASCII letters starting at 'a'.

use meg_core::{LinearSystem, SolveObserver};

/// Prints every elimination event to stdout.
pub struct TraceReporter;

impl SolveObserver for TraceReporter {
    fn on_step(&mut self, step: usize, pivot: f64) {
        println!("STEP #{}", step);
        println!("PIVOT: {:.6}\n", pivot);
    }

    fn on_swap(&mut self, from: usize, to: usize) {
        println!("Swapped rows {} and {}\n", from, to);
    }

    fn on_row_eliminated(&mut self, _row: usize, multiplier: f64, system: &LinearSystem) {
        println!("m = {:.6}", multiplier);
        print!("{}", system);
        println!("\n");
    }
}

/// Print one `<name> = <value>` line per unknown.
pub fn print_solution(solution: &[f64]) {
    for (i, value) in solution.iter().enumerate() {
        println!("{} = {:.6}", unknown_name(i), value);
    }
}

/// Successive ASCII characters starting at 'a'.
fn unknown_name(i: usize) -> char {
    char::from(b'a'.wrapping_add(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names() {
        assert_eq!(unknown_name(0), 'a');
        assert_eq!(unknown_name(1), 'b');
        assert_eq!(unknown_name(25), 'z');
    }
}
