use std::{
    fmt::{self, Display},
    time::Duration,
};

use fifteen_solver::Solution;

/// Final report for a successful search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Report<'a> {
    solution: &'a Solution,
    elapsed: Duration,
}

impl<'a> Report<'a> {
    pub(crate) fn new(solution: &'a Solution, elapsed: Duration) -> Self {
        Self { solution, elapsed }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { solution, elapsed } = self;
        let stats = &solution.stats;
        writeln!(f, "\nSolution found in {} steps.", solution.path_cost)?;
        write!(f, "{}", solution.state)?;
        writeln!(f, "\nExecution terminated in {}", format_elapsed(*elapsed))?;
        writeln!(f, "States expanded: {}", stats.expanded())?;
        writeln!(f, "States generated: {}", stats.generated())?;
        writeln!(f, "Peak frontier size: {}", stats.peak_frontier())
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        let ms = elapsed.subsec_millis();
        format!("{secs}.{ms:03}s")
    } else {
        let minutes = secs / 60;
        let secs = secs % 60;
        format!("{minutes}m {secs}s")
    }
}

#[cfg(test)]
mod tests {
    use fifteen_core::PuzzleState;
    use fifteen_solver::BreadthFirstSearch;

    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(42)), "0.042s");
        assert_eq!(format_elapsed(Duration::from_millis(89_999)), "89.999s");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "62m 5s");
    }

    #[test]
    fn test_report_display() {
        let initial: PuzzleState = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 B 15".parse().unwrap();
        let solution = BreadthFirstSearch::new().search(&initial).unwrap();
        let report = Report::new(&solution, Duration::from_millis(7));
        assert_eq!(
            report.to_string(),
            "\nSolution found in 1 steps.\n\
             1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 B\n\
             \nExecution terminated in 0.007s\n\
             States expanded: 1\n\
             States generated: 2\n\
             Peak frontier size: 1\n"
        );
    }
}
