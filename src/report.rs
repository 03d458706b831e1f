//! Console rendering of a finished run.

use std::fmt;

use crate::sim::ReplacementEngine;

/// Step-by-step listing of the engine's last run.
///
/// ```text
/// *****Simulating FIFO*****
///
/// Reference String:
/// 1, 2, 1
///
/// Iteration 0:
/// Virtual frame called: 1
/// [1]
/// Page fault: Yes.
/// Victim frame: None.
/// ...
/// Total page faults: 2
/// ```
pub struct Report<'a> {
    engine: &'a ReplacementEngine,
}

impl<'a> Report<'a> {
    pub fn new(engine: &'a ReplacementEngine) -> Self {
        Self { engine }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.engine.algorithm_name() {
            Some(name) => name,
            None => return writeln!(f, "No simulation has been run."),
        };

        writeln!(f, "*****Simulating {}*****", name)?;
        writeln!(f)?;
        writeln!(f, "Reference String:")?;
        let listing: Vec<String> = self
            .engine
            .references()
            .iter()
            .map(|p| p.0.to_string())
            .collect();
        writeln!(f, "{}", listing.join(", "))?;

        let steps = self
            .engine
            .references()
            .iter()
            .zip(self.engine.step_results())
            .zip(self.engine.snapshots());

        for (iteration, ((page, result), table)) in steps.enumerate() {
            writeln!(f)?;
            writeln!(f, "Iteration {}:", iteration)?;
            writeln!(f, "Virtual frame called: {}", page.0)?;
            writeln!(f, "{}", table)?;
            writeln!(
                f,
                "Page fault: {}",
                if result.fault { "Yes." } else { "No." }
            )?;
            match result.victim {
                Some(victim) => writeln!(f, "Victim frame: {}", victim.0)?,
                None => writeln!(f, "Victim frame: None.")?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Total page faults: {}", self.engine.total_faults())
    }
}
