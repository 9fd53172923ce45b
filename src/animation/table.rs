use smallvec::SmallVec;

use crate::foundation::error::{ScrolyteError, ScrolyteResult};

/// One stop of a keyframe table: a progress position and its output values.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Progress position of this stop; must be finite and within [0, 1].
    pub progress: f64,
    /// Output value per lane at this stop.
    pub outputs: Vec<f64>,
}

/// Piecewise-linear lookup table mapping progress to one or more output lanes.
///
/// Sampling outside the row range clamps to the boundary row and never
/// extrapolates, so a query at progress 1.2 returns exactly the last row.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct KeyframeTable {
    /// Stops in strictly increasing progress order, all with the same arity.
    pub rows: Vec<Keyframe>,
}

impl KeyframeTable {
    /// Table over the given rows. Call [`KeyframeTable::validate`] to check
    /// ordering and arity invariants.
    pub fn new(rows: Vec<Keyframe>) -> Self {
        Self { rows }
    }

    /// Number of output lanes per row. Zero for an empty table.
    pub fn arity(&self) -> usize {
        self.rows.first().map_or(0, |row| row.outputs.len())
    }

    /// Check the table invariants: at least one row, uniform non-zero arity,
    /// finite outputs, and strictly increasing progress within [0, 1].
    pub fn validate(&self) -> ScrolyteResult<()> {
        if self.rows.is_empty() {
            return Err(ScrolyteError::animation(
                "keyframe table must have at least one row",
            ));
        }
        let arity = self.rows[0].outputs.len();
        if arity == 0 {
            return Err(ScrolyteError::animation(
                "keyframe rows must have at least one output lane",
            ));
        }
        for row in &self.rows {
            if !row.progress.is_finite() || !(0.0..=1.0).contains(&row.progress) {
                return Err(ScrolyteError::animation(format!(
                    "keyframe progress must be within [0, 1], got {}",
                    row.progress
                )));
            }
            if row.outputs.len() != arity {
                return Err(ScrolyteError::animation(format!(
                    "keyframe output arity mismatch: expected {arity}, got {}",
                    row.outputs.len()
                )));
            }
            if row.outputs.iter().any(|v| !v.is_finite()) {
                return Err(ScrolyteError::animation(
                    "keyframe outputs must be finite",
                ));
            }
        }
        for pair in self.rows.windows(2) {
            if pair[1].progress <= pair[0].progress {
                return Err(ScrolyteError::animation(
                    "keyframe progress values must be strictly increasing",
                ));
            }
        }
        Ok(())
    }

    /// Sample all output lanes at `progress`.
    pub fn interpolate(&self, progress: f64) -> SmallVec<[f64; 4]> {
        let mut out = SmallVec::new();
        self.interpolate_into(progress, &mut out);
        out
    }

    /// Sample into a caller-owned buffer, clearing it first. Hot path for
    /// per-scroll-tick evaluation.
    pub fn interpolate_into(&self, progress: f64, out: &mut SmallVec<[f64; 4]>) {
        out.clear();
        if self.rows.is_empty() {
            return;
        }

        let idx = self.rows.partition_point(|row| row.progress <= progress);
        if idx == 0 {
            out.extend(self.rows[0].outputs.iter().copied());
            return;
        }
        if idx >= self.rows.len() {
            out.extend(self.rows[self.rows.len() - 1].outputs.iter().copied());
            return;
        }

        let a = &self.rows[idx - 1];
        let b = &self.rows[idx];
        let denom = b.progress - a.progress;
        if denom <= f64::EPSILON {
            out.extend(a.outputs.iter().copied());
            return;
        }
        let t = (progress - a.progress) / denom;
        for (va, vb) in a.outputs.iter().zip(&b.outputs) {
            out.push(va + (vb - va) * t);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
