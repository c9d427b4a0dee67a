use crate::core::dataset::Dataset;
use crate::core::samples::{Sample, Variable};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Column order of the tabular exchange format handed to estimators.
pub const EXCHANGE_COLUMNS: [Variable; 5] = [
    Variable::AObs,
    Variable::BObs,
    Variable::ZTrue,
    Variable::ATrue,
    Variable::BTrue,
];

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Dataset {
    /// Writes a header row followed by one row per sample, columns in
    /// [`EXCHANGE_COLUMNS`] order.
    pub fn write_table<W: Write>(&self, mut w: W, delimiter: char) -> Result<(), ExchangeError> {
        let header: Vec<&str> = EXCHANGE_COLUMNS.iter().map(|v| v.column_name()).collect();
        writeln!(w, "{}", header.join(&delimiter.to_string()))?;
        for s in self {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{}{d}{}",
                s.a_obs,
                s.b_obs,
                s.z_true,
                s.a_true,
                s.b_true,
                d = delimiter
            )?;
        }
        Ok(())
    }

    /// Reads a table written by [`write_table`](Self::write_table). Columns
    /// may appear in any order as long as all five are present.
    pub fn read_table<R: BufRead>(r: R, delimiter: char) -> Result<Dataset, ExchangeError> {
        let mut lines = r.lines();
        let Some(header) = lines.next().transpose()? else {
            return Err(ExchangeError::Malformed {
                line: 1,
                reason: "missing header".into(),
            });
        };

        let names: Vec<&str> = header.split(delimiter).map(str::trim).collect();
        let mut positions = [0usize; 5];
        for (slot, variable) in positions.iter_mut().zip(EXCHANGE_COLUMNS) {
            *slot = names
                .iter()
                .position(|n| *n == variable.column_name())
                .ok_or_else(|| ExchangeError::Malformed {
                    line: 1,
                    reason: format!("missing column `{}`", variable.column_name()),
                })?;
        }

        let mut dataset = Dataset::default();
        for (i, line) in lines.enumerate() {
            let line = line?;
            let line_no = i + 2;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
            if fields.len() != names.len() {
                return Err(ExchangeError::Malformed {
                    line: line_no,
                    reason: format!("expected {} fields, got {}", names.len(), fields.len()),
                });
            }

            let mut values = [0.0f64; 5];
            for (value, &pos) in values.iter_mut().zip(&positions) {
                *value = fields[pos].parse().map_err(|_| ExchangeError::Malformed {
                    line: line_no,
                    reason: format!("`{}` is not a number", fields[pos]),
                })?;
            }
            let [a_obs, b_obs, z_true, a_true, b_true] = values;
            dataset.push(Sample::new(a_true, b_true, z_true, a_obs, b_obs));
        }
        Ok(dataset)
    }
}
