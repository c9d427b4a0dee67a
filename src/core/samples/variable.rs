use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Column of a [`Sample`](crate::core::Sample) that estimators may use as a
/// feature or target.
///
/// The string form is the column name of the tabular exchange format.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Variable {
    #[serde(rename = "a")]
    #[strum(serialize = "a")]
    AObs,
    #[serde(rename = "b")]
    #[strum(serialize = "b")]
    BObs,
    #[serde(rename = "z_obs")]
    #[strum(serialize = "z_obs")]
    ZObs,
    #[serde(rename = "a_true")]
    #[strum(serialize = "a_true")]
    ATrue,
    #[serde(rename = "b_true")]
    #[strum(serialize = "b_true")]
    BTrue,
    #[serde(rename = "z_true")]
    #[strum(serialize = "z_true")]
    ZTrue,
}

impl Variable {
    /// Features the estimators train on: the two smeared observations.
    pub const OBSERVED_FEATURES: [Variable; 2] = [Variable::AObs, Variable::BObs];

    pub fn column_name(self) -> &'static str {
        self.into()
    }
}
