use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// How the latent pair `(a_true, b_true)` relates to `z_true`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GenerationMode {
    /// `z_true` and `a_true` uniform on `[0, 100)`, `b_true = z_true - a_true`.
    #[default]
    #[strum(
        message = "Correlated",
        detailed_message = "Draw z and a on [0,100); b is their difference."
    )]
    Correlated,

    /// `a_true` and `b_true` independent on `[-50, 50)`, `z_true = a_true + b_true`.
    #[strum(
        message = "Independent",
        detailed_message = "Draw a and b independently on [-50,50); z is their sum."
    )]
    Independent,
}
