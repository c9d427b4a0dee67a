use crate::config::choices::EstimatorKind;
use crate::streams::GenerationMode;
use std::io::{self, Write};
use strum::{EnumMessage, IntoEnumIterator};

/// Lists every estimator `type` and generation mode a configuration may name,
/// with their descriptions.
pub fn write_catalogue<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "estimators:")?;
    for kind in EstimatorKind::iter() {
        write_entry(w, kind.to_string(), &kind)?;
    }
    writeln!(w, "generation modes:")?;
    for mode in GenerationMode::iter() {
        write_entry(w, mode.to_string(), &mode)?;
    }
    Ok(())
}

fn write_entry<W: Write, M: EnumMessage>(w: &mut W, name: String, m: &M) -> io::Result<()> {
    let title = m.get_message().unwrap_or_default();
    match m.get_detailed_message() {
        Some(detail) => writeln!(w, "  {name:<14} {title}: {detail}"),
        None => writeln!(w, "  {name:<14} {title}"),
    }
}
