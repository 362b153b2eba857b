use super::Host;
use crate::Result;
use crate::constraints::ConstraintTable;
use std::io::Write;

/// Print each organ identifier on its own line, in table order.
pub fn list_organs(host: &mut impl Host) -> Result<()> {
    let mut out = host.output();
    for id in ConstraintTable::standard().organ_ids() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}
