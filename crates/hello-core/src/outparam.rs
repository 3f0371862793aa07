//! The out-parameter writer

use tracing::trace;

use crate::types::OutSlot;

/// The constant stored by [`write_constant`]
pub const ANSWER: i32 = 42;

/// Overwrite the caller's slot with [`ANSWER`]
pub fn write_constant(slot: OutSlot<'_, i32>) {
    let value = slot.write(ANSWER);
    trace!(value = *value, "Wrote constant to out-parameter");
}

/// [`write_constant`] for a plain mutable reference
pub fn write_constant_into(target: &mut i32) {
    write_constant(OutSlot::new(target));
}
