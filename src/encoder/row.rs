use super::types::{RelationRef, RowImage};
use super::value::{encode_value, write_json_string};
use crate::{Error, Result};

/// Renders one row image as a JSON object, in the relation's column order.
/// Dropped and generated columns are skipped; their slots must still be
/// present in the image.
pub(crate) fn encode_row(out: &mut String, relation: &RelationRef, row: &RowImage) -> Result<()> {
    if row.0.len() != relation.columns.len() {
        return Err(Error::InvalidEvent {
            message: format!(
                "column count mismatch for {}: {} vs {}",
                relation.name,
                row.0.len(),
                relation.columns.len()
            ),
        });
    }

    out.push('{');
    let mut first = true;
    for (column, value) in relation.columns.iter().zip(&row.0) {
        if column.dropped || column.generated {
            continue;
        }
        if !first {
            out.push(',');
        }
        first = false;
        write_json_string(out, &column.name);
        out.push(':');
        encode_value(out, column, value);
    }
    out.push('}');
    Ok(())
}
