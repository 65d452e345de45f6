//! Record materializer: header + row + schema -> typed record.

use crate::{CodecError, CodecResult};
use csvbind_schema::Schema;

/// Build a record from one data row.
///
/// Header columns without a schema binding are skipped. Fields the header does
/// not mention keep their default value.
pub fn materialize<R: Default>(
    header: &[String],
    row: &[String],
    schema: &Schema<R>,
) -> CodecResult<R> {
    let mut record = R::default();
    materialize_into(&mut record, header, row, schema)?;
    Ok(record)
}

/// Assign the row's bound cells onto an existing record.
///
/// Only fields whose column appears in `header` are touched. On error the
/// record may already hold some of the row's values.
pub fn materialize_into<R>(
    record: &mut R,
    header: &[String],
    row: &[String],
    schema: &Schema<R>,
) -> CodecResult<()> {
    for (index, column) in header.iter().enumerate() {
        let Some(binding) = schema.get(column) else {
            continue;
        };
        let raw = row
            .get(index)
            .ok_or_else(|| CodecError::missing_cell(column, index, row.len()))?;
        binding.assign(record, raw).map_err(|e| {
            CodecError::field_conversion(column, raw, binding.kind(), binding.type_name(), e)
        })?;
    }
    Ok(())
}
