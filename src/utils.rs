use std::io::Write;

use crate::model::bucket::Bucket;
use crate::GenError;

// Names only, one per line, in slice order; diagnostics belong on stderr.
pub fn write_names<W: Write>(out: &mut W, buckets: &[Bucket]) -> Result<(), GenError> {
    for bucket in buckets {
        writeln!(out, "{}", bucket.name)?;
    }

    Ok(())
}
