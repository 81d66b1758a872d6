use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::shots::Tally;

pub fn write_counts_csv(path: &Path, tally: &Tally) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "bitstring,count,frequency")?;
    for (bits, count) in &tally.counts {
        writeln!(f, "{},{},{}", bits, count, tally.frequency(bits))?;
    }
    f.flush()
}
