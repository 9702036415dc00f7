use std::io::Write;

use ratechart::pipeline::{grouper, CsvSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = tempfile::NamedTempFile::new()?;
    write!(
        tmp,
        "purpose,int_rate\ncar,4.2\ncredit_card,12.3\ncar,3.5\ncredit_card,10.5\ncar,6.2\n"
    )?;

    let csv = CsvSource::open(tmp.path())?;

    // Group interest rates by purpose, keeping arrival order
    let grouped = grouper::group(&csv, "purpose", "int_rate")?;
    for (purpose, rates) in &grouped {
        println!("Purpose {} => {:?}", purpose, rates);
    }

    Ok(())
}
