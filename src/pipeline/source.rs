use memchr::{memchr, memchr_iter};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::str;

use crate::pipeline::PipelineError;

/// Record source over a comma-delimited file
///
/// Memory-maps the file and hands out rows as slices into the mapping, so
/// no field is copied until a consumer asks for an owned value. The mapping
/// is released when the source is dropped, on every exit path.
///
/// # Example
///
/// ```rust,no_run
/// # use ratechart::pipeline::CsvSource;
/// let csv = CsvSource::open("data.csv".as_ref()).unwrap();
/// let rate = csv.column_index("int_rate").unwrap();
/// for row in csv.rows() {
///     let row = row.unwrap();
///     println!("line {}: {:?}", row.line(), row.field(rate));
/// }
/// ```
#[derive(Debug)]
pub struct CsvSource {
    mmap: Mmap, // owns the CSV bytes
    headers: Vec<String>,
    data_start: usize,
}

impl CsvSource {
    /// Opens a CSV file and parses its header line
    ///
    /// # Arguments
    /// * `path` - Path to the CSV file
    ///
    /// # Errors
    /// Returns a [`PipelineError`] if the file cannot be opened or mapped,
    /// or if it has no header line.
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(PipelineError::MissingHeader);
        }
        let mmap = unsafe { Mmap::map(&file)? };

        // Parse header. A file may end after the header with no newline.
        let buf: &[u8] = &mmap[..];
        let (header_line, data_start) = match memchr(b'\n', buf) {
            Some(end) => (&buf[..end], end + 1),
            None => (buf, buf.len()),
        };
        let headers: Vec<String> = strip_cr(header_line)
            .split(|&b| b == b',')
            .map(|s| String::from_utf8_lossy(s).to_string())
            .collect();

        Ok(CsvSource {
            mmap,
            headers,
            data_start,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Resolves a column name to its field index, exact and case-sensitive
    pub fn column_index(&self, name: &str) -> Result<usize, PipelineError> {
        self.headers
            .iter()
            .position(|h| strip_bom(h) == name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    }

    /// Iterates the data rows in file order
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            data: &self.mmap[self.data_start..],
            pos: 0,
            line: 2, // header is line 1
            width: self.headers.len(),
        }
    }
}

/// Iterator over the data rows of a [`CsvSource`]
#[derive(Debug)]
pub struct Rows<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
    width: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Result<Row<'a>, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let (line_bytes, advance) = match memchr(b'\n', rest) {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len()), // last line without trailing newline
            };
            self.pos += advance;
            let line_no = self.line;
            self.line += 1;

            let line_bytes = strip_cr(line_bytes);
            if line_bytes.is_empty() {
                continue;
            }
            return Some(Row::split(line_bytes, line_no, self.width));
        }
        None
    }
}

/// One data row, borrowing its fields from the file mapping
#[derive(Debug)]
pub struct Row<'a> {
    fields: Vec<&'a [u8]>,
    line: usize,
}

impl<'a> Row<'a> {
    fn split(line: &'a [u8], line_no: usize, expected: usize) -> Result<Self, PipelineError> {
        let mut fields = Vec::with_capacity(expected);
        let mut start = 0;
        for comma_pos in memchr_iter(b',', line) {
            fields.push(&line[start..comma_pos]);
            start = comma_pos + 1;
        }
        fields.push(&line[start..]);

        if fields.len() != expected {
            return Err(PipelineError::RowShape {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }

        Ok(Row {
            fields,
            line: line_no,
        })
    }

    /// 1-based line number in the source file
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw bytes of the field at a header index
    pub fn field(&self, idx: usize) -> &'a [u8] {
        self.fields[idx]
    }

    /// Field at a header index, decoded as UTF-8
    pub fn str_field(&self, idx: usize) -> Result<&'a str, PipelineError> {
        Ok(str::from_utf8(self.fields[idx])?)
    }
}

fn strip_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

// Excel and friends emit UTF-8 CSVs with a BOM glued to the first header;
// without stripping it, the schema check reports the column as missing.
fn strip_bom(header: &str) -> &str {
    header.trim_start_matches('\u{feff}')
}
