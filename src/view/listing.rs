//! Plain-text listing for `--list`.
//!
//! One record per line, tab-separated, in view order:
//! `name  language  stars  forks  updated  url`. A missing language is `-`.

use crate::model::Repository;
use std::io::{self, Write};

/// Write one tab-separated line per record.
pub fn write_listing<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Repository>,
{
    for repo in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            repo.name,
            repo.language().unwrap_or("-"),
            repo.stars,
            repo.forks,
            repo.updated_at.date_label(),
            repo.url
        )?;
    }
    out.flush()
}
