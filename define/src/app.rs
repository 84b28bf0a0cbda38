use std::io::Write;

use anyhow::Context;
use dictionary::{Dictionary, DictionaryEntry};

use crate::render::RenderError;

/// Looks the word up and writes every rendered entry to `out`.
///
/// A failed lookup is reported on `out` and returned as an error; an entry
/// that fails to render is reported and skipped.
pub async fn run<R>(
    dict: &Dictionary,
    word: &str,
    render: R,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    R: Fn(&DictionaryEntry) -> Result<String, RenderError>,
{
    writeln!(out, "Searching dictionary for {word}")?;

    let entries = match dict.lookup(word).await {
        Ok(entries) => entries,
        Err(error) => {
            writeln!(out, "Unable to complete request due to an error: {error}")?;
            return Err(error).with_context(|| format!("lookup of {word:?} failed"));
        }
    };
    log::debug!("received {} entries for {word:?}", entries.len());

    for entry in &entries {
        match render(entry) {
            Ok(text) => writeln!(out, "{text}")?,
            Err(error) => {
                log::warn!("skipping entry for {:?}: {error}", entry.word);
                writeln!(out, "Unable to format dictionary response: {error}")?;
            }
        }
    }
    Ok(())
}
