use std::fmt::{self, Write};

use dictionary::{Definition, DictionaryEntry, Meaning};
use thiserror::Error;

use crate::style::{style, StyleAttribute};

#[derive(Debug, Error)]
#[error("failed to format entry: {0}")]
pub struct RenderError(#[from] fmt::Error);

/// Formats one dictionary entry as styled terminal text.
pub fn render(entry: &DictionaryEntry) -> Result<String, RenderError> {
    let mut output = String::new();
    let header = format!(
        "{} (phonetic: '{}')",
        entry.word,
        entry.first_phonetic_text()
    );
    write!(
        output,
        "{}\n\n{}\n",
        style(
            &header,
            &[
                StyleAttribute::Bold,
                StyleAttribute::Underlined,
                StyleAttribute::Italic
            ]
        ),
        style(
            "Meanings:",
            &[StyleAttribute::Bold, StyleAttribute::Underlined]
        )
    )?;
    write_meanings(&mut output, &entry.meanings)?;
    output.push('\n');
    Ok(output)
}

// Every meaning is appended, so entries with several parts of speech show all of them.
fn write_meanings(output: &mut String, meanings: &[Meaning]) -> fmt::Result {
    for meaning in meanings {
        writeln!(output, "Part of Speech: {}", meaning.part_of_speech)?;
        write_definitions(output, &meaning.definitions)?;
        output.push_str("\n\n");
    }
    Ok(())
}

fn write_definitions(output: &mut String, definitions: &[Definition]) -> fmt::Result {
    let example_title = style("Example:", &[StyleAttribute::Underlined]);
    for (index, definition) in definitions.iter().enumerate() {
        let title = style(
            &format!("Definition {}:", index + 1),
            &[StyleAttribute::Underlined],
        );
        write!(output, "  {title} \n  {}", definition.definition)?;
        if let Some(example) = definition.example() {
            write!(output, " \n  {example_title} {example}")?;
        }
        output.push('\n');
    }
    Ok(())
}
