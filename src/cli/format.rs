//! Output format dispatch

/// Dispatch command output on `--format`.
///
/// The json arm is an expression returning `Result<()>`; the human and
/// records arms are plain blocks and the macro supplies the `Ok(())`.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => print_json(&value),
///     human => { println!("{}", value.title); },
///     records => { println!("T {}", value.id); }
/// )?;
/// ```
macro_rules! output_by_format {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block $(,)?) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format;
