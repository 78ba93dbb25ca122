use crate::error::{Result, SquareSumsError};
use crate::observer::StartEvent;
use chrono::Local;
use csv::WriterBuilder;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Write the progress transcript of one search run to a timestamped CSV
/// file, one row per starting integer in the order they were explored.
///
/// Returns the path of the file written. With no output directory the
/// file lands in the current working directory.
pub fn write_progress_csv(events: &[StartEvent], output_dir: Option<&Path>) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("square_sums_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| SquareSumsError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| SquareSumsError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    let writer = BufWriter::new(file);
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder.terminator(Terminator::CRLF);
    }

    let mut wtr = builder.from_writer(writer);

    wtr.write_record(["Start", "Domain", "FoundSoFar", "Time"])?;
    for event in events {
        wtr.write_record([
            event.start.to_string(),
            event.domain.to_string(),
            event.found_so_far.to_string(),
            event.at.format("%H:%M:%S").to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(file_path)
}
