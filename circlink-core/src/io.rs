use std::fmt::Display;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{CirclinkError, Result};

pub trait TrackWrite {
    ///
    /// Render records as Circos track text: one record per line, no trailing newline.
    ///
    fn render_track(&self) -> String;

    ///
    /// Write the track to disk, creating missing parent directories.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_track<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<T: Display> TrackWrite for [T] {
    fn render_track(&self) -> String {
        self.iter()
            .map(|record| record.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn write_track<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| CirclinkError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).map_err(write_error)?;
            }
        }

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render_track().as_bytes())
            .map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        Ok(())
    }
}
