use crate::core::models::topology::Topology;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for serializing a resolved topology.
pub trait TopologyFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Writes a topology to a writer.
    ///
    /// # Arguments
    ///
    /// * `topology` - The resolved topology to write.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Renders a topology into an in-memory buffer.
    ///
    /// Useful when the document must be complete before any file is touched.
    fn render(topology: &Topology) -> Result<Vec<u8>, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(topology, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes a topology to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(topology: &Topology, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(topology, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
