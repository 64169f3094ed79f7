use anyhow::anyhow;
use formatx::formatx;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub trait Output: Debug {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

impl<T: Output> Output for &T {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        T::writer_for_location_key(self, location_key)
    }

    fn is_noop(&self) -> bool {
        T::is_noop(self)
    }
}

/// An output writing each location key to a file named from a template, e.g.
/// a template of `quote_{}` maps the key `breakdown.csv` to the file
/// `quote_breakdown.csv` under the given directory.
#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        let file_name = formatx!(&self.file_template, location_key)
            .map_err(|err| anyhow!("Output file template was not usable: {err}"))?;

        Ok(BufWriter::new(File::create(
            self.directory_path.join(file_name),
        )?))
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// An output that captures everything written to it, keyed by location, so
/// tests and embedders can inspect reports without touching the filesystem.
#[derive(Clone, Debug, Default)]
pub struct MemoryOutput {
    buffers: Arc<Mutex<IndexMap<String, Vec<u8>>>>,
}

impl MemoryOutput {
    pub fn location_keys(&self) -> Vec<String> {
        self.buffers
            .lock()
            .expect("memory output lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub fn contents_for_location_key(&self, location_key: &str) -> Option<String> {
        self.buffers
            .lock()
            .expect("memory output lock poisoned")
            .get(location_key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Output for MemoryOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        Ok(MemoryWriter {
            location_key: location_key.to_owned(),
            buffers: Arc::clone(&self.buffers),
        })
    }
}

#[derive(Debug)]
struct MemoryWriter {
    location_key: String,
    buffers: Arc<Mutex<IndexMap<String, Vec<u8>>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffers
            .lock()
            .expect("memory output lock poisoned")
            .entry(self.location_key.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
