//! Lookup of curve readers and writers by format name or file extension.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use spline_core::Curve;
use tracing::debug;

use super::traits::{FormatReader, FormatWriter, ReadOptions, WriteOptions};

/// Handlers registered for one file extension.
#[derive(Debug, Default)]
struct ExtensionEntry {
    reader: Option<String>,
    writer: Option<String>,
}

/// Readers and writers keyed by lowercase format name.
///
/// Registration order is kept; auto-detection asks readers in that order.
#[derive(Default)]
pub struct FormatRegistry {
    readers: IndexMap<String, Box<dyn FormatReader>>,
    writers: IndexMap<String, Box<dyn FormatWriter>>,
    extensions: IndexMap<String, ExtensionEntry>,
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field("writers", &self.writers.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Lowercase a format name or extension and drop a leading dot.
fn normalize(key: &str) -> String {
    key.trim_start_matches('.').to_ascii_lowercase()
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in spline JSON format.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "json")]
        {
            use crate::formats::json::{SplineJsonReader, SplineJsonWriter};
            registry.register_reader(SplineJsonReader::new());
            registry.register_writer(SplineJsonWriter::new());
        }

        registry
    }

    /// Add a reader. A later reader with the same name or extension wins.
    pub fn register_reader<R: FormatReader + 'static>(&mut self, reader: R) {
        let name = normalize(reader.name());
        for ext in reader.extensions() {
            self.extensions.entry(normalize(ext)).or_default().reader = Some(name.clone());
        }

        debug!(format = %name, extensions = ?reader.extensions(), "registered reader");
        self.readers.insert(name, Box::new(reader));
    }

    /// Add a writer. A later writer with the same name or extension wins.
    pub fn register_writer<W: FormatWriter + 'static>(&mut self, writer: W) {
        let name = normalize(writer.name());
        self.extensions
            .entry(normalize(writer.extension()))
            .or_default()
            .writer = Some(name.clone());

        debug!(format = %name, extension = writer.extension(), "registered writer");
        self.writers.insert(name, Box::new(writer));
    }

    pub fn get_reader(&self, format: &str) -> Option<&dyn FormatReader> {
        self.readers.get(&normalize(format)).map(|r| r.as_ref())
    }

    pub fn get_writer(&self, format: &str) -> Option<&dyn FormatWriter> {
        self.writers.get(&normalize(format)).map(|r| r.as_ref())
    }

    /// Reader for an extension such as `json` or `.JSON`.
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn FormatReader> {
        let name = self.extensions.get(&normalize(ext))?.reader.as_deref()?;
        self.get_reader(name)
    }

    /// Writer for an extension such as `json` or `.JSON`.
    pub fn writer_for_extension(&self, ext: &str) -> Option<&dyn FormatWriter> {
        let name = self.extensions.get(&normalize(ext))?.writer.as_deref()?;
        self.get_writer(name)
    }

    /// Read with the first reader whose `can_read` accepts `data`.
    pub fn read(&self, data: &[u8], options: &ReadOptions) -> Result<Curve> {
        let Some(reader) = self.readers.values().find(|r| r.can_read(data)) else {
            return Err(Error::UnknownFormat(format!(
                "none of {} readers recognized {} bytes",
                self.readers.len(),
                data.len()
            )));
        };

        debug!(format = reader.name(), bytes = data.len(), "detected format");
        reader.read(data, options)
    }

    pub fn read_as(&self, data: &[u8], format: &str, options: &ReadOptions) -> Result<Curve> {
        self.get_reader(format)
            .ok_or_else(|| Error::NoReader(format.to_string()))?
            .read(data, options)
    }

    pub fn read_with_extension(&self, data: &[u8], ext: &str, options: &ReadOptions) -> Result<Curve> {
        self.reader_for_extension(ext)
            .ok_or_else(|| Error::NoReader(ext.to_string()))?
            .read(data, options)
    }

    pub fn write(&self, curve: &Curve, format: &str, options: &WriteOptions) -> Result<Vec<u8>> {
        self.get_writer(format)
            .ok_or_else(|| Error::NoWriter(format.to_string()))?
            .write(curve, options)
    }

    pub fn write_with_extension(
        &self,
        curve: &Curve,
        ext: &str,
        options: &WriteOptions,
    ) -> Result<Vec<u8>> {
        self.writer_for_extension(ext)
            .ok_or_else(|| Error::NoWriter(ext.to_string()))?
            .write(curve, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spline_core::BezierSpline;

    /// Reads `SPLINES <n>` as a curve with `n` empty open splines.
    struct CountReader;

    impl FormatReader for CountReader {
        fn name(&self) -> &'static str {
            "Count"
        }

        fn extensions(&self) -> &[&'static str] {
            &["cnt", "count"]
        }

        fn can_read(&self, data: &[u8]) -> bool {
            data.starts_with(b"SPLINES ")
        }

        fn read(&self, data: &[u8], _options: &ReadOptions) -> Result<Curve> {
            let n = std::str::from_utf8(&data[8..])
                .ok()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .ok_or_else(|| Error::schema("count", "expected an integer"))?;
            Ok(Curve::from_splines(
                (0..n).map(|_| BezierSpline::from_points(Vec::new(), false)).collect(),
            ))
        }
    }

    /// Writes `SPLINES <n>`.
    struct CountWriter;

    impl FormatWriter for CountWriter {
        fn name(&self) -> &'static str {
            "count"
        }

        fn extension(&self) -> &'static str {
            "cnt"
        }

        fn write(&self, curve: &Curve, _options: &WriteOptions) -> Result<Vec<u8>> {
            Ok(format!("SPLINES {}", curve.spline_count()).into_bytes())
        }
    }

    fn count_registry() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register_reader(CountReader);
        registry.register_writer(CountWriter);
        registry
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = count_registry();

        assert!(registry.get_reader("COUNT").is_some());
        assert!(registry.get_writer("Count").is_some());
        assert!(registry.reader_for_extension(".CNT").is_some());
        assert!(registry.reader_for_extension("count").is_some());
        assert!(registry.writer_for_extension("cnt").is_some());
        assert!(registry.writer_for_extension("count").is_none());
    }

    #[test]
    fn test_write_then_detect() {
        let registry = count_registry();
        let curve = Curve::from_splines(vec![BezierSpline::new(), BezierSpline::new()]);

        let bytes = registry
            .write_with_extension(&curve, ".cnt", &WriteOptions::default())
            .unwrap();
        assert_eq!(bytes, b"SPLINES 2");

        let back = registry.read(&bytes, &ReadOptions::default()).unwrap();
        assert_eq!(back.spline_count(), 2);

        let err = registry.read(b"{}", &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(_)));
    }

    #[test]
    fn test_reader_errors_pass_through() {
        let registry = count_registry();
        let err = registry
            .read_as(b"SPLINES many", "count", &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_missing_handlers() {
        let registry = FormatRegistry::new();

        let err = registry.read_as(b"", "count", &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NoReader(ref f) if f == "count"));

        let err = registry
            .read_with_extension(b"", "cnt", &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::NoReader(_)));

        let err = registry
            .write(&Curve::new(), "count", &WriteOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::NoWriter(_)));
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_defaults_include_json() {
        let registry = FormatRegistry::with_defaults();
        assert!(registry.get_reader("spline-json").is_some());
        assert!(registry.writer_for_extension(".json").is_some());
        assert!(registry.reader_for_extension("JSON").is_some());
    }
}
