use crate::compression;
use crate::error::Result;
use crate::objects::{Dictionary, Object};

/// A stream object: a dictionary plus raw bytes. `/Length` always tracks
/// the stored (possibly compressed) byte count.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    dictionary: Dictionary,
    data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.set("Length", data.len());

        Self { dictionary, data }
    }

    /// Deflate `data` and mark the stream `/Filter /FlateDecode`.
    pub fn deflated(data: &[u8]) -> Result<Self> {
        let compressed = compression::compress(data)?;
        let mut stream = Self::new(compressed);
        stream.set_filter("FlateDecode");
        Ok(stream)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.dictionary.set(key, value);
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.dictionary.set("Filter", Object::name(filter));
    }
}
