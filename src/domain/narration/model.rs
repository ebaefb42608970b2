/// A bounded slice of one paragraph, submitted as a single synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

impl TextChunk {
    /// Length in characters, the unit the provider limit is expressed in
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Encoded audio returned for exactly one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFragment {
    pub paragraph_index: usize,
    pub chunk_index: usize,
    pub bytes: Vec<u8>,
}

/// The assembled MP3 for a whole article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioStream(Vec<u8>);

impl AudioStream {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for AudioStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
