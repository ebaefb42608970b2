use super::error::NarrationConfigError;
use super::model::TextChunk;
use serde::Deserialize;

/// Largest chunk sent to the provider in a single request
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1400;

/// Where the chunker is allowed to cut a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Cut every `max_chunk_size` characters, even inside a word.
    #[default]
    Positional,
    /// Cut after the last whitespace that fits, falling back to a hard cut
    /// when a single word is longer than the limit.
    Whitespace,
}

impl std::str::FromStr for ChunkStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positional" => Ok(ChunkStrategy::Positional),
            "whitespace" => Ok(ChunkStrategy::Whitespace),
            other => Err(format!("unknown chunk strategy '{}'", other)),
        }
    }
}

/// Splits paragraph text into chunks no longer than the provider limit.
///
/// Lengths are counted in characters, never bytes, so a cut never lands
/// inside a multi-byte character. Concatenating the returned chunks always
/// gives back the input text.
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    max_chunk_size: usize,
    strategy: ChunkStrategy,
}

impl TextChunker {
    pub fn new(max_chunk_size: usize, strategy: ChunkStrategy) -> Result<Self, NarrationConfigError> {
        if max_chunk_size == 0 {
            return Err(NarrationConfigError::ZeroChunkSize);
        }
        Ok(Self {
            max_chunk_size,
            strategy,
        })
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    pub fn strategy(&self) -> ChunkStrategy {
        self.strategy
    }

    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let pieces = match self.strategy {
            ChunkStrategy::Positional => split_positional(text, self.max_chunk_size),
            ChunkStrategy::Whitespace => split_on_whitespace(text, self.max_chunk_size),
        };

        pieces
            .into_iter()
            .enumerate()
            .map(|(index, piece)| TextChunk {
                index,
                text: piece.to_string(),
            })
            .collect()
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            strategy: ChunkStrategy::default(),
        }
    }
}

fn split_positional(text: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (offset, _) in text.char_indices() {
        if count == max_chars {
            pieces.push(&text[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

fn split_on_whitespace(text: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // Byte offset just past the first `max_chars` characters
        let window_end = match rest.char_indices().nth(max_chars) {
            Some((offset, _)) => offset,
            None => {
                pieces.push(rest);
                break;
            }
        };

        let next_is_space = rest[window_end..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace);

        let cut = if next_is_space {
            window_end
        } else {
            rest[..window_end]
                .char_indices()
                .rev()
                .find(|(offset, c)| *offset > 0 && c.is_whitespace())
                .map(|(offset, c)| offset + c.len_utf8())
                .unwrap_or(window_end)
        };

        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }

    pieces
}
