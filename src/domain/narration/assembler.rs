use super::model::{AudioFragment, AudioStream};

/// Concatenate fragments into one stream, in the order given.
///
/// MP3 frames are self-delimiting, so independently encoded fragments play
/// back continuously when their bytes are simply joined. No bytes are added,
/// stripped or re-encoded; an empty fragment list gives an empty stream.
pub fn assemble(fragments: Vec<AudioFragment>) -> AudioStream {
    let total: usize = fragments.iter().map(|f| f.bytes.len()).sum();
    let mut merged = Vec::with_capacity(total);

    for fragment in fragments {
        merged.extend_from_slice(&fragment.bytes);
    }

    tracing::debug!(audio_size = merged.len(), "Audio fragments assembled");

    AudioStream::from(merged)
}
