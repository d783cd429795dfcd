use crate::domain::errors::BallotError;

/// Right-pads UTF-8 `text` with zeros into a Solidity `bytes32`.
pub fn encode_bytes32(text: &str) -> Result<[u8; 32], BallotError> {
    let bytes = text.as_bytes();
    if bytes.len() > 32 {
        return Err(BallotError::ProposalNameTooLong { name: text.to_string() });
    }

    let mut word = [0u8; 32];
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(word)
}

/// Decodes a `bytes32` value as text, dropping the trailing zero padding.
pub fn decode_bytes32(word: &[u8; 32]) -> String {
    let end = word.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&word[..end]).into_owned()
}
