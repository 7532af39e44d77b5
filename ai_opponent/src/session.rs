use proto::{GameId, PlayerInput, C2S};

use crate::AiError;

/// The game an opponent plays in
pub trait GameSession {
    fn game_id(&self) -> GameId;
}

impl GameSession for GameId {
    fn game_id(&self) -> GameId {
        self.clone()
    }
}

/// Destination for paddle inputs produced by an opponent
pub trait InputSink {
    fn send_input(&mut self, input: &PlayerInput) -> Result<(), AiError>;
}

impl InputSink for Vec<PlayerInput> {
    fn send_input(&mut self, input: &PlayerInput) -> Result<(), AiError> {
        self.push(input.clone());
        Ok(())
    }
}

/// Sink that encodes each input as a `C2S` message and hands the bytes on
pub struct EncodedSink<F> {
    send: F,
}

impl<F> EncodedSink<F>
where
    F: FnMut(&[u8]) -> Result<(), AiError>,
{
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F> InputSink for EncodedSink<F>
where
    F: FnMut(&[u8]) -> Result<(), AiError>,
{
    fn send_input(&mut self, input: &PlayerInput) -> Result<(), AiError> {
        let bytes = C2S::PlayerInput(input.clone()).to_bytes()?;
        (self.send)(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::{PaddleDir, Side};

    fn sample_input() -> PlayerInput {
        PlayerInput {
            side: Side::Right,
            game_id: GameId::new("match-7"),
            direction: PaddleDir::Up,
        }
    }

    #[test]
    fn test_vec_sink_collects_inputs() {
        let mut sink: Vec<PlayerInput> = Vec::new();
        sink.send_input(&sample_input()).unwrap();
        assert_eq!(sink, vec![sample_input()]);
    }

    #[test]
    fn test_encoded_sink_sends_decodable_bytes() {
        let mut frames: Vec<Vec<u8>> = Vec::new();
        {
            let mut sink = EncodedSink::new(|bytes: &[u8]| {
                frames.push(bytes.to_vec());
                Ok(())
            });
            sink.send_input(&sample_input()).unwrap();
        }

        assert_eq!(frames.len(), 1);
        let decoded = C2S::from_bytes(&frames[0]).unwrap();
        assert_eq!(decoded, C2S::PlayerInput(sample_input()));
    }

    #[test]
    fn test_encoded_sink_propagates_delivery_errors() {
        let mut sink =
            EncodedSink::new(|_: &[u8]| Err(AiError::Delivery("socket closed".to_string())));
        let err = sink.send_input(&sample_input()).unwrap_err();
        assert!(matches!(err, AiError::Delivery(_)));
    }

    #[test]
    fn test_game_id_is_its_own_session() {
        let id = GameId::new("abc");
        assert_eq!(id.game_id(), id);
    }
}
