//! Interactive player parsing coordinates from an injected input source.

use rand::rngs::SmallRng;

use super::Player;
use crate::common::InputError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Source of raw target requests, one line per call.
///
/// Implementations own their prompting; the player only parses what
/// comes back.
pub trait InputSource {
    fn request_line(&mut self) -> Result<String, InputError>;
}

/// Interactive player. Expects each request to yield two 1-based integers,
/// row then column, separated by whitespace, and normalizes them to grid
/// coordinates.
pub struct HumanPlayer<S> {
    source: S,
}

impl<S: InputSource> HumanPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: InputSource> Player for HumanPlayer<S> {
    fn ask(&mut self, _rng: &mut SmallRng) -> Result<Coordinate, InputError> {
        let line = self.source.request_line()?;
        parse_target(&line)
    }
}

/// Parse a 1-based "row col" pair into a grid coordinate.
fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::TokenCount(tokens.len()));
    }
    let row = parse_axis(tokens[0])?;
    let col = parse_axis(tokens[1])?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn parse_axis(token: &str) -> Result<usize, InputError> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;
    if !(1..=BOARD_SIZE as i64).contains(&value) {
        return Err(InputError::OutOfRange(value, BOARD_SIZE));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    struct OneLine(&'static str);

    impl InputSource for OneLine {
        fn request_line(&mut self) -> Result<String, InputError> {
            Ok(self.0.to_string())
        }
    }

    fn ask(line: &'static str) -> Result<Coordinate, InputError> {
        let mut rng = SmallRng::seed_from_u64(0);
        HumanPlayer::new(OneLine(line)).ask(&mut rng)
    }

    #[test]
    fn well_formed_input_is_normalized_to_zero_based() {
        assert_eq!(ask("3 4"), Ok(Coordinate::new(2, 3)));
        assert_eq!(ask("  1\t6 "), Ok(Coordinate::new(0, 5)));
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        assert_eq!(ask("3"), Err(InputError::TokenCount(1)));
        assert_eq!(ask("1 2 3"), Err(InputError::TokenCount(3)));
        assert_eq!(ask(""), Err(InputError::TokenCount(0)));
    }

    #[test]
    fn non_integer_tokens_are_rejected() {
        assert_eq!(ask("a 4"), Err(InputError::NotANumber("a".to_string())));
        assert_eq!(
            ask("2 4.5"),
            Err(InputError::NotANumber("4.5".to_string()))
        );
    }

    #[test]
    fn values_outside_the_declared_range_are_rejected() {
        assert_eq!(ask("0 4"), Err(InputError::OutOfRange(0, BOARD_SIZE)));
        assert_eq!(ask("3 7"), Err(InputError::OutOfRange(7, BOARD_SIZE)));
        assert_eq!(ask("-2 1"), Err(InputError::OutOfRange(-2, BOARD_SIZE)));
    }

    #[test]
    fn source_errors_pass_through() {
        struct Closed;
        impl InputSource for Closed {
            fn request_line(&mut self) -> Result<String, InputError> {
                Err(InputError::Closed)
            }
        }
        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = HumanPlayer::new(Closed);
        assert_eq!(player.ask(&mut rng), Err(InputError::Closed));
    }
}
