use crate::{InvalidDrawStream, HIGHEST_NUMBER};

/// The order in which the numbers are called.
///
/// A stream created with [`DrawStream::new()`] holds every number from 1 to
/// 75 exactly once. It can't be modified afterwards, only shortened into a
/// new stream with [`DrawStream::truncated()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawStream {
    numbers: Vec<u8>,
}

impl DrawStream {
    pub fn new(numbers: Vec<u8>) -> Result<Self, InvalidDrawStream> {
        if numbers.len() != usize::from(HIGHEST_NUMBER) {
            return Err(InvalidDrawStream::WrongLength { len: numbers.len() });
        }
        let mut seen = [false; HIGHEST_NUMBER as usize + 1];
        for (draw_idx, &number) in numbers.iter().enumerate() {
            if !(1..=HIGHEST_NUMBER).contains(&number) {
                return Err(InvalidDrawStream::NumberOutOfRange { draw_idx, number });
            }
            if std::mem::replace(&mut seen[usize::from(number)], true) {
                return Err(InvalidDrawStream::DuplicateNumber { draw_idx, number });
            }
        }
        Ok(Self { numbers })
    }

    /// The first `len` draws of this stream.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            numbers: self.numbers[..len.min(self.numbers.len())].to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn get(&self, draw_idx: usize) -> Option<u8> {
        self.numbers.get(draw_idx).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.numbers
    }
}

impl<'a> IntoIterator for &'a DrawStream {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending() -> Vec<u8> {
        (1..=HIGHEST_NUMBER).collect()
    }

    #[test]
    fn accepts_permutations() {
        let mut numbers = ascending();
        numbers.reverse();
        let stream = DrawStream::new(numbers).unwrap();
        assert_eq!(stream.len(), 75);
        assert_eq!(stream.get(0), Some(75));
        assert_eq!(stream.get(75), None);
    }

    #[test]
    fn rejects_short_streams() {
        let mut numbers = ascending();
        numbers.pop();
        assert_eq!(
            DrawStream::new(numbers),
            Err(InvalidDrawStream::WrongLength { len: 74 })
        );
        assert_eq!(
            DrawStream::new(vec![]),
            Err(InvalidDrawStream::WrongLength { len: 0 })
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        let mut numbers = ascending();
        numbers[10] = 0;
        assert_eq!(
            DrawStream::new(numbers),
            Err(InvalidDrawStream::NumberOutOfRange {
                draw_idx: 10,
                number: 0
            })
        );

        let mut numbers = ascending();
        numbers[40] = 3;
        assert_eq!(
            DrawStream::new(numbers),
            Err(InvalidDrawStream::DuplicateNumber {
                draw_idx: 40,
                number: 3
            })
        );
    }

    #[test]
    fn truncation_keeps_the_prefix() {
        let stream = DrawStream::new(ascending()).unwrap();
        let short = stream.truncated(4);
        assert_eq!(short.as_slice(), &[1, 2, 3, 4]);
        assert!(stream.truncated(0).is_empty());
        assert_eq!(stream.truncated(100), stream);
    }
}
