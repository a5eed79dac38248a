//! Lazy stream of predictions

use crate::PatternNode;
use std::iter::FusedIterator;

/// Infinite iterator over successive predictions.
///
/// Every pull appends a value to each level of the chain it borrows, so the
/// stream cannot be restarted: a new stream continues where the last one
/// stopped. It never ends on its own; bound it with `take` or similar.
#[derive(Debug)]
pub struct PredictionStream<'a> {
    root: &'a mut PatternNode,
}

impl<'a> PredictionStream<'a> {
    pub(crate) fn new(root: &'a mut PatternNode) -> Self {
        Self { root }
    }
}

impl Iterator for PredictionStream<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.root.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for PredictionStream<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use predict_ops::difference;

    #[test]
    fn test_stream_continues_after_take() {
        let ones = PatternNode::new(vec![1.0, 1.0]);
        let mut root = PatternNode::new(vec![1.0, 2.0, 3.0]).with_operation(difference(), ones);

        let first: Vec<f64> = PredictionStream::new(&mut root).take(3).collect();
        assert_eq!(first, vec![4.0, 5.0, 6.0]);

        let second: Vec<f64> = PredictionStream::new(&mut root).take(2).collect();
        assert_eq!(second, vec![7.0, 8.0]);
        assert_eq!(root.values().len(), 8);
    }

    #[test]
    fn test_size_hint_unbounded() {
        let mut root = PatternNode::new(vec![2.0, 2.0]);
        let stream = PredictionStream::new(&mut root);
        assert_eq!(stream.size_hint(), (usize::MAX, None));
    }
}
