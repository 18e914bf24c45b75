//! Running accumulations.

use super::cursor::Cursor;

/// Yields the seed, then every intermediate accumulator.
pub struct Scan<C, A, F> {
    upstream: C,
    accumulator: Option<A>,
    function: F,
    seeded: bool,
    position: usize,
}

impl<C, A, F> Scan<C, A, F> {
    pub(crate) const fn new(upstream: C, seed: A, function: F) -> Self {
        Self {
            upstream,
            accumulator: Some(seed),
            function,
            seeded: false,
            position: 0,
        }
    }

    fn emit(&mut self, value: A) -> Option<(usize, A)> {
        let position = self.position;
        self.position += 1;
        Some((position, value))
    }
}

impl<C, A, F> Cursor for Scan<C, A, F>
where
    C: Cursor,
    A: Clone,
    F: FnMut(A, C::Value) -> A,
{
    type Key = usize;
    type Value = A;

    fn pull(&mut self) -> Option<(usize, A)> {
        if !self.seeded {
            self.seeded = true;
            let seed = self.accumulator.clone()?;
            return self.emit(seed);
        }
        let accumulator = self.accumulator.take()?;
        let (_, value) = self.upstream.pull()?;
        let next = (self.function)(accumulator, value);
        self.accumulator = Some(next.clone());
        self.emit(next)
    }
}

/// Threads an accumulator through the cursor, collecting one output per value.
pub(crate) fn map_accum<C, A, B, F>(mut cursor: C, mut accumulator: A, mut function: F) -> (A, Vec<B>)
where
    C: Cursor,
    F: FnMut(A, C::Value) -> (A, B),
{
    let mut outputs = Vec::new();
    while let Some((_, value)) = cursor.pull() {
        let (next, output) = function(accumulator, value);
        accumulator = next;
        outputs.push(output);
    }
    (accumulator, outputs)
}
