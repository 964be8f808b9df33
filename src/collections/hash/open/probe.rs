use crate::util::hash::polynomial_hash;

/// The quadratic probe sequence for a key: `(origin + i²) mod cap` for `i` in `0..cap`.
///
/// Owns nothing from the table, so the slots can be mutated while probing.
pub(crate) struct Probe {
    origin: usize,
    offset: usize,
    step: usize,
    cap: usize,
}

impl Probe {
    pub fn new(key: &str, cap: usize) -> Probe {
        Probe {
            origin: polynomial_hash(key, cap),
            offset: 0,
            step: 0,
            cap,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.cap {
            return None;
        }

        let index = (self.origin + self.offset) % self.cap;
        // (i + 1)² = i² + 2i + 1, kept reduced so it never overflows.
        self.offset = (self.offset + 2 * self.step + 1) % self.cap;
        self.step += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cap - self.step.min(self.cap);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_quadratic() {
        let origin = polynomial_hash("key", 11);
        let indices: Vec<_> = Probe::new("key", 11).collect();

        assert_eq!(indices.len(), 11, "A probe should stop after cap steps.");
        for (i, index) in indices.into_iter().enumerate() {
            assert_eq!(index, (origin + i * i) % 11);
        }
    }
}
