// A linear probe sequence.
//
// The sequence starts at the home slot of a hash and walks the table one
// entry at a time, wrapping around at the end of the table.
pub struct Probe {
    // The current index in the probe sequence.
    pub i: usize,
    // The current length of the probe sequence.
    pub len: usize,
    // The length of the table.
    capacity: usize,
}

impl Probe {
    // Initialize the probe sequence at the home slot of `hash`.
    #[inline]
    pub fn start(hash: u64, capacity: usize) -> Probe {
        debug_assert!(capacity > 0);

        Probe {
            i: (hash % capacity as u64) as usize,
            len: 0,
            capacity,
        }
    }

    // Increment the probe sequence.
    #[inline]
    pub fn next(&mut self) {
        self.len += 1;
        self.i += 1;

        if self.i == self.capacity {
            self.i = 0;
        }
    }
}

// Returns the number of entries a table of `capacity` slots may hold before it must grow.
//
// A table grows once its length strictly exceeds `capacity * max_load_factor`. For an
// integer length that is the same as exceeding the floor of the product. The limit
// always leaves at least one slot empty, so probe sequences terminate.
#[inline]
pub fn limit(capacity: usize, max_load_factor: f64) -> usize {
    ((capacity as f64 * max_load_factor) as usize).min(capacity.saturating_sub(1))
}

// Returns the smallest capacity reachable by doubling `start` that holds `len` entries.
pub fn capacity_for(len: usize, start: usize, max_load_factor: f64) -> usize {
    let mut capacity = start;
    while len > limit(capacity, max_load_factor) {
        capacity = capacity.checked_mul(2).expect("capacity overflow");
    }

    capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_wraps() {
        let mut probe = Probe::start(11, 12);
        assert_eq!(probe.i, 11);

        probe.next();
        assert_eq!(probe.i, 0);
        assert_eq!(probe.len, 1);

        probe.next();
        assert_eq!(probe.i, 1);
    }

    #[test]
    fn probe_home_slot() {
        assert_eq!(Probe::start(1, 12).i, 1);
        assert_eq!(Probe::start(13, 12).i, 1);
        assert_eq!(Probe::start(25, 12).i, 1);
        assert_eq!(Probe::start(u64::MAX, 24).i, (u64::MAX % 24) as usize);
    }

    #[test]
    fn limits() {
        assert_eq!(limit(12, 0.25), 3);
        assert_eq!(limit(24, 0.25), 6);
        assert_eq!(limit(1, 0.5), 0);
        assert_eq!(limit(10, 0.75), 7);
        assert_eq!(limit(4, 1.0), 3);
    }

    #[test]
    fn capacity_doubles() {
        assert_eq!(capacity_for(0, 12, 0.25), 12);
        assert_eq!(capacity_for(3, 12, 0.25), 12);
        assert_eq!(capacity_for(4, 12, 0.25), 24);
        assert_eq!(capacity_for(7, 12, 0.25), 48);
        assert_eq!(capacity_for(1, 1, 0.5), 2);
        assert_eq!(capacity_for(2, 1, 0.5), 4);
    }
}
