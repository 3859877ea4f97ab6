use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

const RANGE: u64 = 1 << 63;

// A source of non-negative 63-bit integers that may be shared between threads.
pub trait RandomSource: Send + Sync {
  fn next63(&self) -> u64;

  fn reseed(&self, seed: u64);

  // Uniform draw in `[0, len)`. Values from the top of the range that would bias the modulo are
  // rejected and redrawn.
  fn index(&self, len: usize) -> usize {
    if len <= 1 {
      return 0;
    }

    let len = len as u64;
    let limit = RANGE - (RANGE % len);

    loop {
      let value = self.next63();
      if value < limit {
        return (value % len) as usize;
      }
    }
  }
}

pub struct LockedSource {
  rng: Mutex<StdRng>,
}

impl LockedSource {
  pub fn new(seed: u64) -> Self {
    LockedSource {
      rng: Mutex::new(StdRng::seed_from_u64(seed)),
    }
  }

  pub fn from_time() -> Self {
    let seed = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|elapsed| elapsed.as_nanos() as u64)
      .unwrap_or_default();

    LockedSource::new(seed)
  }

  // The generator state is valid even if a holder panicked, so poisoning is ignored.
  fn lock(&self) -> MutexGuard<'_, StdRng> {
    self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl RandomSource for LockedSource {
  fn next63(&self) -> u64 {
    self.lock().next_u64() >> 1
  }

  fn reseed(&self, seed: u64) {
    *self.lock() = StdRng::seed_from_u64(seed);
  }
}

impl std::fmt::Debug for LockedSource {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "LockedSource")
  }
}
