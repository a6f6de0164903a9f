use crate::fuzzer::Fuzzer;

/// One step of a map workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapOp {
    Put(i64, i64),
    Remove(i64),
    Get(i64),
}

impl MapOp {
    pub fn key(&self) -> i64 {
        match *self {
            MapOp::Put(k, _) | MapOp::Remove(k) | MapOp::Get(k) => k,
        }
    }
}

/// Shape of a generated workload.
///
/// Keys are drawn from `0..key_space`, so a small key space produces many
/// overwrites, removals of present keys and tombstone reuse.
#[derive(Clone, Copy, Debug)]
pub struct Workload {
    pub key_space: i64,
    /// Relative weights of put, remove and get.
    pub weights: (u32, u32, u32),
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            key_space: 64,
            weights: (5, 3, 2),
        }
    }
}

impl Workload {
    pub fn with_key_space(key_space: i64) -> Self {
        Self {
            key_space,
            ..Self::default()
        }
    }

    fn op(&self, fuzzer: &Fuzzer) -> MapOp {
        let (put, remove, get) = self.weights;
        let total = i64::from(put + remove + get).max(1);
        let roll = fuzzer.random_int(0, total - 1);
        let key = fuzzer.random_int(0, self.key_space.max(1) - 1);
        if roll < i64::from(put) {
            MapOp::Put(key, fuzzer.random_int(i64::MIN, i64::MAX))
        } else if roll < i64::from(put + remove) {
            MapOp::Remove(key)
        } else {
            MapOp::Get(key)
        }
    }

    /// `count` operations drawn from `fuzzer`.
    pub fn generate(&self, fuzzer: &Fuzzer, count: usize) -> Vec<MapOp> {
        fuzzer.repeat(count, || self.op(fuzzer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_seed_respects_key_space(seed in any::<u64>(), key_space in 1i64..100) {
            let ops = Workload::with_key_space(key_space).generate(&Fuzzer::from_u64(seed), 50);
            prop_assert!(ops.iter().all(|op| (0..key_space).contains(&op.key())));
        }
    }

    #[test]
    fn keys_stay_in_key_space() {
        let fuzzer = Fuzzer::from_u64(11);
        let ops = Workload::with_key_space(8).generate(&fuzzer, 500);
        assert_eq!(ops.len(), 500);
        assert!(ops.iter().all(|op| (0..8).contains(&op.key())));
    }

    #[test]
    fn zero_weight_kinds_never_appear() {
        let fuzzer = Fuzzer::from_u64(5);
        let workload = Workload {
            key_space: 16,
            weights: (1, 0, 0),
        };
        let ops = workload.generate(&fuzzer, 200);
        assert!(ops.iter().all(|op| matches!(op, MapOp::Put(..))));
    }

    #[test]
    fn same_seed_same_workload() {
        let a = Workload::default().generate(&Fuzzer::from_u64(9), 100);
        let b = Workload::default().generate(&Fuzzer::from_u64(9), 100);
        assert_eq!(a, b);
    }
}
