use rand::RngCore;

use crate::OsRng;

/**
    Generates random bytes using the operating system entropy source
*/
pub fn random_bytes(size: usize) -> Vec<u8> {
    let mut bytes: Vec<u8> = vec![0; size];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_size_is_honoured() {
        for size in [16, 20, 24, 32, 64] {
            assert_eq!(random_bytes(size).len(), size);
        }
    }

    #[test]
    fn successive_draws_differ() {
        assert_ne!(random_bytes(32), random_bytes(32));
    }
}
