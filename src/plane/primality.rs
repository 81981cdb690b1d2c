//! Primality check for plane orders.
//!
//! Plane orders in this game stay small (a card rarely holds more than a
//! dozen symbols), so trial division over `6k ± 1` is plenty.

/// Test if a number is prime.
///
/// ```
/// use cobble::plane::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let n = u64::from(n);
    let mut divisor = 5u64;
    while divisor * divisor <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes: Vec<u32> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_squares_of_primes() {
        for p in [5u32, 7, 11, 13, 101] {
            assert!(!is_prime(p * p), "{}", p * p);
        }
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(7919));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u32::MAX));
    }
}
