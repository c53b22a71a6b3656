//! Textbook RSA on small integers. Not secure, only meant for toy messages.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PRIMES: (u64, u64) = (11, 13);
const HASH_PRIME: u64 = 17;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub exponent: u64,
    pub modulus: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: Key,
    pub private: Key,
}

impl KeyPair {
    /// Derives a key pair from the primes `p` and `q`. The public exponent is
    /// the smallest value from 3 upwards that is coprime with phi.
    pub fn generate(p: u64, q: u64) -> Result<KeyPair> {
        let modulus = p
            .checked_mul(q)
            .ok_or_else(|| Error::InvalidKey(format!("{} * {} overflows", p, q)))?;
        let phi = p
            .checked_sub(1)
            .zip(q.checked_sub(1))
            .map(|(p, q)| p * q)
            .filter(|&phi| phi > 3)
            .ok_or_else(|| Error::InvalidKey(format!("primes {} and {} are too small", p, q)))?;

        let public_exponent = (3..phi)
            .find(|&exponent| gcd(exponent, phi) == 1)
            .ok_or_else(|| Error::InvalidKey(format!("no public exponent for phi {}", phi)))?;
        let private_exponent = modular_inverse(public_exponent, phi)
            .ok_or_else(|| Error::InvalidKey(format!("no private exponent for phi {}", phi)))?;

        Ok(KeyPair {
            public: Key {
                exponent: public_exponent,
                modulus,
            },
            private: Key {
                exponent: private_exponent,
                modulus,
            },
        })
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Smallest positive `x` with `value * x ≡ 1 (mod modulus)`.
fn modular_inverse(value: u64, modulus: u64) -> Option<u64> {
    let (mut old_r, mut r) = (value as i128, modulus as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(modulus as i128) as u64)
}

pub fn modular_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }

    let modulus = modulus as u128;
    let mut result = 1u128;
    let mut base = base as u128 % modulus;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent % 2 == 1 {
            result = result * base % modulus;
        }
        exponent /= 2;
        base = base * base % modulus;
    }

    result as u64
}

/// Encrypts every byte of `message` on its own. Fails if a byte does not fit
/// below the modulus.
pub fn encrypt(message: &str, key: &Key) -> Result<Vec<u64>> {
    message
        .bytes()
        .map(|byte| {
            if byte as u64 >= key.modulus {
                return Err(Error::InvalidKey(format!(
                    "modulus {} cannot encode byte {}",
                    key.modulus, byte
                )));
            }
            Ok(modular_pow(byte as u64, key.exponent, key.modulus))
        })
        .collect()
}

/// Inverse of [`encrypt`]. Fails on a block at or above the modulus and on a
/// block that does not decrypt to a byte. Bytes that are not valid UTF-8 are
/// replaced.
pub fn decrypt(ciphertext: &[u64], key: &Key) -> Result<String> {
    let bytes = ciphertext
        .iter()
        .map(|&block| {
            if block >= key.modulus {
                return Err(Error::InvalidKey(format!(
                    "block {} is not below modulus {}",
                    block, key.modulus
                )));
            }
            let plain = modular_pow(block, key.exponent, key.modulus);
            u8::try_from(plain).map_err(|_| {
                Error::InvalidKey(format!("block {} decrypts to {}, not a byte", block, plain))
            })
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Sum of all bytes modulo 17.
pub fn additive_hash(message: &str) -> u64 {
    message
        .bytes()
        .fold(0, |hash, byte| (hash + byte as u64) % HASH_PRIME)
}

pub fn sign(message: &str, private_key: &Key) -> u64 {
    modular_pow(
        additive_hash(message),
        private_key.exponent,
        private_key.modulus,
    )
}

pub fn verify(message: &str, signature: u64, public_key: &Key) -> bool {
    modular_pow(signature, public_key.exponent, public_key.modulus) == additive_hash(message)
}
