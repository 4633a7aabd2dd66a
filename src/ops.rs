//! The AES round transformations and the fixed round sequences built on them.

/// An initialized state which can run the AES round sequences.
///
/// Encryption and decryption are exact structural mirrors: decryption consumes
/// the same key schedule in reverse round order. There is no branching on data
/// values anywhere in either sequence.
pub trait Cipher: Sized + AddRoundKey {
    /// Performs a normal round of AES encryption.
    fn encrypt_round(&mut self, rk: &Self);

    /// Performs the final round of AES encryption (no `MixColumns`).
    fn encrypt_round_last(&mut self, rk: &Self);

    /// Performs a normal round of AES decryption.
    fn decrypt_round(&mut self, rk: &Self);

    /// Performs the final round of AES decryption (no `InvMixColumns`).
    fn decrypt_round_last(&mut self, rk: &Self);

    /// Performs an AES encryption in-place.
    fn encrypt(&mut self, round_keys: &[Self]) {
        let rounds = round_keys.len();
        assert!(rounds == 11 || rounds == 13 || rounds == 15);

        self.add_round_key(&round_keys[0]);

        for key in &round_keys[1..rounds - 1] {
            self.encrypt_round(key);
        }

        self.encrypt_round_last(&round_keys[rounds - 1]);
    }

    /// Performs an AES decryption in-place.
    fn decrypt(&mut self, round_keys: &[Self]) {
        let rounds = round_keys.len();
        assert!(rounds == 11 || rounds == 13 || rounds == 15);

        self.add_round_key(&round_keys[rounds - 1]);

        for key in round_keys[1..rounds - 1].iter().rev() {
            self.decrypt_round(key);
        }

        self.decrypt_round_last(&round_keys[0]);
    }
}

impl<T> Cipher for T
where
    T: ShiftRows + MixColumns + SubBytes + AddRoundKey,
{
    fn encrypt_round(&mut self, rk: &Self) {
        self.sub_bytes();
        self.shift_rows();
        self.mix_columns();
        self.add_round_key(rk);
    }

    fn encrypt_round_last(&mut self, rk: &Self) {
        self.sub_bytes();
        self.shift_rows();
        self.add_round_key(rk);
    }

    fn decrypt_round(&mut self, rk: &Self) {
        self.inv_shift_rows();
        self.inv_sub_bytes();
        self.add_round_key(rk);
        self.inv_mix_columns();
    }

    fn decrypt_round_last(&mut self, rk: &Self) {
        self.inv_shift_rows();
        self.inv_sub_bytes();
        self.add_round_key(rk);
    }
}

pub trait ShiftRows {
    /// Executes `ShiftRows` in-place: row `r` rotates left by `r` positions.
    fn shift_rows(&mut self);

    /// Executes `InvShiftRows` in-place: row `r` rotates right by `r` positions.
    fn inv_shift_rows(&mut self);
}

pub trait MixColumns {
    /// Executes `MixColumns` in-place.
    ///
    /// ```text
    /// c[i] = 2 • b[i]
    ///      ⊕ 3 • b[i+1]
    ///      ⊕     b[i+2]
    ///      ⊕     b[i+3]
    /// ```
    fn mix_columns(&mut self);

    /// Executes `InvMixColumns` in-place.
    ///
    /// ```text
    /// c[i] = 14 • b[i]   // 0b1110
    ///      ⊕ 11 • b[i+1] // 0b1011
    ///      ⊕ 13 • b[i+2] // 0b1101
    ///      ⊕  9 • b[i+3] // 0b1001
    /// ```
    fn inv_mix_columns(&mut self);
}

pub trait SubBytes {
    /// Executes `SubBytes` in-place.
    fn sub_bytes(&mut self);

    /// Executes `InvSubBytes` in-place.
    fn inv_sub_bytes(&mut self);
}

pub trait AddRoundKey {
    /// XORs a round key into the state.
    fn add_round_key(&mut self, rk: &Self);
}
