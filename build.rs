//! Generates the forward and inverse S-box tables from the GF(2⁸) inverse table.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use gf256::Element;

/// The affine transformation applied after field inversion:
/// `A(i) = i ⊕ rotl(i, 1) ⊕ rotl(i, 2) ⊕ rotl(i, 3) ⊕ rotl(i, 4) ⊕ 0x63`.
fn affine(i: u8) -> u8 {
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

fn push_table(out: &mut String, doc: &str, name: &str, table: &[u8; 256]) {
    writeln!(out, "/// {doc}").unwrap();
    writeln!(out, "pub static {name}: [u8; 256] = [").unwrap();
    for row in table.chunks(16) {
        let mut line = String::from("   ");
        for byte in row {
            write!(line, " {byte:#04x},").unwrap();
        }
        writeln!(out, "{line}").unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn main() {
    let mut sbox = [0u8; 256];
    for (x, &Element(inv)) in gf256::inverse_table().iter().enumerate() {
        sbox[x] = affine(inv);
    }

    let mut inv_sbox = [0u8; 256];
    for (x, &s) in sbox.iter().enumerate() {
        inv_sbox[s as usize] = x as u8;
    }

    let mut out = String::new();
    push_table(&mut out, "The AES forward S-box.", "SBOX", &sbox);
    out.push('\n');
    push_table(&mut out, "The AES inverse S-box.", "INV_SBOX", &inv_sbox);

    let dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&dir).join("sbox.rs"), out).expect("failed to write sbox.rs");

    println!("cargo:rerun-if-changed=build.rs");
}
