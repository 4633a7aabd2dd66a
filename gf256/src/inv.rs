use super::Element;

fn find_inverse(a: Element) -> Option<Element> {
    (0..=255)
        .map(Element)
        .find(|&b| a * b == Element(1))
}

/// The multiplicative inverse of every field element.
///
/// Element 0 is non-invertible and maps to 0, matching the convention the AES
/// S-box construction relies on.
pub fn inverse_table() -> [Element; 256] {
    let mut ret = [Element(0); 256];

    for x in 1..=255u8 {
        ret[x as usize] = find_inverse(Element(x)).expect("non-invertible element");
    }

    ret
}
