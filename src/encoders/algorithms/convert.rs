use super::errors::ConvertError;

/// Regroups a sequence of `from_bits`-wide values into `to_bits`-wide values.
///
/// Bits are consumed most-significant first. With `pad`, a trailing partial
/// group is shifted up and emitted. Without it, the leftover must be shorter
/// than one input group and entirely zero, which is what makes 5 to 8 the exact
/// inverse of a padded 8 to 5.
///
/// Both widths must lie in `1..=8`.
///
/// # Example
///
/// ```
/// use bech32_text::convert_bits;
///
/// let fives = convert_bits(&[0xff], 8, 5, true).unwrap();
/// assert_eq!(fives, vec![31, 28]);
/// assert_eq!(convert_bits(&fives, 5, 8, false).unwrap(), vec![0xff]);
/// ```
pub fn convert_bits(
    data: &[u8],
    from_bits: u8,
    to_bits: u8,
    pad: bool,
) -> Result<Vec<u8>, ConvertError> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(ConvertError::InvalidBitGroups { from_bits, to_bits });
    }

    let from = u32::from(from_bits);
    let to = u32::from(to_bits);
    let max_value: u32 = (1 << to) - 1;
    // Enough room for one incoming group on top of a not-yet-emitted partial group
    let max_acc: u32 = (1 << (from + to - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity((data.len() * from_bits as usize).div_ceil(to_bits as usize));

    for (position, &value) in data.iter().enumerate() {
        if u32::from(value) >> from != 0 {
            return Err(ConvertError::InvalidDataValue {
                value,
                position,
                from_bits,
            });
        }
        acc = ((acc << from) | u32::from(value)) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max_value) != 0 {
        return Err(ConvertError::InvalidPadding);
    }

    Ok(result)
}
