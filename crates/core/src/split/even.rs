#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitError {
    IndexOutOfBounds { index: usize, count: usize },
    NoSiblings,
}

impl SplitError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds { .. } => "index is outside the sibling sequence",
            Self::NoSiblings => "no sibling left to take the remainder",
        }
    }
}

/// Floor quotient everywhere, remainder on the last slot. Empty for `count == 0`.
pub fn split_evenly(total: u32, count: usize) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }
    let count_u32 = u32::try_from(count).unwrap_or(u32::MAX);
    let quotient = total / count_u32;
    let remainder = total % count_u32;
    let mut out = vec![quotient; count];
    if let Some(last) = out.last_mut() {
        *last += remainder;
    }
    out
}

/// Pins slot `index` to `value` (capped at `total`) and splits what is left over the other
/// slots in order, remainder on the last of them.
pub fn redistribute(
    count: usize,
    index: usize,
    value: u32,
    total: u32,
) -> Result<Vec<u32>, SplitError> {
    if index >= count {
        return Err(SplitError::IndexOutOfBounds { index, count });
    }
    let value = value.min(total);
    if count == 1 {
        if value == total {
            return Ok(vec![total]);
        }
        return Err(SplitError::NoSiblings);
    }

    let mut rest = split_evenly(total - value, count - 1).into_iter();
    let mut out = Vec::with_capacity(count);
    for slot in 0..count {
        if slot == index {
            out.push(value);
        } else {
            out.push(rest.next().unwrap_or(0));
        }
    }
    Ok(out)
}
