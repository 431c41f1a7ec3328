use lazy_static::*;

use crate::DigitList;
use crate::digit_num_constants::*;

lazy_static! {
    /// Decimal lists for the values `0..=MAX_CONSTANT`.
    pub static ref SMALL_CACHE: [DigitList; MAX_CONSTANT + 1] = {
        let mut cache: [DigitList; MAX_CONSTANT + 1] = Default::default();
        for (value, list) in cache.iter_mut().enumerate() {
            if value >= DECIMAL_RADIX as usize {
                list.push((value / DECIMAL_RADIX as usize) as u8);
            }
            list.push((value % DECIMAL_RADIX as usize) as u8);
        }
        cache
    };
}

pub fn zero() -> DigitList {
    SMALL_CACHE[0].clone()
}
