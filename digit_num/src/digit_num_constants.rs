pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'A' , 'B' ,
    'C' , 'D' , 'E' , 'F'
];

pub const DECIMAL_RADIX: u32 = 10;

pub const HEX_RADIX: u32 = 16;

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 16;

pub const MAX_CONSTANT: usize = 16;

/// Placeholder printed by `Display` for a list without digits.
pub const EMPTY_LIST: &str = "[]";
