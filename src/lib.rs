mod error;
mod number_list;
pub mod persist;

pub use crate::error::NumberListError;
pub use crate::number_list::NumberList;
pub use digit_num::{Digit, DigitError, DigitList};

#[cfg(test)]
mod tests {
    use crate::NumberList;

    #[test]
    fn it_works() {
        let a = NumberList::from("1000000000000");
        let b = NumberList::from("999");
        println!("a = {}", a);
        println!("hex(a) = {}", a.change_scale());
        println!("a / b = {}", a.additional_operation(&b).unwrap());
        assert_eq!(a.change_scale().to_string(), "E8D4A51000");
        assert_eq!(a.additional_operation(&b).unwrap().to_string(), "1001001001");
    }
}
