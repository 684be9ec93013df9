/// The numbers the program sorts, in the order they are produced.
pub const NUMBERS: [i32; 7] = [10, 20, 30, 40, 50, 60, 80];

pub fn get_numbers() -> Vec<i32> {
    NUMBERS.to_vec()
}
