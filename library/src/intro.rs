#[must_use]
pub fn max<T: PartialOrd>(first: T, second: T) -> T {
    if second > first { second } else { first }
}

#[must_use]
pub fn fizz_buzz(number: i64) -> String {
    match (number % 3 == 0, number % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => number.to_string(),
    }
}
