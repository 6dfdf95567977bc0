/// Splits a line into whitespace-delimited arguments.
/// Every token borrows from the line, is non-empty, and keeps its original order.
/// There is no upper limit on the number of tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}
