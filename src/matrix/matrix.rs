/// Dense matrix, read as an augmented system `[A | b]` where the last column holds
/// the constants.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn is_rref(&self) -> bool;
    fn augmented_solution(&self) -> Option<Vec<T>>;
    fn is_solved_by(&self, solution: &[T]) -> bool;
    fn at(&self, row: usize, col: usize) -> T;
}
