/// Columns in the cuisine grid for a viewport width (in terminal cells).
///
/// Layout only; selection state never depends on it.
pub fn grid_columns(width: usize) -> usize {
    match width {
        0..60 => 2,
        60..90 => 3,
        90..120 => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(grid_columns(40), 2);
        assert_eq!(grid_columns(60), 3);
        assert_eq!(grid_columns(89), 3);
        assert_eq!(grid_columns(100), 4);
        assert_eq!(grid_columns(200), 5);
    }
}
