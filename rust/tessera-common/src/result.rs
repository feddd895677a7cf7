pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        corrupt_data(name, condition)
    }
}

#[cold]
pub fn corrupt_data(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::CorruptData {
        element: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_width(width: usize) -> crate::Result<usize> {
        crate::verify_data!(cell_width, width == 3);
        Ok(width)
    }

    #[test]
    fn test_verify_data_passes_through_on_success() {
        assert_eq!(check_width(3).unwrap(), 3);
    }

    #[test]
    fn test_verify_data_reports_corrupt_data_naming_the_element() {
        let err = check_width(2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::CorruptData { element, .. } if element == "cell_width"
        ));
    }
}
