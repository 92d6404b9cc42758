/// Builds a [`Table`](crate::Table) from bracketed rows.
///
/// Each cell is converted with `String::from`, so string slices, `String`s
/// and `char`s can be mixed.
///
/// ```rust
/// use nsv::nsv;
///
/// let table = nsv![["a", "b"], [], ['c']];
/// assert_eq!(table, vec![vec!["a".to_string(), "b".to_string()], vec![], vec!["c".to_string()]]);
/// assert!(nsv![].is_empty());
/// ```
#[macro_export]
macro_rules! nsv {
    ($([ $($cell:expr),* $(,)? ]),* $(,)?) => {{
        let table: $crate::Table = vec![
            $(vec![$(::std::string::String::from($cell)),*]),*
        ];
        table
    }};
}

#[cfg(test)]
mod tests {
    use crate::{dumps, Table};

    #[test]
    fn test_nsv_macro_empty() {
        assert_eq!(nsv![], Table::new());
        assert_eq!(nsv![[]], vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_nsv_macro_rows() {
        let owned = String::from("x\ny");
        let table = nsv![["a", ""], [owned], ['\\']];
        assert_eq!(table.len(), 3);
        assert_eq!(table[1][0], "x\ny");
        assert_eq!(dumps(&table), "a\n\\\n\nx\\ny\n\n\\\\\n\n");
    }

    #[test]
    fn test_nsv_macro_trailing_commas() {
        let table = nsv![["a", "b",], ["c"],];
        assert_eq!(table, nsv![["a", "b"], ["c"]]);
    }
}
