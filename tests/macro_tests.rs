use nsv::{dumps, loads, nsv, Table};

#[test]
fn test_nsv_macro_empty_table() {
    let table = nsv![];
    assert_eq!(table, Table::new());
    assert_eq!(dumps(&table), "");
}

#[test]
fn test_nsv_macro_empty_rows() {
    let table = nsv![[], []];
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(Vec::is_empty));
    assert_eq!(dumps(&table), "\n\n");
}

#[test]
fn test_nsv_macro_mixed_cell_types() {
    let owned = String::from("owned");
    let table = nsv![["slice", owned], ['c', ""]];
    assert_eq!(
        table,
        vec![
            vec!["slice".to_string(), "owned".to_string()],
            vec!["c".to_string(), String::new()],
        ]
    );
}

#[test]
fn test_nsv_macro_expressions() {
    let name = "Ada";
    let table = nsv![[format!("{}!", name), name.to_uppercase()]];
    assert_eq!(table, vec![vec!["Ada!", "ADA"]]);
}

#[test]
fn test_nsv_macro_matches_loads() {
    let table = nsv![["a\nb", "\\"], [], [""]];
    assert_eq!(loads(&dumps(&table)), table);
}
