use nsv::{dumps, lift, lift_rows, loads, nsv, spill, unlift, unlift_rows, unspill, Error};

#[test]
fn test_lift_matrix_to_row() {
    let matrix = dumps(nsv![["1", "2", "3"], ["4", "5", "6"], ["7", "8", "9"]]);
    let row = lift(&matrix);
    let table = loads(&row);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table[0],
        vec!["1", "2", "3", "", "4", "5", "6", "", "7", "8", "9", "", ""]
    );
    assert_eq!(unlift(&row).unwrap(), matrix);
}

#[test]
fn test_lift_three_levels() {
    let level0 = dumps(nsv![["a\\b", ""], [], ["x\ny"]]);
    let level1 = lift(&level0);
    let level2 = lift(&level1);
    let level3 = lift(&level2);
    assert_eq!(loads(&level3).len(), 1);
    assert_eq!(unlift(&level3).unwrap(), level2);
    assert_eq!(unlift(&unlift(&level3).unwrap()).unwrap(), level1);
    assert_eq!(
        unlift(&unlift(&unlift(&level3).unwrap()).unwrap()).unwrap(),
        level0
    );
}

#[test]
fn test_lift_arbitrary_text() {
    for text in ["", "\n", "no newline", "\\", "\\\\\\", "a\r\nb", "\n\n\n"] {
        let lifted = lift(text);
        assert_eq!(loads(&lifted).len(), 1, "text {:?}", text);
        assert_eq!(unlift(&lifted).unwrap(), text);
    }
}

#[test]
fn test_unlift_rejects_other_shapes() {
    assert!(matches!(unlift(""), Err(Error::NotSingleRow { rows: 0 })));
    assert!(matches!(unlift("a\n\nb\n\n"), Err(Error::NotSingleRow { rows: 2 })));
    assert_eq!(unlift("a\n\n").unwrap(), "a");
}

#[test]
fn test_spill_unspill() {
    let seqseq = vec![vec!["a", "b"], vec![], vec!["c"]];
    let seq = spill(seqseq.clone(), "|");
    assert_eq!(seq, vec!["a", "b", "|", "|", "c", "|"]);
    assert_eq!(unspill(seq, &"|"), seqseq);
}

#[test]
fn test_unspill_drops_unterminated_group() {
    assert_eq!(unspill(vec![1, 0, 2, 3], &0), vec![vec![1]]);
    assert!(unspill(Vec::<i32>::new(), &0).is_empty());
}

#[test]
fn test_lift_rows_matches_dumps() {
    let table = nsv![["", "x\ny"], [], ["\\"]];
    let lines = lift_rows(&table);
    assert_eq!(lines, vec!["\\", "x\\ny", "", "", "\\\\", ""]);
    let written: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    assert_eq!(written, dumps(&table));
    assert_eq!(unlift_rows(&lines), table);
}
