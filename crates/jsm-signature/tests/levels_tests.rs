use super::*;

#[test]
fn test_split_parameterized_member_type() {
    assert_eq!(
        split_type_levels("LX<LY<LZ;>;LV<LW;>;LU;>.A<LB;>;").unwrap(),
        vec![
            "LX<LY<LZ;>;LV<LW;>;LU;>.A<LB;>;".to_string(),
            "LX<LY<LZ;>;LV<LW;>;LU;>;".to_string(),
        ]
    );
}

#[test]
fn test_split_orders_levels_outer_to_inner() {
    assert_eq!(
        split_type_levels("Lp/Outer<TK;>.Middle<TV;>.Inner;").unwrap(),
        vec![
            "Lp.Outer<TK;>.Middle<TV;>.Inner;".to_string(),
            "Lp.Outer<TK;>;".to_string(),
            "Lp.Outer<TK;>.Middle<TV;>;".to_string(),
        ]
    );
}

#[test]
fn test_split_binary_nested_names_and_captures() {
    assert_eq!(
        split_type_levels("Lp/Outer$Inner<!*>;").unwrap(),
        vec!["Lp.Outer.Inner<*>;".to_string(), "Lp.Outer;".to_string()]
    );
    assert_eq!(split_type_levels("Ljava.lang.String;").unwrap(), vec!["Ljava.lang.String;"]);
}

#[test]
fn test_split_rejects_invalid_input() {
    assert!(split_type_levels("Lp.Outer<TK;>").is_err());
}

#[test]
fn test_type_arguments_of_innermost_level() {
    assert_eq!(
        type_arguments("Ljava.util.Map<TK;Ljava.util.List<TV;>;>;").unwrap(),
        vec!["TK;", "Ljava.util.List<TV;>;"]
    );
    assert_eq!(type_arguments("LOuter<TK;>.Inner<*+TT;>;").unwrap(), vec!["*", "+TT;"]);
    assert_eq!(type_arguments("[Ljava.util.List<-TT;>;").unwrap(), vec!["-TT;"]);
    assert!(type_arguments("Ljava.lang.String;").unwrap().is_empty());
    assert!(type_arguments("I").unwrap().is_empty());
}

#[test]
fn test_all_type_arguments_follow_levels() {
    let levels = split_type_levels("LOuter<TK;>.Inner<TV;>;").unwrap();
    assert_eq!(all_type_arguments(&levels).unwrap(), vec![vec!["TV;"], vec!["TK;"]]);
}
